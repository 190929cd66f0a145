//! Interactive wizard that walks an applicant through qualification.
//!
//! The wizard is an ordered sequence of typed steps:
//! 1. [`Wizard::load_bank_data`] - path prompt, rate sheet load
//! 2. [`Wizard::get_applicant_info`] - five validated figures
//! 3. [`Wizard::find_qualifying_loans`] - ratios and filter pipeline
//! 4. [`Wizard::save_qualifying_loans`] - optional CSV export
//!
//! All terminal interaction goes through a [`Prompter`], so the same flow can
//! be driven by stdin/stdout or by a scripted prompter in tests.

pub mod prompt;

pub use prompt::{Prompter, StdioPrompter};

use crate::core::Qualifier;
use crate::error::{QualifierError, Result};
use crate::models::{ApplicantProfile, LoanOffer, QualificationResult, RateSheet, SaveOutcome};
use crate::services::{load_csv, save_csv};
use std::path::PathBuf;
use std::str::FromStr;
use validator::Validate;

const INVALID_INPUT: &str = "Invalid input, please re-enter.";

/// One of the applicant figures the wizard asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicantField {
    CreditScore,
    MonthlyDebt,
    MonthlyIncome,
    LoanAmount,
    HomeValue,
}

impl ApplicantField {
    pub const ORDERED: [ApplicantField; 5] = [
        ApplicantField::CreditScore,
        ApplicantField::MonthlyDebt,
        ApplicantField::MonthlyIncome,
        ApplicantField::LoanAmount,
        ApplicantField::HomeValue,
    ];

    pub fn question(self) -> &'static str {
        match self {
            ApplicantField::CreditScore => "What's your credit score?",
            ApplicantField::MonthlyDebt => "What's your current amount of monthly debt?",
            ApplicantField::MonthlyIncome => "What's your total monthly income?",
            ApplicantField::LoanAmount => "What's your desired loan amount?",
            ApplicantField::HomeValue => "What's your home value?",
        }
    }

    /// Name of the matching [`ApplicantProfile`] field
    pub fn field_name(self) -> &'static str {
        match self {
            ApplicantField::CreditScore => "credit_score",
            ApplicantField::MonthlyDebt => "monthly_debt",
            ApplicantField::MonthlyIncome => "monthly_income",
            ApplicantField::LoanAmount => "loan_amount",
            ApplicantField::HomeValue => "home_value",
        }
    }
}

/// Summary of a completed wizard run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub total_offers: usize,
    pub qualifying_loans: usize,
    pub save: SaveOutcome,
}

/// Sequential qualification wizard
pub struct Wizard<P> {
    prompter: P,
    qualifier: Qualifier,
    default_output_path: PathBuf,
}

impl<P: Prompter> Wizard<P> {
    pub fn new(prompter: P, default_output_path: impl Into<PathBuf>) -> Self {
        Self {
            prompter,
            qualifier: Qualifier::new(),
            default_output_path: default_output_path.into(),
        }
    }

    /// Hand back the prompter, e.g. to inspect what a scripted run printed
    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Run every step in order
    ///
    /// Fatal conditions (missing or malformed rate sheet, closed input) are
    /// returned as errors. A failed save is not fatal and shows up in the
    /// summary instead.
    pub fn run(&mut self) -> Result<RunSummary> {
        let rate_sheet = self.load_bank_data()?;
        let applicant = self.get_applicant_info()?;
        let result = self.find_qualifying_loans(&rate_sheet, &applicant)?;
        let save = self.save_qualifying_loans(&result.qualifying_loans)?;

        self.prompter.say("\n\nThank you for using the application.")?;

        Ok(RunSummary {
            total_offers: rate_sheet.len(),
            qualifying_loans: result.qualifying_loans.len(),
            save,
        })
    }

    /// Ask for the rate sheet location and load it
    pub fn load_bank_data(&mut self) -> Result<RateSheet> {
        let answer = self.prompter.text("Enter a file path to a rate-sheet (.csv):")?;
        let path = PathBuf::from(answer);

        if !path.exists() {
            return Err(QualifierError::RateSheetNotFound(path));
        }

        load_csv(&path)
    }

    /// Ask for the applicant's figures, re-asking any that fail validation
    pub fn get_applicant_info(&mut self) -> Result<ApplicantProfile> {
        let mut profile = ApplicantProfile {
            credit_score: 0,
            monthly_debt: 0.0,
            monthly_income: 0.0,
            loan_amount: 0.0,
            home_value: 0.0,
        };

        for field in ApplicantField::ORDERED {
            self.ask_field(field, &mut profile)?;
        }

        loop {
            let errors = match profile.validate() {
                Ok(()) => return Ok(profile),
                Err(errors) => errors,
            };

            tracing::debug!("Applicant figures rejected: {}", errors);

            for field in ApplicantField::ORDERED {
                if errors.errors().contains_key(field.field_name()) {
                    self.prompter.say(INVALID_INPUT)?;
                    self.ask_field(field, &mut profile)?;
                }
            }
        }
    }

    /// Compute the ratios, run the filters and report the results
    pub fn find_qualifying_loans(
        &mut self,
        rate_sheet: &[LoanOffer],
        applicant: &ApplicantProfile,
    ) -> Result<QualificationResult> {
        let result = self.qualifier.find_qualifying_loans(rate_sheet, applicant)?;

        self.prompter.say(&format!(
            "The monthly debt to income ratio is {:.2}",
            result.debt_to_income
        ))?;
        self.prompter.say(&format!(
            "The loan to value ratio is {:.2}.",
            result.loan_to_value
        ))?;
        self.prompter.say(&format!(
            "Found {} qualifying loans",
            result.qualifying_loans.len()
        ))?;

        Ok(result)
    }

    /// Offer to save the qualifying loans to a CSV file
    ///
    /// Nothing is asked or written when there are no qualifying loans.
    pub fn save_qualifying_loans(&mut self, qualifying_loans: &[LoanOffer]) -> Result<SaveOutcome> {
        if qualifying_loans.is_empty() {
            self.prompter
                .say("No qualifying loans to save, exiting application.")?;
            return Ok(SaveOutcome::Skipped);
        }

        let wants_file = self.prompter.confirm(
            "Would you like to save the list of qualifying loans to a csv file?",
            true,
        )?;
        if !wants_file {
            self.prompter.say(
                "File not saved. Please rerun application if a new file needs to be generated.",
            )?;
            return Ok(SaveOutcome::Skipped);
        }

        let use_default = self.prompter.confirm(
            &format!(
                "Would you like to save the file in the default location? ({})",
                self.default_output_path.display()
            ),
            true,
        )?;

        let path = if use_default {
            self.default_output_path.clone()
        } else {
            self.ask_output_path()?
        };

        if save_csv(qualifying_loans, &path) {
            self.prompter.say("File successfully saved")?;
            Ok(SaveOutcome::Saved(path))
        } else {
            self.prompter
                .say("Error saving file, please rerun application.")?;
            Ok(SaveOutcome::Failed(path))
        }
    }

    fn ask_output_path(&mut self) -> Result<PathBuf> {
        loop {
            let answer = self.prompter.text(
                "Please enter the filepath, including both directory path and file name, \
                 where you would like to save the loan information. \
                 Either absolute or relative filepaths may be used.",
            )?;
            if !answer.is_empty() {
                return Ok(PathBuf::from(answer));
            }
            self.prompter.say(INVALID_INPUT)?;
        }
    }

    fn ask_field(&mut self, field: ApplicantField, profile: &mut ApplicantProfile) -> Result<()> {
        match field {
            ApplicantField::CreditScore => {
                profile.credit_score = self.ask_parsed(field, |_: &u32| true)?
            }
            ApplicantField::MonthlyDebt => profile.monthly_debt = self.ask_amount(field)?,
            ApplicantField::MonthlyIncome => profile.monthly_income = self.ask_amount(field)?,
            ApplicantField::LoanAmount => profile.loan_amount = self.ask_amount(field)?,
            ApplicantField::HomeValue => profile.home_value = self.ask_amount(field)?,
        }
        Ok(())
    }

    fn ask_amount(&mut self, field: ApplicantField) -> Result<f64> {
        self.ask_parsed(field, |value: &f64| value.is_finite())
    }

    fn ask_parsed<T, F>(&mut self, field: ApplicantField, accept: F) -> Result<T>
    where
        T: FromStr,
        F: Fn(&T) -> bool,
    {
        loop {
            let answer = self.prompter.text(field.question())?;
            match answer.parse::<T>() {
                Ok(value) if accept(&value) => return Ok(value),
                _ => {
                    tracing::debug!("Could not use {:?} for {}", answer, field.field_name());
                    self.prompter.say(INVALID_INPUT)?;
                }
            }
        }
    }
}
