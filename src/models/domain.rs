use std::fmt;
use std::path::PathBuf;
use validator::Validate;

/// A single lender's terms from a rate sheet
#[derive(Debug, Clone, PartialEq)]
pub struct LoanOffer {
    pub lender: String,
    pub max_loan_amount: f64,
    pub max_ltv: f64,
    pub max_dti: f64,
    pub min_credit_score: u32,
    pub interest_rate: f64,
}

impl LoanOffer {
    /// Fields in rate sheet column order
    ///
    /// Numbers use their shortest `Display` form, so `300000` stays `300000`
    /// and every value parses back to the same `f64`.
    pub fn to_record(&self) -> [String; 6] {
        [
            self.lender.clone(),
            self.max_loan_amount.to_string(),
            self.max_ltv.to_string(),
            self.max_dti.to_string(),
            self.min_credit_score.to_string(),
            self.interest_rate.to_string(),
        ]
    }
}

/// Loan offers in rate sheet order
pub type RateSheet = Vec<LoanOffer>;

/// The applicant's financial figures
#[derive(Debug, Clone, Copy, PartialEq, Validate)]
pub struct ApplicantProfile {
    #[validate(range(min = 1, message = "credit score must be a positive integer"))]
    pub credit_score: u32,
    #[validate(range(min = 0.0, message = "monthly debt cannot be negative"))]
    pub monthly_debt: f64,
    #[validate(range(exclusive_min = 0.0, message = "monthly income must be positive"))]
    pub monthly_income: f64,
    #[validate(range(exclusive_min = 0.0, message = "loan amount must be positive"))]
    pub loan_amount: f64,
    #[validate(range(exclusive_min = 0.0, message = "home value must be positive"))]
    pub home_value: f64,
}

/// Eligibility filter stages, in the order they are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    MaxLoanSize,
    CreditScore,
    DebtToIncome,
    LoanToValue,
}

impl Stage {
    pub const ORDERED: [Stage; 4] = [
        Stage::MaxLoanSize,
        Stage::CreditScore,
        Stage::DebtToIncome,
        Stage::LoanToValue,
    ];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::MaxLoanSize => "max loan size",
            Stage::CreditScore => "credit score",
            Stage::DebtToIncome => "debt to income",
            Stage::LoanToValue => "loan to value",
        };
        f.write_str(name)
    }
}

/// Offers remaining after a filter stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageCount {
    pub stage: Stage,
    pub remaining: usize,
}

/// Outcome of running the qualification pipeline for one applicant
#[derive(Debug, Clone)]
pub struct QualificationResult {
    pub qualifying_loans: Vec<LoanOffer>,
    pub debt_to_income: f64,
    pub loan_to_value: f64,
    pub total_offers: usize,
    pub funnel: Vec<StageCount>,
}

/// What happened when the applicant was offered a saved copy of the results
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(PathBuf),
    Failed(PathBuf),
    Skipped,
}
