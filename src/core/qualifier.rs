use crate::core::{
    calculators::{loan_to_value_ratio, monthly_debt_ratio},
    filters::{
        filter_credit_score, filter_debt_to_income, filter_loan_to_value, filter_max_loan_size,
    },
};
use crate::error::Result;
use crate::models::{ApplicantProfile, LoanOffer, QualificationResult, Stage, StageCount};
use validator::Validate;

/// Runs the eligibility pipeline for an applicant
///
/// # Pipeline Stages
/// 1. Maximum loan size
/// 2. Minimum credit score
/// 3. Maximum debt-to-income ratio
/// 4. Maximum loan-to-value ratio
///
/// Each stage consumes the previous stage's survivors. The final set does not
/// depend on the order; the funnel counts do.
#[derive(Debug, Clone, Copy, Default)]
pub struct Qualifier;

impl Qualifier {
    pub fn new() -> Self {
        Self
    }

    /// Find the offers the applicant qualifies for
    ///
    /// # Arguments
    /// * `rate_sheet` - All offers loaded from the rate sheet
    /// * `applicant` - The applicant's validated figures
    ///
    /// # Returns
    /// QualificationResult holding both ratios, the surviving offers in rate
    /// sheet order, and the count remaining after each stage
    pub fn find_qualifying_loans(
        &self,
        rate_sheet: &[LoanOffer],
        applicant: &ApplicantProfile,
    ) -> Result<QualificationResult> {
        applicant.validate()?;

        let debt_to_income = monthly_debt_ratio(applicant.monthly_debt, applicant.monthly_income)?;
        let loan_to_value = loan_to_value_ratio(applicant.loan_amount, applicant.home_value)?;

        let mut funnel = Vec::with_capacity(Stage::ORDERED.len());
        let mut remaining = rate_sheet.to_vec();

        for stage in Stage::ORDERED {
            remaining = match stage {
                Stage::MaxLoanSize => filter_max_loan_size(applicant.loan_amount, &remaining),
                Stage::CreditScore => filter_credit_score(applicant.credit_score, &remaining),
                Stage::DebtToIncome => filter_debt_to_income(debt_to_income, &remaining),
                Stage::LoanToValue => filter_loan_to_value(loan_to_value, &remaining),
            };

            tracing::debug!("After {} filter: {} offers remain", stage, remaining.len());
            funnel.push(StageCount {
                stage,
                remaining: remaining.len(),
            });
        }

        tracing::info!(
            "{} of {} offers qualify (dti={:.2}, ltv={:.2})",
            remaining.len(),
            rate_sheet.len(),
            debt_to_income,
            loan_to_value
        );

        Ok(QualificationResult {
            qualifying_loans: remaining,
            debt_to_income,
            loan_to_value,
            total_offers: rate_sheet.len(),
            funnel,
        })
    }
}
