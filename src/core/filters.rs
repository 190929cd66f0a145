use crate::models::LoanOffer;

/// Keep offers whose maximum loan amount covers the requested loan
///
/// This is Stage 1 of the qualification pipeline.
#[inline]
pub fn filter_max_loan_size(loan_amount: f64, offers: &[LoanOffer]) -> Vec<LoanOffer> {
    keep(offers, |offer| offer.max_loan_amount >= loan_amount)
}

/// Keep offers whose minimum credit score the applicant meets
///
/// This is Stage 2 of the qualification pipeline.
#[inline]
pub fn filter_credit_score(credit_score: u32, offers: &[LoanOffer]) -> Vec<LoanOffer> {
    keep(offers, |offer| offer.min_credit_score <= credit_score)
}

/// Keep offers whose maximum DTI is at least the applicant's ratio
#[inline]
pub fn filter_debt_to_income(dti_ratio: f64, offers: &[LoanOffer]) -> Vec<LoanOffer> {
    keep(offers, |offer| offer.max_dti >= dti_ratio)
}

/// Keep offers whose maximum LTV is at least the applicant's ratio
#[inline]
pub fn filter_loan_to_value(ltv_ratio: f64, offers: &[LoanOffer]) -> Vec<LoanOffer> {
    keep(offers, |offer| offer.max_ltv >= ltv_ratio)
}

// Survivors are cloned in their original relative order.
fn keep<F>(offers: &[LoanOffer], predicate: F) -> Vec<LoanOffer>
where
    F: Fn(&LoanOffer) -> bool,
{
    offers.iter().filter(|offer| predicate(offer)).cloned().collect()
}
