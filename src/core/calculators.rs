use crate::error::{QualifierError, Result};

/// Monthly debt payments divided by monthly income
///
/// A zero or non-finite income is reported as an error rather than
/// producing an infinite or NaN ratio.
#[inline]
pub fn monthly_debt_ratio(monthly_debt: f64, monthly_income: f64) -> Result<f64> {
    ratio(monthly_debt, monthly_income, "debt to income ratio")
}

/// Loan amount divided by the appraised home value
#[inline]
pub fn loan_to_value_ratio(loan_amount: f64, home_value: f64) -> Result<f64> {
    ratio(loan_amount, home_value, "loan to value ratio")
}

fn ratio(numerator: f64, denominator: f64, name: &'static str) -> Result<f64> {
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(QualifierError::ZeroDenominator { ratio: name });
    }
    Ok(numerator / denominator)
}
