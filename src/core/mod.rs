// Core algorithm exports
pub mod calculators;
pub mod filters;
pub mod qualifier;

pub use calculators::{loan_to_value_ratio, monthly_debt_ratio};
pub use filters::{
    filter_credit_score, filter_debt_to_income, filter_loan_to_value, filter_max_loan_size,
};
pub use qualifier::Qualifier;
