//! Loan Qualifier - match a loan applicant against a bank rate sheet
//!
//! This library provides the qualification pipeline used by the
//! `loan-qualifier` command-line tool. An applicant's debt-to-income and
//! loan-to-value ratios are computed, then four eligibility filters are applied
//! in order to the rate sheet's loan offers.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod services;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{Qualifier, calculators::{loan_to_value_ratio, monthly_debt_ratio}};
pub use error::QualifierError;
pub use models::{ApplicantProfile, LoanOffer, QualificationResult, RateSheet, SaveOutcome};
pub use services::{load_csv, save_csv, DEFAULT_OUTPUT_PATH};
