use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while qualifying an applicant
#[derive(Debug, Error)]
pub enum QualifierError {
    #[error("Oops! Can't find this path: {}", .0.display())]
    RateSheetNotFound(PathBuf),

    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("Cannot compute {ratio}: denominator must be a nonzero number")]
    ZeroDenominator { ratio: &'static str },

    #[error("Invalid applicant profile: {0}")]
    InvalidApplicant(#[from] validator::ValidationErrors),

    #[error("Input closed before all questions were answered")]
    InputClosed,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, QualifierError>;
