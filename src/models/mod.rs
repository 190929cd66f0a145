// Model exports
pub mod domain;

pub use domain::{
    ApplicantProfile, LoanOffer, QualificationResult, RateSheet, SaveOutcome, Stage, StageCount,
};
