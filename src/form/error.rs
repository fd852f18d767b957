use super::ErrorMap;
use thiserror::Error;

/// Failure reported by a [`ContactSubmitter`](super::ContactSubmitter).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("contact request rejected: {0}")]
    Rejected(String),

    #[error("contact service unavailable: {0}")]
    Unavailable(String),
}

/// Why a submit attempt did not end in success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(ErrorMap),

    #[error("a submission is already in progress")]
    InProgress,

    #[error("no submission is in progress")]
    NotSubmitting,

    #[error(transparent)]
    Failed(#[from] SubmissionError),
}
