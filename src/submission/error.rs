//! Submission failures

use thiserror::Error;

/// Why a submission did not go through; always retriable
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[allow(dead_code)]
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("submission service unavailable")]
    Unavailable,
}
