//! Submission effect used to finalize completed forms

mod error;
mod simulated;
mod traits;

pub use error::SubmissionError;
pub use simulated::{SimulatedSubmission, DEFAULT_DELAY};
pub use traits::SubmissionEffect;

#[cfg(test)]
pub use traits::MockSubmissionEffect;
