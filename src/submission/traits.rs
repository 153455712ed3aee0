//! Trait abstraction for the submission effect to enable mocking in tests

use super::error::SubmissionError;
use crate::state::FieldValues;
use async_trait::async_trait;

/// Asynchronous operation that finalizes a validated form.
///
/// Controllers treat it as opaque: it resolves to success or failure and
/// owns any timeout policy itself.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionEffect: Send + Sync {
    async fn submit(&self, values: &FieldValues) -> Result<(), SubmissionError>;
}
