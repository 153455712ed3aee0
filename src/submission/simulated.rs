//! Stand-in for a real backend: waits, then resolves

use super::error::SubmissionError;
use super::traits::SubmissionEffect;
use crate::config::TuiConfig;
use crate::state::FieldValues;
use async_trait::async_trait;
use std::time::Duration;

/// Default artificial delay before a simulated submission resolves
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// How the simulated submission resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulatedOutcome {
    #[default]
    Succeed,
    Fail,
}

/// Submission effect that sleeps for a fixed delay
#[derive(Debug, Clone)]
pub struct SimulatedSubmission {
    delay: Duration,
    outcome: SimulatedOutcome,
}

impl SimulatedSubmission {
    pub fn new(delay: Duration, outcome: SimulatedOutcome) -> Self {
        Self { delay, outcome }
    }

    /// Build from user configuration
    pub fn from_config(config: &TuiConfig) -> Self {
        let outcome = if config.simulate_submission_failure() {
            SimulatedOutcome::Fail
        } else {
            SimulatedOutcome::Succeed
        };
        Self::new(config.submission_delay(), outcome)
    }

    #[allow(dead_code)]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmission {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY, SimulatedOutcome::Succeed)
    }
}

#[async_trait]
impl SubmissionEffect for SimulatedSubmission {
    async fn submit(&self, values: &FieldValues) -> Result<(), SubmissionError> {
        tracing::debug!(
            fields = values.len(),
            delay_ms = self.delay.as_millis() as u64,
            "Simulating submission"
        );
        tokio::time::sleep(self.delay).await;
        match self.outcome {
            SimulatedOutcome::Succeed => Ok(()),
            SimulatedOutcome::Fail => Err(SubmissionError::Unavailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_two_second_delay() {
        let effect = SimulatedSubmission::default();
        assert_eq!(effect.delay(), Duration::from_millis(2000));
    }

    #[tokio::test]
    async fn test_succeeds_after_delay() {
        let effect = SimulatedSubmission::new(Duration::from_millis(1), SimulatedOutcome::Succeed);
        assert_eq!(effect.submit(&FieldValues::new()).await, Ok(()));
    }

    #[tokio::test]
    async fn test_configured_failure() {
        let effect = SimulatedSubmission::new(Duration::from_millis(1), SimulatedOutcome::Fail);
        assert_eq!(
            effect.submit(&FieldValues::new()).await,
            Err(SubmissionError::Unavailable)
        );
    }

    #[test]
    fn test_from_config() {
        let config = TuiConfig {
            submission_delay_ms: Some(5),
            simulate_submission_failure: Some(true),
            ..Default::default()
        };
        let effect = SimulatedSubmission::from_config(&config);
        assert_eq!(effect.delay(), Duration::from_millis(5));
        assert_eq!(effect.outcome, SimulatedOutcome::Fail);
    }

    #[test]
    fn test_blocking_submit_with_tokio_test() {
        let effect = SimulatedSubmission::new(Duration::ZERO, SimulatedOutcome::Succeed);
        let result = tokio_test::block_on(effect.submit(&FieldValues::new()));
        assert!(result.is_ok());
    }
}
