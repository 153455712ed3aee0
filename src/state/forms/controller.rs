//! Multi-step form state machine
//!
//! `StepFormController` walks the user through the steps of a [`FormSchema`],
//! validating only the current step's fields before moving forward, and hands
//! the finished values to a completion callback exactly once.
//!
//! Submission is split in two so the UI loop keeps running while the effect
//! is in flight: [`StepFormController::submit`] arms the guard and returns a
//! snapshot for the effect, [`StepFormController::finish_submission`] applies
//! the outcome. [`StepFormController::submit_with`] awaits both in one call.

use super::schema::FormSchema;
use crate::state::toast::{Notification, NotificationSink};
use crate::submission::{SubmissionEffect, SubmissionError};
use std::collections::BTreeMap;

/// Field name to string value
pub type FieldValues = BTreeMap<String, String>;

/// Receives the finished values once the form completes
pub type CompletionCallback = Box<dyn FnOnce(FieldValues) + Send>;

/// Where the controller is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing(usize),
    Submitting,
    Completed,
}

/// Result of [`StepFormController::advance`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Current step failed validation; only `errors` changed
    Blocked,
    /// Moved forward to the given step
    Moved(usize),
    /// Last step passed; run the submission effect on these values
    Submit(FieldValues),
    /// Already submitting or completed
    Ignored,
}

/// Mutable runtime state of one form
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub current_step: usize,
    pub values: FieldValues,
    pub errors: BTreeMap<String, String>,
    pub is_submitting: bool,
}

pub struct StepFormController {
    schema: FormSchema,
    state: FormState,
    completed: bool,
    on_complete: Option<CompletionCallback>,
}

impl std::fmt::Debug for StepFormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepFormController")
            .field("state", &self.state)
            .field("completed", &self.completed)
            .finish_non_exhaustive()
    }
}

impl StepFormController {
    pub fn new(schema: FormSchema, on_complete: CompletionCallback) -> Self {
        Self {
            schema,
            state: FormState::default(),
            completed: false,
            on_complete: Some(on_complete),
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    #[allow(dead_code)]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn current_step(&self) -> usize {
        self.state.current_step
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting
    }

    pub fn is_last_step(&self) -> bool {
        self.state.current_step == self.schema.last_step()
    }

    pub fn phase(&self) -> FormPhase {
        if self.completed {
            FormPhase::Completed
        } else if self.state.is_submitting {
            FormPhase::Submitting
        } else {
            FormPhase::Editing(self.state.current_step)
        }
    }

    /// Current value of a field (empty if never written)
    pub fn value(&self, name: &str) -> &str {
        self.state.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.state.errors.get(name).map(String::as_str)
    }

    /// Write a field value; no validation happens here
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) {
        if self.completed {
            tracing::debug!(field = name, "Ignoring write to completed form");
            return;
        }
        if self.schema.field(name).is_none() {
            tracing::debug!(field = name, "Storing value for a field outside the schema");
        }
        self.state.values.insert(name.to_string(), value.into());
    }

    /// Run the rules of one step's fields against the current values.
    ///
    /// Failing fields get their message in `errors`; on a pass every field of
    /// the step has its error cleared. Other steps are never touched.
    pub fn validate_step(&mut self, step: usize) -> bool {
        let Some(spec) = self.schema.step(step) else {
            tracing::warn!(step, "Validation requested for unknown step");
            return false;
        };

        let failures: Vec<(&'static str, &'static str)> = spec
            .fields
            .iter()
            .filter_map(|field| {
                let value = self.state.values.get(field.name).map_or("", String::as_str);
                field.check(value).err().map(|message| (field.name, message))
            })
            .collect();

        if failures.is_empty() {
            for field in &spec.fields {
                self.state.errors.remove(field.name);
            }
            return true;
        }

        for field in &spec.fields {
            if !failures.iter().any(|(name, _)| *name == field.name) {
                self.state.errors.remove(field.name);
            }
        }
        for (name, message) in failures {
            self.state.errors.insert(name.to_string(), message.to_string());
        }
        false
    }

    /// Validate the current step, then move forward or start submitting
    pub fn advance(&mut self) -> Advance {
        if self.completed {
            return Advance::Ignored;
        }

        let step = self.state.current_step;
        if !self.validate_step(step) {
            tracing::debug!(step, errors = self.state.errors.len(), "Step blocked");
            return Advance::Blocked;
        }

        if step < self.schema.last_step() {
            self.state.current_step += 1;
            tracing::debug!(from = step, to = step + 1, "Advanced step");
            return Advance::Moved(self.state.current_step);
        }

        match self.submit() {
            Some(values) => Advance::Submit(values),
            None => Advance::Ignored,
        }
    }

    /// Step back one step; never validates
    pub fn retreat(&mut self) -> bool {
        if self.completed || self.state.is_submitting || self.state.current_step == 0 {
            return false;
        }
        self.state.current_step -= 1;
        true
    }

    /// Arm the submission guard and snapshot the values for the effect.
    ///
    /// Returns `None` while a submission is already in flight or after
    /// completion, which makes repeated calls harmless.
    pub fn submit(&mut self) -> Option<FieldValues> {
        if self.completed || self.state.is_submitting {
            tracing::debug!("Submission already in flight");
            return None;
        }
        self.state.is_submitting = true;
        tracing::info!(fields = self.state.values.len(), "Submission started");
        Some(self.state.values.clone())
    }

    /// Apply the outcome of the submission effect.
    ///
    /// Success moves the values out to the completion callback and makes the
    /// controller terminal. Failure keeps every value and the current step so
    /// the user can retry. Returns true when the form completed.
    pub fn finish_submission(
        &mut self,
        outcome: Result<(), SubmissionError>,
        sink: &mut dyn NotificationSink,
    ) -> bool {
        if !self.state.is_submitting {
            tracing::warn!("Submission outcome arrived with no submission in flight");
            return false;
        }
        self.state.is_submitting = false;

        match outcome {
            Ok(()) => {
                self.completed = true;
                let values = std::mem::take(&mut self.state.values);
                self.state.errors.clear();
                tracing::info!("Submission succeeded");
                sink.notify(Notification::success(self.schema.success_message()));
                if let Some(on_complete) = self.on_complete.take() {
                    on_complete(values);
                }
                true
            }
            Err(err) => {
                tracing::warn!("Submission failed: {err}");
                sink.notify(Notification::error(self.schema.failure_message()));
                false
            }
        }
    }

    #[allow(dead_code)]
    /// Run a whole submission against `effect`, awaiting its outcome
    pub async fn submit_with<E>(&mut self, effect: &E, sink: &mut dyn NotificationSink) -> bool
    where
        E: SubmissionEffect + ?Sized,
    {
        let Some(values) = self.submit() else {
            return false;
        };
        let outcome = effect.submit(&values).await;
        self.finish_submission(outcome, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::field::{FieldRule, FieldSpec, ValidationRule};
    use crate::state::forms::schema::StepSpec;
    use crate::state::toast::NotificationLevel;
    use crate::submission::MockSubmissionEffect;
    use std::sync::{Arc, Mutex};

    type Captured = Arc<Mutex<Vec<FieldValues>>>;

    /// Steps `[{basics:[name,email]}, {challenge:[challenge]}]`
    fn scenario_schema() -> FormSchema {
        FormSchema::new(vec![
            StepSpec::new(
                "basics",
                "Basics",
                vec![
                    FieldSpec::text(
                        "name",
                        "Name",
                        FieldRule::Required(ValidationRule::min_length(2, "Name too short")),
                    ),
                    FieldSpec::text(
                        "email",
                        "Email",
                        FieldRule::Required(ValidationRule::email("Invalid email address")),
                    ),
                ],
            ),
            StepSpec::new(
                "challenge",
                "Challenge",
                vec![FieldSpec::multiline(
                    "challenge",
                    "Challenge",
                    FieldRule::Required(ValidationRule::min_length(10, "Describe it")),
                )],
            ),
        ])
        .unwrap()
        .with_success_message("All done!")
    }

    fn controller() -> (StepFormController, Captured) {
        let captured: Captured = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&captured);
        let controller = StepFormController::new(
            scenario_schema(),
            Box::new(move |values: FieldValues| sink.lock().unwrap().push(values)),
        );
        (controller, captured)
    }

    fn values(pairs: &[(&str, &str)]) -> FieldValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn fill_basics(c: &mut StepFormController) {
        c.update_field("name", "Jon Smith");
        c.update_field("email", "a@b.com");
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_initial_state() {
            let (c, _) = controller();
            assert_eq!(c.phase(), FormPhase::Editing(0));
            assert!(c.state().values.is_empty());
            assert!(c.state().errors.is_empty());
            assert!(!c.is_submitting());
        }

        #[test]
        fn test_update_field_does_not_validate() {
            let (mut c, _) = controller();
            c.update_field("name", "J");
            assert_eq!(c.value("name"), "J");
            assert!(c.state().errors.is_empty());
        }

        #[test]
        fn test_advance_blocked_sets_errors_for_every_failing_field() {
            let (mut c, _) = controller();
            c.update_field("name", "Jo");
            c.update_field("email", "nope");
            assert_eq!(c.advance(), Advance::Blocked);
            assert_eq!(c.current_step(), 0);
            assert!(c.error("name").is_none());
            assert_eq!(c.error("email"), Some("Invalid email address"));
        }

        #[test]
        fn test_errors_cleared_after_successful_validation() {
            let (mut c, _) = controller();
            c.update_field("name", "J");
            assert_eq!(c.advance(), Advance::Blocked);
            assert_eq!(c.error("name"), Some("Name too short"));
            assert_eq!(c.error("email"), Some("Invalid email address"));

            fill_basics(&mut c);
            assert_eq!(c.advance(), Advance::Moved(1));
            assert!(c.state().errors.is_empty());
        }

        #[test]
        fn test_unvisited_steps_never_validated() {
            let (mut c, _) = controller();
            fill_basics(&mut c);
            assert_eq!(c.advance(), Advance::Moved(1));
            assert!(c.error("challenge").is_none());
        }

        #[test]
        fn test_retreat_never_validates_and_keeps_errors() {
            let (mut c, _) = controller();
            fill_basics(&mut c);
            c.advance();
            c.update_field("challenge", "short");
            assert_eq!(c.advance(), Advance::Blocked);

            assert!(c.retreat());
            assert_eq!(c.current_step(), 0);
            assert_eq!(c.error("challenge"), Some("Describe it"));
        }

        #[test]
        fn test_retreat_at_first_step_is_noop() {
            let (mut c, _) = controller();
            assert!(!c.retreat());
            assert_eq!(c.current_step(), 0);
        }

        #[test]
        fn test_index_stays_in_range() {
            let (mut c, _) = controller();
            fill_basics(&mut c);
            for _ in 0..5 {
                c.retreat();
                assert!(c.current_step() < c.schema().step_count());
                c.advance();
                assert!(c.current_step() < c.schema().step_count());
            }
        }

        #[test]
        fn test_values_survive_navigation() {
            let (mut c, _) = controller();
            fill_basics(&mut c);
            c.advance();
            c.update_field("challenge", "half typed");
            c.retreat();
            c.advance();
            assert_eq!(c.value("name"), "Jon Smith");
            assert_eq!(c.value("email"), "a@b.com");
            assert_eq!(c.value("challenge"), "half typed");
        }

        #[test]
        fn test_validate_unknown_step_fails() {
            let (mut c, _) = controller();
            assert!(!c.validate_step(7));
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        fn at_last_step() -> (StepFormController, Captured) {
            let (mut c, captured) = controller();
            fill_basics(&mut c);
            c.advance();
            c.update_field("challenge", "I don't know how to start");
            (c, captured)
        }

        #[test]
        fn test_advance_on_last_step_starts_submission() {
            let (mut c, _) = at_last_step();
            let Advance::Submit(snapshot) = c.advance() else {
                panic!("expected submission");
            };
            assert_eq!(snapshot.len(), 3);
            assert_eq!(c.phase(), FormPhase::Submitting);
        }

        #[test]
        fn test_double_submit_is_guarded() {
            let (mut c, _) = at_last_step();
            assert!(c.submit().is_some());
            assert!(c.submit().is_none());
            assert_eq!(c.advance(), Advance::Ignored);
        }

        #[test]
        fn test_retreat_blocked_while_submitting() {
            let (mut c, _) = at_last_step();
            c.submit();
            assert!(!c.retreat());
            assert_eq!(c.current_step(), 1);
        }

        #[test]
        fn test_success_invokes_callback_once_and_completes() {
            let (mut c, captured) = at_last_step();
            let mut sink = Vec::new();
            c.submit();
            assert!(c.finish_submission(Ok(()), &mut sink));

            assert_eq!(c.phase(), FormPhase::Completed);
            assert_eq!(captured.lock().unwrap().len(), 1);
            assert_eq!(sink, vec![Notification::success("All done!")]);
            // Values are handed over, not retained
            assert!(c.state().values.is_empty());
        }

        #[test]
        fn test_failure_keeps_state_and_allows_retry() {
            let (mut c, captured) = at_last_step();
            let mut sink = Vec::new();
            c.submit();
            assert!(!c.finish_submission(Err(SubmissionError::Unavailable), &mut sink));

            assert_eq!(c.phase(), FormPhase::Editing(1));
            assert_eq!(c.value("challenge"), "I don't know how to start");
            assert!(captured.lock().unwrap().is_empty());
            assert_eq!(sink[0].level, NotificationLevel::Error);
            assert_eq!(sink[0].message, "Something went wrong. Please try again.");

            // Retry without limit
            assert!(matches!(c.advance(), Advance::Submit(_)));
            assert!(c.finish_submission(Ok(()), &mut sink));
            assert_eq!(captured.lock().unwrap().len(), 1);
        }

        #[test]
        fn test_stale_outcome_is_ignored() {
            let (mut c, captured) = at_last_step();
            let mut sink = Vec::new();
            assert!(!c.finish_submission(Ok(()), &mut sink));
            assert!(sink.is_empty());
            assert!(captured.lock().unwrap().is_empty());
        }

        #[test]
        fn test_completed_is_terminal() {
            let (mut c, _) = at_last_step();
            let mut sink = Vec::new();
            c.submit();
            c.finish_submission(Ok(()), &mut sink);

            assert_eq!(c.advance(), Advance::Ignored);
            assert!(!c.retreat());
            assert!(c.submit().is_none());
            c.update_field("name", "late");
            assert_eq!(c.value("name"), "");
        }

        #[tokio::test]
        async fn test_submit_with_calls_effect_once_for_repeated_submits() {
            let (mut c, captured) = at_last_step();
            let mut sink = Vec::new();

            let mut effect = MockSubmissionEffect::new();
            effect.expect_submit().times(1).returning(|_| Ok(()));

            // Second submit arrives before the first resolves
            let snapshot = c.submit().unwrap();
            assert!(c.submit().is_none());
            let outcome = effect.submit(&snapshot).await;
            assert!(c.finish_submission(outcome, &mut sink));

            // And once completed, a further attempt never reaches the effect
            assert!(!c.submit_with(&effect, &mut sink).await);
            assert_eq!(captured.lock().unwrap().len(), 1);
        }

        #[tokio::test]
        async fn test_submit_with_failure_from_effect() {
            let (mut c, captured) = at_last_step();
            let mut sink = Vec::new();

            let mut effect = MockSubmissionEffect::new();
            effect
                .expect_submit()
                .times(1)
                .returning(|_| Err(SubmissionError::Rejected("busy".into())));

            assert!(!c.submit_with(&effect, &mut sink).await);
            assert!(!c.is_submitting());
            assert!(captured.lock().unwrap().is_empty());
            assert_eq!(sink.len(), 1);
        }
    }

    mod scenario {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_two_step_walkthrough() {
            let (mut c, captured) = controller();
            let mut sink = Vec::new();

            c.update_field("name", "Jo");
            // "Jo" passes the name rule; the empty email blocks the step
            assert_eq!(c.advance(), Advance::Blocked);
            assert!(c.error("name").is_none());
            assert!(c.error("email").is_some());
            assert_eq!(c.current_step(), 0);

            c.update_field("name", "J");
            assert_eq!(c.advance(), Advance::Blocked);
            assert!(c.error("name").is_some());
            assert_eq!(c.current_step(), 0);

            c.update_field("name", "Jon Smith");
            c.update_field("email", "a@b.com");
            assert_eq!(c.advance(), Advance::Moved(1));

            c.update_field("challenge", "short");
            assert_eq!(c.advance(), Advance::Blocked);
            assert_eq!(c.current_step(), 1);

            c.update_field("challenge", "I don't know how to start");
            let Advance::Submit(snapshot) = c.advance() else {
                panic!("expected submission");
            };

            let mut effect = MockSubmissionEffect::new();
            effect
                .expect_submit()
                .withf(|v| v.get("challenge").map(String::as_str) == Some("I don't know how to start"))
                .times(1)
                .returning(|_| Ok(()));
            let outcome = effect.submit(&snapshot).await;
            assert!(c.finish_submission(outcome, &mut sink));

            let captured = captured.lock().unwrap();
            assert_eq!(
                captured.as_slice(),
                &[values(&[
                    ("name", "Jon Smith"),
                    ("email", "a@b.com"),
                    ("challenge", "I don't know how to start"),
                ])]
            );
        }
    }
}
