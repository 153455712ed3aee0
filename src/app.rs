//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::COPY_MODIFIER;
use crate::recommendation::Recommendation;
use crate::state::{
    assessment_schema, booking_schema, Advance, AppState, AssessmentRecord, BookingConfirmation,
    FieldValues, FormKind, FormSchema, FormSession, LandingSection, SchemaError, SplashState,
    StepFormController, View, ViewParams,
};
use crate::submission::{SimulatedSubmission, SubmissionEffect, SubmissionError};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Messages delivered to the UI loop from background work
#[derive(Debug)]
pub enum AppEvent {
    /// The submission effect for a form resolved
    SubmissionFinished {
        form: FormKind,
        outcome: Result<(), SubmissionError>,
    },
    /// A form's completion callback fired
    FormCompleted { form: FormKind, values: FieldValues },
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Finalizes completed forms
    effect: Arc<dyn SubmissionEffect>,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    /// Whether the app should quit
    quit: bool,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
    /// Terminal size (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create the app with the simulated submission effect from `config`
    pub fn new(config: &TuiConfig) -> Self {
        let effect = Arc::new(SimulatedSubmission::from_config(config));
        Self::with_effect(effect, !config.skip_splash())
    }

    pub fn with_effect(effect: Arc<dyn SubmissionEffect>, show_splash: bool) -> Self {
        let (events_tx, events_rx) = unbounded_channel();
        let mut state = AppState::default();
        let splash_state = if show_splash {
            state.current_view = View::Splash;
            Some(SplashState::new())
        } else {
            None
        };

        Self {
            state,
            effect,
            events_tx,
            events_rx,
            quit: false,
            splash_state,
            terminal_size: None,
        }
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                self.state.current_view = View::Landing;
                return true;
            }
        }
        false
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a form submission is in flight (drives redraw rate)
    pub fn is_busy(&self) -> bool {
        self.state
            .assessment
            .iter()
            .chain(self.state.booking.iter())
            .any(|session| session.controller.is_submitting())
    }

    /// Periodic housekeeping between frames
    pub fn tick(&mut self) {
        self.state.toasts.prune();
        self.drain_events();
    }

    /// Apply every event queued by background work
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SubmissionFinished { form, outcome } => {
                let AppState {
                    assessment,
                    booking,
                    toasts,
                    ..
                } = &mut self.state;
                let session = match form {
                    FormKind::Assessment => assessment.as_mut(),
                    FormKind::Booking => booking.as_mut(),
                };
                match session {
                    Some(session) => {
                        session.controller.finish_submission(outcome, toasts);
                    }
                    None => tracing::warn!(?form, "Submission finished for a closed form"),
                }
            }
            AppEvent::FormCompleted { form, values } => self.complete_form(form, values),
        }
    }

    fn complete_form(&mut self, form: FormKind, values: FieldValues) {
        match form {
            FormKind::Assessment => {
                self.state.assessment = None;
                match AssessmentRecord::try_from(values) {
                    Ok(record) => {
                        tracing::info!(
                            experience = record.experience.value(),
                            background = record.background.value(),
                            timeline = record.timeline.value(),
                            "Assessment completed"
                        );
                        self.navigate(View::Results, ViewParams::with_assessment(record));
                    }
                    Err(err) => {
                        tracing::error!("Completed assessment is unreadable: {err}");
                        self.state.push_error(format!("Could not read assessment: {err}"));
                    }
                }
            }
            FormKind::Booking => {
                self.state.booking = None;
                match BookingConfirmation::from_values(values) {
                    Ok(confirmation) => {
                        tracing::info!(reference = %confirmation.reference, "Call booked");
                        if let Ok(json) = serde_json::to_string(&confirmation) {
                            tracing::debug!("Booking record: {json}");
                        }
                        let params = self.state.view_params.clone().with_booking(confirmation);
                        self.navigate(View::Booked, params);
                    }
                    Err(err) => {
                        tracing::error!("Completed booking is unreadable: {err}");
                        self.state.push_error(format!("Could not read booking: {err}"));
                    }
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Dismiss the latest toast outside of forms, where 'x' is not text
        if key.code == KeyCode::Char('x')
            && !self.state.current_view.is_form_view()
            && !self.in_splash()
            && !self.state.toasts.is_empty()
        {
            self.state.toasts.dismiss();
            return Ok(());
        }

        match self.state.current_view {
            View::Splash => self.handle_splash_key(key),
            View::Landing => self.handle_landing_key(key),
            View::Assessment | View::Booking => self.handle_form_key(key),
            View::Results => self.handle_results_key(key),
            View::Booked => self.handle_booked_key(key),
        }
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View, params: ViewParams) {
        self.state.view_history.push((
            self.state.current_view,
            std::mem::take(&mut self.state.view_params),
        ));
        self.state.current_view = view;
        self.state.view_params = params;
        self.state.scroll_offset = 0;
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        // Skip form views in history to go back to the last non-form view
        while let Some((view, params)) = self.state.view_history.pop() {
            if view.is_form_view() {
                continue;
            }
            self.state.current_view = view;
            self.state.view_params = params;
            self.state.scroll_offset = 0;
            return;
        }
    }

    /// Drop all history and show the landing page
    fn go_home(&mut self) {
        self.state.view_history.clear();
        self.state.current_view = View::Landing;
        self.state.view_params = ViewParams::default();
        self.state.scroll_offset = 0;
    }

    fn build_session(&self, kind: FormKind) -> Result<FormSession, SchemaError> {
        let schema: FormSchema = match kind {
            FormKind::Assessment => assessment_schema()?,
            FormKind::Booking => booking_schema()?,
        };
        let tx = self.events_tx.clone();
        let controller = StepFormController::new(
            schema,
            Box::new(move |values: FieldValues| {
                if tx.send(AppEvent::FormCompleted { form: kind, values }).is_err() {
                    tracing::warn!(?kind, "Completion dropped, event loop gone");
                }
            }),
        );
        Ok(FormSession::new(kind, controller))
    }

    /// Open a form, resuming an unfinished one of the same kind
    fn open_form(&mut self, kind: FormKind, params: ViewParams) {
        let slot_empty = match kind {
            FormKind::Assessment => self.state.assessment.is_none(),
            FormKind::Booking => self.state.booking.is_none(),
        };
        if slot_empty {
            match self.build_session(kind) {
                Ok(session) => match kind {
                    FormKind::Assessment => self.state.assessment = Some(session),
                    FormKind::Booking => self.state.booking = Some(session),
                },
                Err(err) => {
                    tracing::error!(?kind, "Invalid form schema: {err}");
                    self.state.push_error(format!("Form unavailable: {err}"));
                    return;
                }
            }
        }
        let view = match kind {
            FormKind::Assessment => View::Assessment,
            FormKind::Booking => View::Booking,
        };
        self.navigate(view, params);
    }

    /// Run the submission effect off the UI loop; its outcome comes back as an event
    fn spawn_submission(&self, form: FormKind, values: FieldValues) {
        let effect = Arc::clone(&self.effect);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = effect.submit(&values).await;
            if tx
                .send(AppEvent::SubmissionFinished { form, outcome })
                .is_err()
            {
                tracing::warn!(?form, "Submission outcome dropped, event loop gone");
            }
        });
    }

    /// Handle keys in Splash screen
    fn handle_splash_key(&mut self, _key: KeyEvent) -> Result<()> {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
        Ok(())
    }

    /// Handle keys on the landing page
    fn handle_landing_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.move_selection_down(LandingSection::ALL.len());
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::PageDown | KeyCode::Char('d') => self.state.scroll_down(),
            KeyCode::PageUp | KeyCode::Char('u') => self.state.scroll_up(),
            KeyCode::Enter | KeyCode::Char('a') => {
                self.open_form(FormKind::Assessment, ViewParams::default());
            }
            KeyCode::Char('b') => self.open_form(FormKind::Booking, ViewParams::default()),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in a form view
    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(session) = self.state.active_form_mut() else {
            self.go_back();
            return Ok(());
        };

        // Nothing changes while the effect is in flight
        if session.controller.is_submitting() {
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Enter => {
                let kind = session.kind;
                if let Advance::Submit(values) = session.advance() {
                    self.spawn_submission(kind, values);
                }
            }
            KeyCode::Char('j') if ctrl => session.input_newline(),
            KeyCode::Char('b') if ctrl => {
                session.retreat();
            }
            KeyCode::Tab | KeyCode::Down => session.next_field(),
            KeyCode::BackTab | KeyCode::Up => session.prev_field(),
            KeyCode::Left => session.cycle_choice(false),
            KeyCode::Right => session.cycle_choice(true),
            KeyCode::Backspace => session.backspace(),
            KeyCode::Char(c) if !ctrl => session.input_char(c),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys on the results page
    fn handle_results_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('y')
                if key.modifiers.is_empty() || key.modifiers.contains(COPY_MODIFIER) =>
            {
                self.copy_plan()
            }
            KeyCode::Char('b') | KeyCode::Enter => {
                let params = self.state.view_params.clone();
                self.open_form(FormKind::Booking, params);
            }
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::Esc | KeyCode::Char('h') => self.go_home(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Handle keys on the booking confirmation
    fn handle_booked_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('h') => self.go_home(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    fn copy_plan(&mut self) {
        let Some(record) = self.state.view_params.assessment.as_ref() else {
            return;
        };
        let text = Recommendation::for_record(record).to_plain_text(record);
        match self.copy_to_clipboard(&text) {
            Ok(()) => self.state.push_success("Roadmap copied to clipboard"),
            Err(err) => {
                tracing::warn!("Clipboard copy failed: {err}");
                self.state.push_error("Could not copy to clipboard");
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormPhase, NotificationLevel};
    use crate::submission::MockSubmissionEffect;

    fn app_with(effect: MockSubmissionEffect) -> App {
        App::with_effect(Arc::new(effect), false)
    }

    fn app() -> App {
        app_with(MockSubmissionEffect::new())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Wait for the spawned submission and apply everything it produced
    async fn settle(app: &mut App) {
        let event = app.events_rx.recv().await.unwrap();
        app.handle_event(event);
        app.drain_events();
    }

    fn fill_assessment(app: &mut App) {
        press(app, KeyCode::Char('a'));
        type_text(app, "Jon Smith");
        press(app, KeyCode::Tab);
        type_text(app, "a@b.com");
        press(app, KeyCode::Enter);
        // experience: first option, background: second
        type_text(app, "1");
        press(app, KeyCode::Tab);
        type_text(app, "2");
        press(app, KeyCode::Enter);
        // goal, timeline
        type_text(app, "1");
        press(app, KeyCode::Tab);
        type_text(app, "1");
        press(app, KeyCode::Enter);
        type_text(app, "I don't know how to start");
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_on_landing_without_splash() {
            let app = app();
            assert_eq!(app.state.current_view, View::Landing);
            assert!(!app.in_splash());
            assert!(!app.should_quit());
        }

        #[test]
        fn test_navigate_saves_history() {
            let mut app = app();
            app.navigate(View::Results, ViewParams::default());
            assert_eq!(app.state.view_history.len(), 1);
            assert_eq!(app.state.view_history[0].0, View::Landing);
        }

        #[test]
        fn test_go_back_skips_form_views() {
            let mut app = app();
            app.navigate(View::Assessment, ViewParams::default());
            app.navigate(View::Results, ViewParams::default());
            app.navigate(View::Booking, ViewParams::default());
            app.go_back();
            assert_eq!(app.state.current_view, View::Results);
            app.go_back();
            assert_eq!(app.state.current_view, View::Landing);
        }

        #[test]
        fn test_go_back_empty_history_does_nothing() {
            let mut app = app();
            app.go_back();
            assert_eq!(app.state.current_view, View::Landing);
        }

        #[test]
        fn test_landing_keys() {
            let mut app = app();
            press(&mut app, KeyCode::Char('j'));
            assert_eq!(app.state.landing_section(), LandingSection::Solution);
            press(&mut app, KeyCode::Char('q'));
            assert!(app.should_quit());
        }

        #[test]
        fn test_escape_leaves_form_and_resumes_it() {
            let mut app = app();
            press(&mut app, KeyCode::Char('a'));
            assert_eq!(app.state.current_view, View::Assessment);
            type_text(&mut app, "Jo");
            press(&mut app, KeyCode::Esc);
            assert_eq!(app.state.current_view, View::Landing);

            press(&mut app, KeyCode::Char('a'));
            let session = app.state.active_form().unwrap();
            assert_eq!(session.controller.value("name"), "Jo");
        }

        #[test]
        fn test_x_dismisses_toast_outside_forms() {
            let mut app = app();
            app.state.push_error("Clipboard unavailable");
            press(&mut app, KeyCode::Char('x'));
            assert!(app.state.toasts.is_empty());

            // In a form 'x' is text
            app.state.push_error("Clipboard unavailable");
            press(&mut app, KeyCode::Char('a'));
            press(&mut app, KeyCode::Char('x'));
            assert!(!app.state.toasts.is_empty());
            let session = app.state.active_form().unwrap();
            assert_eq!(session.controller.value("name"), "x");
        }
    }

    mod splash {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_key_skips_splash() {
            let mut app = App::with_effect(Arc::new(MockSubmissionEffect::new()), true);
            assert!(app.in_splash());
            press(&mut app, KeyCode::Char('x'));
            assert!(app.update_splash(24));
            assert_eq!(app.state.current_view, View::Landing);
            assert!(app.splash_state.is_none());
        }

        #[test]
        fn test_update_splash_without_state() {
            let mut app = app();
            assert!(!app.update_splash(24));
        }
    }

    mod forms {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_enter_with_errors_stays_on_step() {
            let mut app = app();
            press(&mut app, KeyCode::Char('a'));
            type_text(&mut app, "J");
            press(&mut app, KeyCode::Enter);

            let session = app.state.active_form().unwrap();
            assert_eq!(session.controller.current_step(), 0);
            assert_eq!(
                session.controller.error("name"),
                Some("Name must be at least 2 characters")
            );
            assert_eq!(
                session.controller.error("email"),
                Some("Invalid email address")
            );
        }

        #[test]
        fn test_ctrl_b_steps_back_and_ctrl_j_adds_newline() {
            let mut app = app();
            fill_assessment(&mut app);
            ctrl(&mut app, 'j');
            type_text(&mut app, "more");
            let session = app.state.active_form().unwrap();
            assert_eq!(
                session.controller.value("challenge"),
                "I don't know how to start\nmore"
            );

            ctrl(&mut app, 'b');
            let session = app.state.active_form().unwrap();
            assert_eq!(session.controller.current_step(), 2);
        }

        #[test]
        fn test_arrows_cycle_choices() {
            let mut app = app();
            press(&mut app, KeyCode::Char('a'));
            type_text(&mut app, "Jon");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "a@b.com");
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Right);
            press(&mut app, KeyCode::Right);
            let session = app.state.active_form().unwrap();
            assert_eq!(session.controller.value("experience"), "some-exposure");
            press(&mut app, KeyCode::Left);
            let session = app.state.active_form().unwrap();
            assert_eq!(session.controller.value("experience"), "complete-beginner");
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_assessment_submission_shows_results() {
            let mut effect = MockSubmissionEffect::new();
            effect
                .expect_submit()
                .withf(|v| v.get("background").map(String::as_str) == Some("design"))
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(effect);

            fill_assessment(&mut app);
            press(&mut app, KeyCode::Enter);
            assert!(app.is_busy());

            // Keys are ignored while submitting, including a second Enter
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Esc);
            assert_eq!(app.state.current_view, View::Assessment);

            settle(&mut app).await;

            assert_eq!(app.state.current_view, View::Results);
            assert!(app.state.assessment.is_none());
            let record = app.state.view_params.assessment.as_ref().unwrap();
            assert_eq!(record.name, "Jon Smith");
            assert_eq!(
                app.state.toasts.latest().map(|n| n.message.as_str()),
                Some("Assessment completed successfully!")
            );
        }

        #[tokio::test]
        async fn test_failed_submission_keeps_form() {
            let mut effect = MockSubmissionEffect::new();
            effect
                .expect_submit()
                .times(1)
                .returning(|_| Err(SubmissionError::Unavailable));
            let mut app = app_with(effect);

            fill_assessment(&mut app);
            press(&mut app, KeyCode::Enter);
            settle(&mut app).await;

            assert_eq!(app.state.current_view, View::Assessment);
            let session = app.state.active_form().unwrap();
            assert_eq!(session.controller.phase(), FormPhase::Editing(3));
            assert_eq!(session.controller.value("name"), "Jon Smith");
            let toast = app.state.toasts.latest().unwrap();
            assert_eq!(toast.level, NotificationLevel::Error);
            assert_eq!(toast.message, "Something went wrong. Please try again.");
        }

        #[tokio::test]
        async fn test_booking_from_results_shows_confirmation() {
            let mut effect = MockSubmissionEffect::new();
            effect.expect_submit().times(2).returning(|_| Ok(()));
            let mut app = app_with(effect);

            fill_assessment(&mut app);
            press(&mut app, KeyCode::Enter);
            settle(&mut app).await;

            press(&mut app, KeyCode::Char('b'));
            assert_eq!(app.state.current_view, View::Booking);
            type_text(&mut app, "Jon Smith");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "a@b.com");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "5551234567");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "3");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "2");
            press(&mut app, KeyCode::Enter);
            settle(&mut app).await;

            assert_eq!(app.state.current_view, View::Booked);
            let confirmation = app.state.view_params.booking.as_ref().unwrap();
            assert_eq!(confirmation.time_slot, "Tomorrow 4:00 PM EST");
            assert_eq!(confirmation.call_type, "Phone Call");
            assert!(app.state.view_params.assessment.is_some());

            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.current_view, View::Landing);
            assert!(app.state.view_history.is_empty());
        }

        #[test]
        fn test_stray_outcome_for_closed_form_is_ignored() {
            let mut app = app();
            app.handle_event(AppEvent::SubmissionFinished {
                form: FormKind::Booking,
                outcome: Ok(()),
            });
            assert!(app.state.toasts.is_empty());
            assert_eq!(app.state.current_view, View::Landing);
        }

        #[test]
        fn test_unreadable_completion_reports_error() {
            let mut app = app();
            app.handle_event(AppEvent::FormCompleted {
                form: FormKind::Assessment,
                values: FieldValues::new(),
            });
            assert_eq!(app.state.current_view, View::Landing);
            let toast = app.state.toasts.latest().unwrap();
            assert_eq!(toast.level, NotificationLevel::Error);
        }
    }
}
