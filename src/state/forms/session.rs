//! Keyboard-facing wrapper around a form controller

use super::controller::{Advance, StepFormController};
use super::field::{FieldKind, FieldSpec};

/// Which of the site's forms a session drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Assessment,
    Booking,
}

impl FormKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Assessment => "PM Readiness Assessment",
            Self::Booking => "Book Your Free Strategy Call",
        }
    }

    /// Shown while the form's submission is in flight
    pub fn pending_message(&self) -> &'static str {
        match self {
            Self::Assessment => "Building your personalized roadmap",
            Self::Booking => "Reserving your call",
        }
    }
}

/// A controller plus the focused field of its current step
#[derive(Debug)]
pub struct FormSession {
    pub kind: FormKind,
    pub controller: StepFormController,
    pub focused_field: usize,
}

impl FormSession {
    pub fn new(kind: FormKind, controller: StepFormController) -> Self {
        Self {
            kind,
            controller,
            focused_field: 0,
        }
    }

    /// Fields of the step currently shown
    pub fn current_fields(&self) -> &[FieldSpec] {
        self.controller
            .schema()
            .step(self.controller.current_step())
            .map(|step| step.fields.as_slice())
            .unwrap_or(&[])
    }

    pub fn focused_spec(&self) -> Option<&FieldSpec> {
        self.current_fields().get(self.focused_field)
    }

    pub fn next_field(&mut self) {
        let count = self.current_fields().len();
        if count > 0 {
            self.focused_field = (self.focused_field + 1) % count;
        }
    }

    pub fn prev_field(&mut self) {
        let count = self.current_fields().len();
        if count == 0 {
            return;
        }
        if self.focused_field == 0 {
            self.focused_field = count - 1;
        } else {
            self.focused_field -= 1;
        }
    }

    /// Type a character into the focused field.
    ///
    /// Choice fields take a digit as a 1-based option pick.
    pub fn input_char(&mut self, c: char) {
        let Some(spec) = self.focused_spec().copied() else {
            return;
        };
        match spec.kind {
            FieldKind::Text | FieldKind::Multiline => {
                let mut value = self.controller.value(spec.name).to_string();
                value.push(c);
                self.controller.update_field(spec.name, value);
            }
            FieldKind::Choice(options) => {
                let picked = c
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(|idx| options.get(idx));
                if let Some(option) = picked {
                    self.controller.update_field(spec.name, option.value);
                }
            }
        }
    }

    /// Newline in multi-line fields; ignored elsewhere
    pub fn input_newline(&mut self) {
        if self.focused_spec().is_some_and(FieldSpec::is_multiline) {
            self.input_char('\n');
        }
    }

    pub fn backspace(&mut self) {
        let Some(spec) = self.focused_spec().copied() else {
            return;
        };
        match spec.kind {
            FieldKind::Text | FieldKind::Multiline => {
                let mut value = self.controller.value(spec.name).to_string();
                value.pop();
                self.controller.update_field(spec.name, value);
            }
            FieldKind::Choice(_) => self.controller.update_field(spec.name, ""),
        }
    }

    /// Move the focused choice field to its next or previous option
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(spec) = self.focused_spec().copied() else {
            return;
        };
        if let Some(value) = spec.cycle_option(self.controller.value(spec.name), forward) {
            self.controller.update_field(spec.name, value);
        }
    }

    /// Advance the controller and move focus to where the user needs it
    pub fn advance(&mut self) -> Advance {
        let outcome = self.controller.advance();
        match &outcome {
            Advance::Moved(_) => self.focused_field = 0,
            Advance::Blocked => {
                let first_error = self
                    .current_fields()
                    .iter()
                    .position(|f| self.controller.error(f.name).is_some());
                if let Some(idx) = first_error {
                    self.focused_field = idx;
                }
            }
            Advance::Submit(_) | Advance::Ignored => {}
        }
        outcome
    }

    pub fn retreat(&mut self) -> bool {
        let moved = self.controller.retreat();
        if moved {
            self.focused_field = 0;
        }
        moved
    }

    /// Progress through the form as a 0-100 percentage
    pub fn progress_percent(&self) -> u16 {
        let total = self.controller.schema().step_count().max(1);
        (((self.controller.current_step() + 1) * 100) / total) as u16
    }
}
