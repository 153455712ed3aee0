//! Application state definitions

use super::assessment::AssessmentRecord;
use super::booking::BookingConfirmation;
use super::forms::FormSession;
use super::toast::{Notification, NotificationSink, ToastQueue};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Opening banner
    Splash,
    /// Promotional sections
    #[default]
    Landing,
    Assessment,
    /// Personalized roadmap for a completed assessment
    Results,
    Booking,
    /// Confirmation of a booked call
    Booked,
}

impl View {
    /// Views that hold a form in progress
    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::Assessment | Self::Booking)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Splash => "",
            Self::Landing => "Home",
            Self::Assessment => "Assessment",
            Self::Results => "Your Roadmap",
            Self::Booking => "Book a Call",
            Self::Booked => "Booked",
        }
    }
}

/// Records carried from one view to the next
#[derive(Debug, Clone, Default)]
pub struct ViewParams {
    pub assessment: Option<AssessmentRecord>,
    pub booking: Option<BookingConfirmation>,
}

impl ViewParams {
    pub fn with_assessment(record: AssessmentRecord) -> Self {
        Self {
            assessment: Some(record),
            booking: None,
        }
    }

    pub fn with_booking(self, confirmation: BookingConfirmation) -> Self {
        Self {
            booking: Some(confirmation),
            ..self
        }
    }
}

/// Section of the landing page shown in the main panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LandingSection {
    #[default]
    Problem,
    Solution,
    Testimonials,
}

impl LandingSection {
    pub const ALL: [Self; 3] = [Self::Problem, Self::Solution, Self::Testimonials];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Problem => "The Problem",
            Self::Solution => "Our Approach",
            Self::Testimonials => "Success Stories",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_params: ViewParams,
    pub view_history: Vec<(View, ViewParams)>,

    // Forms in progress
    pub assessment: Option<FormSession>,
    pub booking: Option<FormSession>,

    // Landing
    pub sidebar_index: usize,
    pub scroll_offset: usize,

    pub toasts: ToastQueue,
}

impl AppState {
    pub fn landing_section(&self) -> LandingSection {
        LandingSection::ALL
            .get(self.sidebar_index)
            .copied()
            .unwrap_or_default()
    }

    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.sidebar_index < max - 1 {
            self.sidebar_index += 1;
            self.scroll_offset = 0;
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.sidebar_index > 0 {
            self.sidebar_index -= 1;
            self.scroll_offset = 0;
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Form session for the current view, if it shows one
    pub fn active_form(&self) -> Option<&FormSession> {
        match self.current_view {
            View::Assessment => self.assessment.as_ref(),
            View::Booking => self.booking.as_ref(),
            _ => None,
        }
    }

    pub fn active_form_mut(&mut self) -> Option<&mut FormSession> {
        match self.current_view {
            View::Assessment => self.assessment.as_mut(),
            View::Booking => self.booking.as_mut(),
            _ => None,
        }
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.toasts.notify(Notification::error(message));
    }

    pub fn push_success(&mut self, message: impl Into<String>) {
        self.toasts.notify(Notification::success(message));
    }
}
