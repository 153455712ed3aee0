//! Overlay shown while a form submission is in flight

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    Frame,
};
use std::time::{SystemTime, UNIX_EPOCH};

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

fn spinner_frame() -> &'static str {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis());
    SPINNER[(millis / 100) as usize % SPINNER.len()]
}

/// Render the "Processing..." overlay over `area`
pub fn render_processing_dialog(frame: &mut Frame, area: Rect, message: &str) {
    let footer = Line::from(vec![
        Span::styled(spinner_frame(), Style::default().fg(Color::Cyan)),
        Span::styled(" Processing...", Style::default().fg(Color::Gray)),
    ]);

    render_dialog(
        frame,
        area,
        DialogConfig {
            title: "Submitting",
            accent: Color::Cyan,
            message,
            footer: Some(footer),
            max_width: 50,
        },
    );
}
