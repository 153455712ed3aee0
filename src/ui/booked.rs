//! Booking confirmation

use super::widgets::{bullet, heading, render_scrollable_text};
use crate::app::App;
use crate::state::BOOKING_BENEFITS;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(booking) = app.state.view_params.booking.as_ref() else {
        frame.render_widget(
            Paragraph::new("No call booked. Press Esc to go home.")
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    };

    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::Gray));
    let mut lines = vec![
        heading("✓ Your call is booked!", Color::Green),
        Line::from(""),
        Line::from(vec![label("Reference: "), Span::raw(booking.short_reference())]),
        Line::from(vec![
            label("Booked at: "),
            Span::raw(booking.booked_at.format("%b %-d, %Y %H:%M").to_string()),
        ]),
        Line::from(vec![label("Name:      "), Span::raw(booking.name.as_str())]),
        Line::from(vec![label("Email:     "), Span::raw(booking.email.as_str())]),
        Line::from(vec![label("Phone:     "), Span::raw(booking.phone.as_str())]),
        Line::from(vec![label("When:      "), Span::raw(booking.time_slot)]),
        Line::from(vec![label("How:       "), Span::raw(booking.call_type)]),
    ];
    if let Some(info) = booking.additional_info.as_deref() {
        lines.push(Line::from(vec![label("Notes:     "), Span::raw(info)]));
    }
    if let Some(record) = app.state.view_params.assessment.as_ref() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("We'll walk through your roadmap for: {}", record.goal.label()),
            Style::default().fg(Color::Cyan),
        )));
    }
    lines.push(Line::from(""));
    lines.push(heading("What to expect on the call", Color::White));
    lines.extend(
        BOOKING_BENEFITS
            .iter()
            .map(|benefit| bullet("✓", *benefit, Color::Green)),
    );

    render_scrollable_text(frame, area, "Booked", lines, app.state.scroll_offset);
}
