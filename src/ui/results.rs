//! Personalized roadmap for a completed assessment

use super::components::{render_action_button, BUTTON_HEIGHT};
use super::widgets::{bullet, heading, render_scrollable_text};
use crate::app::App;
use crate::content::CHALLENGE_RESPONSE;
use crate::recommendation::Recommendation;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(record) = app.state.view_params.assessment.as_ref() else {
        frame.render_widget(
            Paragraph::new("No assessment yet. Press Esc to go home.")
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
        return;
    };
    let recommendation = Recommendation::for_record(record);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(BUTTON_HEIGHT)])
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled(
            "🎉 Assessment Complete",
            Style::default().fg(Color::Green),
        )),
        heading("Your Personalized PM Roadmap", Color::White),
        Line::from(""),
        Line::from(Span::styled(
            format!("Hi {}! 👋", record.name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Your Background: ", Style::default().fg(Color::Gray)),
            Span::raw(record.background_summary()),
        ]),
        Line::from(vec![
            Span::styled("Your Goal: ", Style::default().fg(Color::Gray)),
            Span::raw(record.goal_summary()),
        ]),
        Line::from(""),
        heading("Timeline Insight", Color::Cyan),
        Line::from(recommendation.timeline_message),
        Line::from(""),
        heading("Your Custom PM Development Plan", Color::Cyan),
    ];
    lines.extend(
        recommendation
            .plan
            .iter()
            .map(|item| bullet("✓", item, Color::Green)),
    );
    lines.extend([
        Line::from(""),
        heading("Addressing Your Challenge", Color::Cyan),
        Line::from(Span::styled(
            format!("You mentioned: \"{}\"", record.challenge),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(CHALLENGE_RESPONSE),
        Line::from(""),
        Line::from(Span::styled(
            "No obligation • 30-minute call • Completely free",
            Style::default().fg(Color::DarkGray),
        )),
    ]);

    render_scrollable_text(frame, chunks[0], "Your Roadmap", lines, app.state.scroll_offset);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);
    render_action_button(frame, buttons[0], "b", "Book Your Free Strategy Call", true);
    render_action_button(frame, buttons[1], "y", "Copy Roadmap", false);
}
