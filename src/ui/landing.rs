//! Landing page sections

use super::components::{render_action_button, BUTTON_HEIGHT};
use super::widgets::{bullet, heading, render_scrollable_text};
use crate::app::App;
use crate::content::{
    PROBLEMS, PROBLEM_HEADLINE, PROBLEM_INTRO, SOLUTION_BENEFITS, SOLUTION_FEATURES,
    SOLUTION_HEADLINE, STATS, TESTIMONIALS,
};
use crate::state::LandingSection;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(BUTTON_HEIGHT)])
        .split(area);

    let section = app.state.landing_section();
    let lines = match section {
        LandingSection::Problem => problem_lines(),
        LandingSection::Solution => solution_lines(),
        LandingSection::Testimonials => testimonial_lines(),
    };
    render_scrollable_text(frame, chunks[0], section.label(), lines, app.state.scroll_offset);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_action_button(frame, buttons[0], "a", "Take the Free Assessment", true);
    render_action_button(frame, buttons[1], "b", "Book a Strategy Call", false);
}

fn problem_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        heading(PROBLEM_HEADLINE, Color::Red),
        Line::from(PROBLEM_INTRO),
        Line::from(""),
    ];
    for problem in &PROBLEMS {
        lines.push(bullet("✗", problem.title, Color::Red));
        lines.push(Line::from(Span::styled(
            format!("   {}", problem.description),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }
    lines
}

fn solution_lines() -> Vec<Line<'static>> {
    let mut lines = vec![heading(SOLUTION_HEADLINE, Color::Green), Line::from("")];
    for feature in &SOLUTION_FEATURES {
        lines.push(bullet("●", feature.title, Color::Cyan));
        lines.push(Line::from(Span::styled(
            format!("   {}", feature.description),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(heading("What you get", Color::White));
    lines.extend(
        SOLUTION_BENEFITS
            .iter()
            .map(|benefit| bullet("✓", *benefit, Color::Green)),
    );
    lines
}

fn testimonial_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for t in &TESTIMONIALS {
        lines.push(Line::from(vec![
            Span::styled(t.name, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", t.role), Style::default().fg(Color::Cyan)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("Previously: {}", t.previous_role),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            format!("\"{}\"", t.content),
            Style::default().add_modifier(Modifier::ITALIC),
        )));
        lines.push(bullet("★", t.outcome, Color::Yellow));
        lines.push(Line::from(""));
    }
    let stats: Vec<Span> = STATS
        .iter()
        .flat_map(|(value, label)| {
            [
                Span::styled(
                    *value,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {label}   "), Style::default().fg(Color::Gray)),
            ]
        })
        .collect();
    lines.push(Line::from(stats));
    lines
}
