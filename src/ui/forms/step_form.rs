//! Multi-step form view: progress header, current step's fields, key help

use super::field_renderer::{draw_field, field_height};
use crate::platform::{BACK_SHORTCUT, NEWLINE_SHORTCUT};
use crate::state::{FormPhase, FormSession};
use crate::ui::components::render_processing_dialog;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

pub fn draw_step_form(frame: &mut Frame, area: Rect, session: &FormSession) {
    let controller = &session.controller;
    let schema = controller.schema();
    let step_index = controller.current_step();
    let Some(step) = schema.step(step_index) else {
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", session.kind.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![
        Constraint::Length(1), // Step counter
        Constraint::Length(1), // Progress bar
        Constraint::Length(1), // Spacer
        Constraint::Length(1), // Step title
    ];
    constraints.extend(step.fields.iter().map(|f| Constraint::Length(field_height(f))));
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1)); // Help

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    let counter = format!("Step {} of {}", step_index + 1, schema.step_count());
    let percent = session.progress_percent();
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(counter, Style::default().fg(Color::Gray)),
            Span::styled(
                format!("  {percent}% complete"),
                Style::default().fg(Color::DarkGray),
            ),
        ])),
        chunks[0],
    );
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
            .percent(percent)
            .label(""),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            step.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        chunks[3],
    );

    for (idx, spec) in step.fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[4 + idx],
            spec,
            controller.value(spec.name),
            controller.error(spec.name),
            idx == session.focused_field,
        );
    }

    let help_area = chunks[chunks.len() - 1];
    frame.render_widget(
        Paragraph::new(help_line(session)).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if controller.phase() == FormPhase::Submitting {
        render_processing_dialog(frame, area, session.kind.pending_message());
    }
}

fn help_line(session: &FormSession) -> String {
    let advance = if session.controller.is_last_step() {
        "Enter:submit"
    } else {
        "Enter:next"
    };
    let mut parts = vec!["Tab:field".to_string(), advance.to_string()];
    if session.controller.current_step() > 0 {
        parts.push(format!("{BACK_SHORTCUT}:back"));
    }
    if session.focused_spec().is_some_and(|f| f.is_multiline()) {
        parts.push(format!("{NEWLINE_SHORTCUT}:newline"));
    }
    if session.focused_spec().is_some_and(|f| !f.options().is_empty()) {
        parts.push("←/→:choose".to_string());
    }
    parts.push("Esc:leave".to_string());
    parts.join("  ")
}
