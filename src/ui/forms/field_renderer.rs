//! Field rendering utilities for forms

use crate::state::{FieldKind, FieldSpec};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field needs, borders included
pub fn field_height(spec: &FieldSpec) -> u16 {
    match spec.kind {
        FieldKind::Text | FieldKind::Choice(_) => 3,
        FieldKind::Multiline => 6,
    }
}

/// Draw one field with its current value and, below the border, its error
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    spec: &FieldSpec,
    value: &str,
    error: Option<&str>,
    is_active: bool,
) {
    let accent = match (error, is_active) {
        (Some(_), _) => Color::Red,
        (None, true) => Color::Cyan,
        (None, false) => Color::DarkGray,
    };
    let cursor = Span::styled(if is_active { "▌" } else { "" }, Style::default().fg(Color::Cyan));
    let placeholder_style = Style::default().fg(Color::DarkGray);

    let content = match spec.kind {
        FieldKind::Choice(options) => {
            let position = options.iter().position(|o| o.value == value);
            let line = match position {
                Some(idx) => Line::from(vec![
                    Span::styled("◀ ", Style::default().fg(accent)),
                    Span::styled(
                        spec.display_value(value),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" ▶", Style::default().fg(accent)),
                    Span::styled(
                        format!("  ({}/{})", idx + 1, options.len()),
                        placeholder_style,
                    ),
                ]),
                None => Line::from(Span::styled(
                    format!("←/→ or 1-{} to choose", options.len()),
                    placeholder_style,
                )),
            };
            Paragraph::new(line)
        }
        FieldKind::Multiline => {
            let mut lines: Vec<Line> = if value.is_empty() {
                vec![Line::from(Span::styled(spec.placeholder, placeholder_style))]
            } else {
                value.split('\n').map(|l| Line::from(l.to_string())).collect()
            };
            if is_active && !value.is_empty() {
                if let Some(last) = lines.last_mut() {
                    last.spans.push(cursor);
                }
            }
            Paragraph::new(lines)
        }
        FieldKind::Text => {
            let line = if value.is_empty() {
                Line::from(vec![cursor, Span::styled(spec.placeholder, placeholder_style)])
            } else {
                Line::from(vec![Span::raw(value), cursor])
            };
            Paragraph::new(line)
        }
    };

    let mut block = Block::default()
        .title(format!(" {} ", spec.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
