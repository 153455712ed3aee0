//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Bold section heading
pub fn heading(text: &str, color: Color) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

/// A list line with a colored marker in front
pub fn bullet<'a>(marker: &'a str, text: &'a str, color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!(" {marker} "), Style::default().fg(color)),
        Span::raw(text),
    ])
}

/// Render wrapped lines in a bordered panel, scrolled down by `scroll` rows.
///
/// The scroll is clamped so the last line can still reach the bottom of
/// the panel but never beyond it.
pub fn render_scrollable_text(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line>,
    scroll: usize,
) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner_height = block.inner(area).height as usize;
    let max_scroll = lines.len().saturating_sub(inner_height);
    let scroll = scroll.min(max_scroll) as u16;

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}
