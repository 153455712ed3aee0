//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::content::BRAND;
use crate::platform::COPY_SHORTCUT;
use crate::state::{LandingSection, NotificationLevel, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SIDEBAR_WIDTH: u16 = 26;

/// Split the screen into sidebar, main content and the status bar row
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(rows[0]);

    (columns[0], columns[1], rows[1])
}

/// One sidebar row: marker, label, selected, enabled
type SidebarEntry = (String, &'static str, bool, bool);

fn sidebar_entries(app: &App) -> Vec<SidebarEntry> {
    let view = app.state.current_view;
    if let Some(session) = app.state.active_form() {
        let current = session.controller.current_step();
        return session
            .controller
            .schema()
            .steps()
            .iter()
            .enumerate()
            .map(|(idx, step)| {
                let marker = if idx < current {
                    "✓".to_string()
                } else {
                    (idx + 1).to_string()
                };
                (marker, step.title, idx == current, idx <= current)
            })
            .collect();
    }

    if view == View::Landing {
        let selected = app.state.landing_section();
        return LandingSection::ALL
            .iter()
            .map(|section| {
                ("›".to_string(), section.label(), *section == selected, true)
            })
            .collect();
    }

    [View::Landing, View::Results, View::Booked]
        .iter()
        .map(|v| {
            let reachable = match v {
                View::Results => app.state.view_params.assessment.is_some(),
                View::Booked => app.state.view_params.booking.is_some(),
                _ => true,
            };
            ("›".to_string(), v.title(), *v == view, reachable)
        })
        .collect()
}

/// Draw the brand header and the sidebar buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let entries = sidebar_entries(app);

    let mut constraints = vec![Constraint::Length(2)]; // Brand
    constraints.extend(entries.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {BRAND}"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))),
        chunks[0],
    );

    for (idx, (marker, label, is_selected, is_enabled)) in entries.iter().enumerate() {
        render_sidebar_button(
            frame,
            chunks[idx + 1],
            marker,
            label,
            *is_selected,
            *is_enabled,
        );
    }
}

/// Draw the status bar: key hints on the left, latest toast on the right
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hints = get_view_hints(app.state.current_view);
    let status = Paragraph::new(Line::from(Span::styled(
        format!(" {hints}"),
        Style::default().fg(Color::Gray),
    )))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    if let Some(toast) = app.state.toasts.latest() {
        let (icon, bg) = match toast.level {
            NotificationLevel::Success => ("✓", Color::Green),
            NotificationLevel::Error => ("✗", Color::Red),
        };
        let text = format!(" {icon} {} ", toast.message);
        let width = (text.chars().count() as u16).min(area.width);
        let toast_area = Rect {
            x: area.x + area.width.saturating_sub(width),
            y: area.y,
            width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(text).style(
                Style::default()
                    .bg(bg)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            toast_area,
        );
    }
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::Splash => "Press any key to skip".to_string(),
        View::Landing => "j/k:section  d/u:scroll  a:assessment  b:book call  x:dismiss  q:quit".to_string(),
        View::Assessment | View::Booking => "Fill in each field  ^C:quit".to_string(),
        View::Results => format!("j/k:scroll  b:book call  y/{COPY_SHORTCUT}:copy  x:dismiss  Esc:home"),
        View::Booked => "Enter/Esc:home  x:dismiss  q:quit".to_string(),
    }
}
