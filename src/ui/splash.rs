//! Opening banner rendering

use crate::content::BRAND;
use crate::state::{SplashPhase, SplashState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const BANNER_WIDTH: u16 = 40;

fn banner_lines(splash: &SplashState) -> Vec<Line<'static>> {
    let frame_style = Style::default().fg(Color::Cyan);
    let inner = BANNER_WIDTH as usize - 2;
    let brand = BRAND.to_uppercase();
    let spaced: String = brand
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let cursor = if splash.phase == SplashPhase::Typing {
        "▌"
    } else {
        ""
    };

    vec![
        Line::from(Span::styled(format!("╔{}╗", "═".repeat(inner)), frame_style)),
        Line::from(vec![
            Span::styled("║", frame_style),
            Span::styled(
                format!("{spaced:^inner$}"),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("║", frame_style),
        ]),
        Line::from(Span::styled(format!("╚{}╝", "═".repeat(inner)), frame_style)),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                splash.visible_tagline(),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
        .centered(),
    ]
}

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let lines = banner_lines(splash_state);
    let banner_height = lines.len() as u16;

    // Banner slides up and may leave the top of the screen
    let base_y = area.y as i32 + (area.height.saturating_sub(banner_height)) as i32 / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;
    let lines_off_top = if y_pos < 0 { (-y_pos) as usize } else { 0 };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let banner_area = Rect {
        x: area.x + (area.width.saturating_sub(BANNER_WIDTH)) / 2,
        y: if y_pos < 0 { area.y } else { y_pos as u16 },
        width: BANNER_WIDTH.min(area.width),
        height: (visible.len() as u16).min(area.height),
    };
    frame.render_widget(Paragraph::new(visible), banner_area);

    if splash_state.scroll_offset < 1.0 && area.height > 2 {
        let hint = "Press any key to skip";
        let hint_area = Rect {
            x: area.x + (area.width.saturating_sub(hint.len() as u16)) / 2,
            y: area.y + area.height - 2,
            width: (hint.len() as u16).min(area.width),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))),
            hint_area,
        );
    }
}
