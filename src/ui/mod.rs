//! UI module for rendering the TUI

mod booked;
mod components;
mod forms;
mod landing;
mod layout;
mod results;
mod splash;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if let (View::Splash, Some(splash_state)) = (app.state.current_view, &app.splash_state) {
        splash::draw(frame, area, splash_state);
        return;
    }

    let (sidebar_area, main_area, status_area) = layout::create_layout(area);
    layout::draw_sidebar(frame, sidebar_area, app);

    match app.state.current_view {
        View::Splash | View::Landing => landing::draw(frame, main_area, app),
        View::Assessment | View::Booking => {
            if let Some(session) = app.state.active_form() {
                forms::draw_step_form(frame, main_area, session);
            }
        }
        View::Results => results::draw(frame, main_area, app),
        View::Booked => booked::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}
