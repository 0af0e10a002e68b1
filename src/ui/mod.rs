//! UI module for rendering the TUI

mod components;
mod confirmation;
mod field_renderer;
mod form;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = layout::content_area(frame.area());

    match app.state.current_view {
        View::Register => form::draw(frame, area, app),
        View::Confirmation => confirmation::draw(frame, area, app),
    }

    layout::draw_status_bar(frame, app);
}
