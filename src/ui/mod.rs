//! UI module for rendering the TUI

mod components;
mod confirmation;
mod form;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::{widgets::BorderType, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let content_area = layout::create_layout(frame.area());

    match app.screen.view {
        View::Form => form::draw(frame, content_area, app),
        View::Confirmation => confirmation::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, app);
}

/// Border type from config, defaulting to plain
pub(crate) fn border_type(app: &App) -> BorderType {
    match app.config.border_style.as_deref() {
        Some("rounded") => BorderType::Rounded,
        Some("double") => BorderType::Double,
        _ => BorderType::Plain,
    }
}
