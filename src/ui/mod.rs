//! UI module for rendering the TUI

mod about;
mod components;
pub mod forms;
mod header;
mod home;
mod layout;
pub mod services;

pub use layout::content_area;

use crate::app::App;
use crate::state::View;
use components::render_notice_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    header::draw_header(frame, header_area, app);

    match app.state.current_view {
        View::Home => home::draw(frame, main_area),
        View::About => about::draw(frame, main_area, app),
        View::Services(service) => services::draw(frame, main_area, app, service),
        View::Contact => forms::draw_contact(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Overlays, topmost last
    header::draw_dropdown(frame, app);
    if let Some(notice) = app.state.notices.current() {
        render_notice_dialog(frame, notice);
    }
}
