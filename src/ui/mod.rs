//! UI module for rendering the TUI

mod catalog;
mod components;
mod forms;
mod layout;
mod legal;
mod orders;
mod users;
mod widgets;

use crate::app::App;
use crate::state::View;
use components::{render_confirm_dialog, render_error_dialog, render_toast};
use ratatui::Frame;

pub use widgets::{list_block, render_record_list};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Users => users::draw_list(frame, main_area, app),
        View::Orders => orders::draw_list(frame, main_area, app),
        View::Legal => legal::draw_list(frame, main_area, app),
        View::Catalog => catalog::draw_list(frame, main_area, app),
        View::UserCreate => forms::draw_form(frame, main_area, app, "Create User"),
        View::UserEdit => forms::draw_form(frame, main_area, app, "Edit User"),
        View::LegalEdit => forms::draw_form(frame, main_area, app, "Edit Document"),
        View::Upload => forms::draw_upload(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Overlays, top-most last
    if let Some(flash) = app.notification.current() {
        render_toast(frame, main_area, flash);
    }
    if let Some(action) = &app.state.pending_action {
        render_confirm_dialog(frame, action);
    }
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    }
}
