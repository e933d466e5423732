//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

pub use components::YesNoSelector;
pub use forms::{content_height, focus_row_span};
pub use layout::form_viewport_height;

use crate::app::App;
use crate::state::ViewState;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, content_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area);
    forms::draw_application_form(frame, content_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Summary overlay, or what is left of it while closing
    match (app.form.view_state(), app.form.submitted_record()) {
        (ViewState::Submitted, Some(record)) => {
            components::render_summary_dialog(frame, record, app.today(), 1.0);
        }
        _ => {
            if let Some(anim) = &app.dismiss_animation {
                components::render_summary_dialog(frame, &anim.record, app.today(), anim.scale);
            }
        }
    }
}
