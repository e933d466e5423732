//! Reusable UI components

mod button;
mod dialog;
mod yes_no;

pub use button::{render_action_button, BUTTON_HEIGHT};
pub use dialog::render_summary_dialog;
pub use yes_no::{YesNoSelector, YES_NO_HEIGHT};
