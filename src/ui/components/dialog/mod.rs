//! Dialog components for TUI

mod base;
mod summary_dialog;

pub use summary_dialog::render_summary_dialog;
