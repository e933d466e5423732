//! Application state module

mod app_state;
mod dismiss_animation;
mod forms;

pub use app_state::*;
pub use dismiss_animation::*;
pub use forms::*;
