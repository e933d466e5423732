//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `application_form`: The scrollable job application form

mod application_form;
mod field_renderer;

pub use application_form::{content_height, draw_application_form, focus_row_span};
