//! Form rendering module
//!
//! - `field_renderer`: one field with its value and inline error
//! - `step_form`: progress header, the current step's fields and key help

mod field_renderer;
mod step_form;

pub use step_form::draw_step_form;
