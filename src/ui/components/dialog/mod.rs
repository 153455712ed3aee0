//! Dialog components for TUI

mod base;
mod processing_dialog;

pub use processing_dialog::render_processing_dialog;
