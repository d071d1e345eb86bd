//! Dialog components for TUI

mod base;
mod error_dialog;

pub use base::{centered_rect, wrap_text};
pub use error_dialog::render_error_dialog;
