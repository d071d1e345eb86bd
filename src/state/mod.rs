//! Application state module

mod app_state;
mod catalog;
mod document;
mod forms;
mod workflow;

pub use app_state::*;
pub use catalog::*;
pub use document::*;
pub use forms::*;
pub use workflow::*;
