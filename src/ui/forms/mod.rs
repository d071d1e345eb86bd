//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `renewal_form`: The sectioned renewal application form

mod field_renderer;
mod renewal_form;

pub use renewal_form::draw_renewal_form;
