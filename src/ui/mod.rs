//! UI module for rendering the TUI

mod components;
mod document;
mod forms;
mod layout;
mod recovery;
mod selector;
pub mod theme;

pub use document::line_count as document_line_count;

use crate::app::App;
use crate::state::View;
use anyhow::anyhow;
use ratatui::{widgets::Block, Frame};
use std::any::Any;
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

thread_local! {
    static CONTAINING_RENDER: Cell<bool> = const { Cell::new(false) };
}

/// Whether a panic on this thread would be caught by `draw_contained`
pub fn render_is_contained() -> bool {
    CONTAINING_RENDER.with(Cell::get)
}

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = app.palette();
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let (header_area, main_area, status_area) = layout::create_layout(area);
    layout::draw_header(frame, header_area, app, &palette);

    match app.state.current_view() {
        View::Selector => selector::draw(frame, main_area, app, &palette),
        View::Form => {
            if let (Some(category), Some(form)) =
                (app.state.workflow.category(), app.state.workflow.form())
            {
                let title = category.category().title;
                forms::draw_renewal_form(frame, main_area, title, form, &palette);
            }
        }
        View::Document => document::draw(frame, main_area, app, &palette),
        View::Recovery => {
            let reason = app.state.failure.as_deref().unwrap_or_default();
            recovery::draw(frame, main_area, reason, &palette);
        }
    }

    layout::draw_status_bar(frame, status_area, app, &palette);

    // Error dialog overlay (modal)
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error, &palette);
    }
}

/// Draw inside the catch scope.
///
/// A panic while rendering a view is contained: the failure is recorded on
/// the app and the recovery screen is drawn in the same frame.
pub fn draw_contained(frame: &mut Frame, app: &mut App) {
    CONTAINING_RENDER.with(|flag| flag.set(true));
    let rendered = panic::catch_unwind(AssertUnwindSafe(|| draw(frame, app)));
    CONTAINING_RENDER.with(|flag| flag.set(false));
    if let Err(payload) = rendered {
        app.contain_failure(anyhow!(panic_message(payload.as_ref())));
        draw(frame, app);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "rendering failed".to_string()
    }
}
