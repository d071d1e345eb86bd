//! Application state definitions

use super::catalog::{list_categories, LicenseCategory};
use super::workflow::{Stage, Workflow};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Lines scrolled by page up/down in the document view
const PAGE_SCROLL: usize = 10;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Selector,
    Form,
    Document,
    /// Static recovery screen shown after a contained failure
    Recovery,
}

impl View {
    pub fn is_form_view(&self) -> bool {
        matches!(self, View::Form)
    }
}

/// Display theme, purely cosmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub workflow: Workflow,
    pub theme: Theme,

    // Selector cursor
    pub selected_index: usize,

    // Document view
    pub scroll_offset: usize,

    // Error dialogs, oldest first
    pub error_queue: VecDeque<String>,

    /// Set by the catch scope; replaces every view until restart
    pub failure: Option<String>,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn current_view(&self) -> View {
        if self.failure.is_some() {
            return View::Recovery;
        }
        match self.workflow.stage() {
            Stage::Selecting => View::Selector,
            Stage::Filling => View::Form,
            Stage::Reviewing => View::Document,
        }
    }

    /// Category under the selector cursor
    pub fn highlighted_category(&self) -> Option<&'static LicenseCategory> {
        list_categories().get(self.selected_index)
    }

    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Scroll one line, never past `max`
    pub fn scroll_down(&mut self, max: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down_page(&mut self, max: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(PAGE_SCROLL).min(max);
    }

    pub fn scroll_up_page(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(PAGE_SCROLL);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The error dialog currently shown
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn push_error(&mut self, message: String) {
        tracing::debug!("queued error dialog: {message}");
        self.error_queue.push_back(message);
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Drop all session state and start over at the selector
    pub fn reset_session(&mut self) {
        self.workflow.restart();
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.error_queue.clear();
        self.failure = None;
    }
}
