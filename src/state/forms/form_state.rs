//! Form state management for the renewal form

use super::draft::ApplicationDraft;
use super::field::DraftField;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Buttons on the form's action row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Back,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [Self::Submit, Self::Back];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Submit => "Submit Renewal Application",
            Self::Back => "← Back",
        }
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Self::Submit => Self::Back,
            Self::Back => Self::Submit,
        };
    }
}

/// Renewal form: the draft plus cursor state
#[derive(Debug, Clone, Default)]
pub struct RenewalForm {
    pub draft: ApplicationDraft,
    /// Index into `DraftField::ALL`; one past the last field is the action row
    pub active_field_index: usize,
    pub selected_button: FormButton,
    /// Set after a rejected submission so missing fields get highlighted
    pub show_invalid: bool,
}

impl RenewalForm {
    /// Index of the action row
    pub const ACTION_ROW: usize = DraftField::ALL.len();

    /// A form over an empty draft, focused on the first field
    pub fn new() -> Self {
        Self {
            draft: ApplicationDraft::new(),
            ..Self::default()
        }
    }

    /// Returns true if the action row is currently active
    pub fn is_action_row_active(&self) -> bool {
        self.active_field_index == Self::ACTION_ROW
    }

    /// The focused draft field, `None` on the action row
    pub fn active_draft_field(&self) -> Option<DraftField> {
        DraftField::ALL.get(self.active_field_index).copied()
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        match self.active_draft_field() {
            Some(DraftField::AcceptTerms) if c == ' ' => self.draft.toggle_terms(),
            Some(field) => self.draft.push_char(field, c),
            None => {}
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.active_draft_field() {
            self.draft.pop_char(field);
        }
    }

    /// Whether a field should be flagged as invalid
    pub fn is_flagged(&self, field: DraftField) -> bool {
        self.show_invalid && self.draft.invalid_fields().contains(&field)
    }

    /// Move focus to a specific field
    pub fn focus(&mut self, field: DraftField) {
        self.active_field_index = field.index();
    }
}

impl Form for RenewalForm {
    fn field_count(&self) -> usize {
        Self::ACTION_ROW + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::ACTION_ROW);
    }
}
