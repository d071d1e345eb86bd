//! Application draft and its validation

use super::field::{DraftField, FieldKind, FieldValue};
use chrono::NaiveDate;
use thiserror::Error;

/// Date format produced by the expiration date input
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Why a draft cannot be submitted yet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    MissingField(DraftField),
    #[error("Expiration date must be a valid date (YYYY-MM-DD), got '{0}'")]
    InvalidDate(String),
    #[error("You must accept the terms and conditions")]
    TermsNotAccepted,
}

impl ValidationError {
    /// The field the error refers to
    pub fn field(&self) -> DraftField {
        match self {
            Self::MissingField(field) => *field,
            Self::InvalidDate(_) => DraftField::ExpirationDate,
            Self::TermsNotAccepted => DraftField::AcceptTerms,
        }
    }
}

/// The in-progress, editable application record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub license_number: String,
    pub expiration_date: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub accept_terms: bool,
}

impl ApplicationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a field back as a value
    pub fn get(&self, field: DraftField) -> FieldValue {
        match self.text(field) {
            Some(s) => FieldValue::Text(s.to_string()),
            None => FieldValue::Checked(self.accept_terms),
        }
    }

    /// Text of a text field, `None` for the terms checkbox
    pub fn text(&self, field: DraftField) -> Option<&str> {
        let value = match field {
            DraftField::FullName => &self.full_name,
            DraftField::Email => &self.email,
            DraftField::Phone => &self.phone,
            DraftField::LicenseNumber => &self.license_number,
            DraftField::ExpirationDate => &self.expiration_date,
            DraftField::Address => &self.address,
            DraftField::City => &self.city,
            DraftField::State => &self.state,
            DraftField::ZipCode => &self.zip_code,
            DraftField::AcceptTerms => return None,
        };
        Some(value)
    }

    fn text_mut(&mut self, field: DraftField) -> Option<&mut String> {
        let value = match field {
            DraftField::FullName => &mut self.full_name,
            DraftField::Email => &mut self.email,
            DraftField::Phone => &mut self.phone,
            DraftField::LicenseNumber => &mut self.license_number,
            DraftField::ExpirationDate => &mut self.expiration_date,
            DraftField::Address => &mut self.address,
            DraftField::City => &mut self.city,
            DraftField::State => &mut self.state,
            DraftField::ZipCode => &mut self.zip_code,
            DraftField::AcceptTerms => return None,
        };
        Some(value)
    }

    /// Return a copy of the draft with one field replaced.
    ///
    /// Text fields take [`FieldValue::Text`], the terms checkbox takes
    /// [`FieldValue::Checked`]. Sibling fields are untouched.
    pub fn update_field(&self, field: DraftField, value: impl Into<FieldValue>) -> Self {
        let mut next = self.clone();
        next.set_field(field, value.into());
        next
    }

    /// In-place variant of [`update_field`](Self::update_field)
    pub fn set_field(&mut self, field: DraftField, value: FieldValue) {
        debug_assert_eq!(
            field.is_checkbox(),
            matches!(value, FieldValue::Checked(_)),
            "value kind does not match field {field}"
        );
        match value {
            FieldValue::Checked(checked) if field.is_checkbox() => self.accept_terms = checked,
            FieldValue::Text(text) => {
                if let Some(slot) = self.text_mut(field) {
                    *slot = text;
                }
            }
            FieldValue::Checked(_) => {
                tracing::warn!("ignoring checkbox value for text field {field}");
            }
        }
    }

    /// Append a typed character to a text field
    pub fn push_char(&mut self, field: DraftField, c: char) {
        if !field.accepts_char(c) {
            return;
        }
        if let Some(text) = self.text(field) {
            let mut text = text.to_string();
            text.push(c);
            *self = self.update_field(field, text);
        }
    }

    /// Remove the last character of a text field
    pub fn pop_char(&mut self, field: DraftField) {
        if let Some(text) = self.text(field) {
            let mut text = text.to_string();
            text.pop();
            *self = self.update_field(field, text);
        }
    }

    pub fn toggle_terms(&mut self) {
        let checked = self.get(DraftField::AcceptTerms).as_checked();
        *self = self.update_field(DraftField::AcceptTerms, !checked);
    }

    /// Parsed expiration date, if the field holds a valid calendar date
    pub fn expiration(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.expiration_date.trim(), INPUT_DATE_FORMAT).ok()
    }

    fn check_field(&self, field: DraftField) -> Result<(), ValidationError> {
        let Some(value) = self.text(field) else {
            return if self.accept_terms {
                Ok(())
            } else {
                Err(ValidationError::TermsNotAccepted)
            };
        };

        let value = value.trim();
        if value.is_empty() {
            return Err(ValidationError::MissingField(field));
        }
        if field.kind() == FieldKind::Date && self.expiration().is_none() {
            return Err(ValidationError::InvalidDate(value.to_string()));
        }
        Ok(())
    }

    /// Check the required-field contract; reports the first failing field in form order.
    ///
    /// Email, phone and zip code formats are not checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        DraftField::ALL
            .into_iter()
            .try_for_each(|field| self.check_field(field))
    }

    /// All fields currently failing validation, in form order
    pub fn invalid_fields(&self) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|field| self.check_field(*field).is_err())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A draft that passes validation
    pub(crate) fn sample_draft() -> ApplicationDraft {
        ApplicationDraft {
            full_name: "Jane Q. Public".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0100".to_string(),
            license_number: "D1234567".to_string(),
            expiration_date: "2024-06-05".to_string(),
            address: "742 Evergreen Terrace".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62704".to_string(),
            accept_terms: true,
        }
    }

    mod update_field {
        use super::*;

        #[test]
        fn test_text_round_trip() {
            let draft = ApplicationDraft::new();
            for field in DraftField::TEXT {
                let updated = draft.update_field(field, "value");
                assert_eq!(updated.get(field), FieldValue::from("value"));
            }
        }

        #[test]
        fn test_checkbox_round_trip() {
            let draft = ApplicationDraft::new().update_field(DraftField::AcceptTerms, true);
            assert_eq!(draft.get(DraftField::AcceptTerms), FieldValue::Checked(true));
            let draft = draft.update_field(DraftField::AcceptTerms, false);
            assert!(!draft.accept_terms);
        }

        #[test]
        fn test_is_pure_and_keeps_siblings() {
            let original = sample_draft();
            let updated = original.update_field(DraftField::City, "Shelbyville");

            assert_eq!(original.city, "Springfield");
            assert_eq!(updated.city, "Shelbyville");
            assert_eq!(updated.full_name, original.full_name);
            assert_eq!(updated.zip_code, original.zip_code);
            assert!(updated.accept_terms);
        }

        #[test]
        fn test_value_independent_of_prior_value() {
            let draft = sample_draft().update_field(DraftField::Email, "");
            let draft = draft.update_field(DraftField::Email, "new@example.com");
            assert_eq!(draft.email, "new@example.com");
        }

        #[test]
        fn test_untrimmed_value_is_stored_verbatim() {
            let draft = ApplicationDraft::new().update_field(DraftField::FullName, "  Jane  ");
            assert_eq!(draft.full_name, "  Jane  ");
        }
    }

    mod typing {
        use super::*;

        #[test]
        fn test_push_and_pop_char() {
            let mut draft = ApplicationDraft::new();
            draft.push_char(DraftField::State, 'I');
            draft.push_char(DraftField::State, 'L');
            assert_eq!(draft.state, "IL");
            draft.pop_char(DraftField::State);
            assert_eq!(draft.state, "I");
        }

        #[test]
        fn test_date_field_rejects_letters() {
            let mut draft = ApplicationDraft::new();
            draft.push_char(DraftField::ExpirationDate, 'x');
            draft.push_char(DraftField::ExpirationDate, '2');
            assert_eq!(draft.expiration_date, "2");
        }

        #[test]
        fn test_toggle_terms() {
            let mut draft = ApplicationDraft::new();
            draft.toggle_terms();
            assert!(draft.accept_terms);
            draft.toggle_terms();
            assert!(!draft.accept_terms);
        }

        #[test]
        fn test_pop_on_checkbox_is_noop() {
            let mut draft = sample_draft();
            draft.pop_char(DraftField::AcceptTerms);
            assert_eq!(draft, sample_draft());
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn test_sample_draft_is_valid() {
            assert_eq!(sample_draft().validate(), Ok(()));
            assert!(sample_draft().invalid_fields().is_empty());
        }

        #[test]
        fn test_empty_draft_reports_first_field() {
            let err = ApplicationDraft::new().validate().unwrap_err();
            assert_eq!(err, ValidationError::MissingField(DraftField::FullName));
            assert_eq!(ApplicationDraft::new().invalid_fields().len(), 10);
        }

        #[test]
        fn test_each_required_field_blank_fails() {
            for field in DraftField::TEXT {
                let draft = sample_draft().update_field(field, "");
                let err = draft.validate().unwrap_err();
                assert_eq!(err, ValidationError::MissingField(field), "field {field}");
                assert_eq!(err.field(), field);
            }
        }

        #[test]
        fn test_whitespace_only_counts_as_blank() {
            for field in DraftField::TEXT {
                let draft = sample_draft().update_field(field, "   ");
                assert_eq!(
                    draft.validate(),
                    Err(ValidationError::MissingField(field)),
                    "field {field}"
                );
            }
        }

        #[test]
        fn test_terms_not_accepted_fails() {
            let draft = sample_draft().update_field(DraftField::AcceptTerms, false);
            assert_eq!(draft.validate(), Err(ValidationError::TermsNotAccepted));
            assert_eq!(draft.invalid_fields(), vec![DraftField::AcceptTerms]);
        }

        #[test]
        fn test_invalid_date_fails() {
            let draft = sample_draft().update_field(DraftField::ExpirationDate, "2024-13-40");
            assert_eq!(
                draft.validate(),
                Err(ValidationError::InvalidDate("2024-13-40".to_string()))
            );
        }

        #[test]
        fn test_formats_are_not_checked() {
            let draft = sample_draft()
                .update_field(DraftField::Email, "not-an-email")
                .update_field(DraftField::Phone, "call me")
                .update_field(DraftField::ZipCode, "ABC");
            assert!(draft.is_complete());
        }

        #[test]
        fn test_error_messages() {
            assert_eq!(
                ValidationError::MissingField(DraftField::Email).to_string(),
                "Email Address is required"
            );
            assert_eq!(
                ValidationError::TermsNotAccepted.to_string(),
                "You must accept the terms and conditions"
            );
        }

        #[test]
        fn test_expiration_parses_trimmed_value() {
            let draft = sample_draft().update_field(DraftField::ExpirationDate, " 2025-01-31 ");
            assert_eq!(draft.expiration(), NaiveDate::from_ymd_opt(2025, 1, 31));
        }
    }
}
