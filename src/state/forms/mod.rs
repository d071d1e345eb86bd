//! Form domain layer
//!
//! Type-safe handling of the renewal form: field descriptors, the
//! application draft with its required-field contract, and cursor state.

mod draft;
mod field;
mod form_state;

pub use draft::{ApplicationDraft, ValidationError};
pub use field::{DraftField, FieldSection, FieldValue};
pub use form_state::{Form, FormButton, RenewalForm};

#[cfg(test)]
pub(crate) use draft::tests::sample_draft;
