//! License renewal workflow state machine
//!
//! ```text
//! SELECTING --select(category)--> FILLING --submit(valid draft)--> REVIEWING
//! FILLING --back--> SELECTING
//! REVIEWING --back--> FILLING (draft retained)
//! ```

use super::catalog::CategoryId;
use super::document::GeneratedDocument;
use super::forms::{ApplicationDraft, RenewalForm, ValidationError};

/// Stage of the workflow, without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Selecting,
    Filling,
    Reviewing,
}

/// Validate a draft and generate its document
pub fn submit_draft(
    draft: &ApplicationDraft,
    category: CategoryId,
) -> Result<GeneratedDocument, ValidationError> {
    draft.validate()?;
    Ok(GeneratedDocument::generate(draft, category))
}

/// The workflow and the data owned by its current stage
#[derive(Debug, Clone, Default)]
pub enum Workflow {
    #[default]
    Selecting,
    Filling {
        category: CategoryId,
        form: RenewalForm,
    },
    Reviewing {
        category: CategoryId,
        /// Form as it was at submission, restored on back
        form: RenewalForm,
        document: GeneratedDocument,
    },
}

impl Workflow {
    pub fn stage(&self) -> Stage {
        match self {
            Self::Selecting => Stage::Selecting,
            Self::Filling { .. } => Stage::Filling,
            Self::Reviewing { .. } => Stage::Reviewing,
        }
    }

    /// Active category, if any
    pub fn category(&self) -> Option<CategoryId> {
        match self {
            Self::Selecting => None,
            Self::Filling { category, .. } | Self::Reviewing { category, .. } => Some(*category),
        }
    }

    /// The current draft, if a category is active
    pub fn draft(&self) -> Option<&ApplicationDraft> {
        match self {
            Self::Selecting => None,
            Self::Filling { form, .. } | Self::Reviewing { form, .. } => Some(&form.draft),
        }
    }

    /// The editable form (FILLING only)
    pub fn form(&self) -> Option<&RenewalForm> {
        match self {
            Self::Filling { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut RenewalForm> {
        match self {
            Self::Filling { form, .. } => Some(form),
            _ => None,
        }
    }

    /// The generated document (REVIEWING only)
    pub fn document(&self) -> Option<&GeneratedDocument> {
        match self {
            Self::Reviewing { document, .. } => Some(document),
            _ => None,
        }
    }

    /// Make `id` the active category with an empty draft.
    ///
    /// Any prior draft or document is discarded.
    pub fn select_category(&mut self, id: CategoryId) {
        tracing::info!(category = %id, "license category selected");
        *self = Self::Filling {
            category: id,
            form: RenewalForm::new(),
        };
    }

    /// Submit the draft (FILLING only).
    ///
    /// On success the workflow moves to REVIEWING and the new document is
    /// returned. On failure it stays in FILLING with the offending field
    /// focused. Outside FILLING nothing happens and `Ok(None)` is returned.
    pub fn submit(&mut self) -> Result<Option<&GeneratedDocument>, ValidationError> {
        let Self::Filling { category, form } = self else {
            tracing::debug!(stage = ?self.stage(), "submit ignored outside form");
            return Ok(None);
        };

        let category = *category;

        match submit_draft(&form.draft, category) {
            Ok(document) => {
                tracing::info!(application_id = %document.application_id, "application submitted");
                let mut form = std::mem::take(form);
                form.show_invalid = false;
                *self = Self::Reviewing {
                    category,
                    form,
                    document,
                };
                Ok(self.document())
            }
            Err(err) => {
                tracing::debug!(field = %err.field(), "submission blocked: {err}");
                form.show_invalid = true;
                form.focus(err.field());
                Err(err)
            }
        }
    }

    /// Single backward transition from the current stage
    pub fn go_back(&mut self) {
        *self = match std::mem::take(self) {
            Self::Selecting => Self::Selecting,
            Self::Filling { category, .. } => {
                tracing::debug!(%category, "abandoning renewal form");
                Self::Selecting
            }
            Self::Reviewing { category, form, .. } => Self::Filling { category, form },
        };
    }

    /// Discard everything and return to SELECTING
    pub fn restart(&mut self) {
        *self = Self::Selecting;
    }
}
