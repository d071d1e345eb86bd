//! Trait abstraction for the print hand-off to enable mocking in tests

use crate::state::GeneratedDocument;
use anyhow::Result;
use async_trait::async_trait;

use super::PrintReceipt;

/// Render-to-printable-surface capability
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PrintSink: Send + Sync {
    /// Hand a document to the platform's print facility
    async fn print(&self, document: &GeneratedDocument) -> Result<PrintReceipt>;

    /// Short description of where documents go, for the status bar
    fn destination(&self) -> String;
}
