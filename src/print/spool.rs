//! Print spool
//!
//! Writes the plain-text rendering of a document into a spool directory and,
//! when a print command is configured (for example `lp`), pipes the same text
//! to that command's stdin.

use super::traits::PrintSink;
use crate::config::RenewalConfig;
use crate::state::GeneratedDocument;
use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::time;
use uuid::Uuid;

/// How long a print command may run when the config sets no limit
pub const DEFAULT_PRINT_TIMEOUT: Duration = Duration::from_secs(30);

/// Outcome of a print hand-off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintReceipt {
    pub job_id: Uuid,
    /// Spooled copy of the document
    pub path: PathBuf,
    /// Command the document was piped to, if any
    pub command: Option<String>,
}

/// Spool-directory printer
#[derive(Debug, Clone)]
pub struct SpoolPrinter {
    spool_dir: PathBuf,
    command: Option<String>,
    timeout: Duration,
}

impl SpoolPrinter {
    pub fn new(spool_dir: impl Into<PathBuf>, command: Option<String>) -> Self {
        Self {
            spool_dir: spool_dir.into(),
            command: command.filter(|c| !c.trim().is_empty()),
            timeout: DEFAULT_PRINT_TIMEOUT,
        }
    }

    /// Limit how long the print command may run
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a printer from the user's configuration
    pub fn from_config(config: &RenewalConfig) -> Self {
        let spool_dir = config
            .spool_dir
            .clone()
            .unwrap_or_else(Self::default_spool_dir);
        let timeout = config
            .print_timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_PRINT_TIMEOUT);
        Self::new(spool_dir, config.print_command.clone()).with_timeout(timeout)
    }

    /// Platform data directory, falling back to the temp dir
    pub fn default_spool_dir() -> PathBuf {
        ProjectDirs::from("gov", "civic", "license-renewal")
            .map(|dirs| dirs.data_dir().join("spool"))
            .unwrap_or_else(|| std::env::temp_dir().join("license-renewal-spool"))
    }

    pub fn spool_dir(&self) -> &Path {
        &self.spool_dir
    }

    fn spool_path(&self, document: &GeneratedDocument) -> PathBuf {
        self.spool_dir.join(format!("{}.txt", document.application_id))
    }
}

#[async_trait]
impl PrintSink for SpoolPrinter {
    async fn print(&self, document: &GeneratedDocument) -> Result<PrintReceipt> {
        let job_id = Uuid::new_v4();
        let text = document.to_plain_text();
        let path = self.spool_path(document);

        tokio::fs::create_dir_all(&self.spool_dir)
            .await
            .map_err(|e| {
                anyhow!(
                    "Failed to create spool directory {}: {}",
                    self.spool_dir.display(),
                    e
                )
            })?;
        tokio::fs::write(&path, &text)
            .await
            .map_err(|e| anyhow!("Failed to write {}: {}", path.display(), e))?;

        tracing::info!(%job_id, path = %path.display(), "document spooled");

        if let Some(command) = &self.command {
            pipe_to_command(command, &text, self.timeout).await?;
            tracing::info!(%job_id, command = %command, "document sent to print command");
        }

        Ok(PrintReceipt {
            job_id,
            path,
            command: self.command.clone(),
        })
    }

    fn destination(&self) -> String {
        match &self.command {
            Some(command) => format!("{} ({})", command, self.spool_dir.display()),
            None => self.spool_dir.display().to_string(),
        }
    }
}

/// Run `command` with `text` on its stdin.
///
/// The child is killed if it has not exited within `timeout`.
async fn pipe_to_command(command: &str, text: &str, timeout: Duration) -> Result<()> {
    let mut parts = command.split_whitespace();
    let program = parts.next().ok_or_else(|| anyhow!("Print command is empty"))?;

    let mut child = tokio::process::Command::new(program)
        .args(parts)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| anyhow!("Failed to start print command '{}': {}", command, e))?;

    let exchange = async move {
        if let Some(mut stdin) = child.stdin.take() {
            // A command that exits without reading is reported by its status below
            if let Err(e) = stdin.write_all(text.as_bytes()).await {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(e);
                }
            }
        }
        child.wait_with_output().await
    };

    let output = time::timeout(timeout, exchange)
        .await
        .map_err(|_| anyhow!("Print command '{}' timed out after {:?}", command, timeout))??;
    if !output.status.success() {
        bail!(
            "Print command '{}' failed ({}): {}",
            command,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(())
}
