//! Configuration handling for the TUI

use crate::state::Theme;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the configured theme
pub const THEME_ENV: &str = "LICENSE_RENEWAL_THEME";
/// Environment variable overriding the configured print command
pub const PRINT_COMMAND_ENV: &str = "LICENSE_RENEWAL_PRINT_COMMAND";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RenewalConfig {
    /// Initial display theme; detected from the terminal when unset
    pub theme: Option<Theme>,
    /// Directory printed documents are spooled to
    pub spool_dir: Option<PathBuf>,
    /// Command receiving printed documents on stdin (e.g. `lp`)
    pub print_command: Option<String>,
    /// Milliseconds the print command may run before it is killed
    pub print_timeout_ms: Option<u64>,
}

impl RenewalConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("gov", "civic", "license-renewal")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Log file path; the terminal owns stdout and stderr while the UI runs
    pub fn log_path() -> PathBuf {
        ProjectDirs::from("gov", "civic", "license-renewal")
            .map(|dirs| dirs.data_dir().join("license-renewal.log"))
            .unwrap_or_else(|| std::env::temp_dir().join("license-renewal.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: RenewalConfig = serde_json::from_str(&content)?;
                tracing::debug!(path = %path.display(), "loaded configuration");
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Apply the process environment on top of the file configuration
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(THEME_ENV).ok(),
            std::env::var(PRINT_COMMAND_ENV).ok(),
        )
    }

    fn with_overrides(mut self, theme: Option<String>, print_command: Option<String>) -> Self {
        if let Some(raw) = theme {
            match raw.parse::<Theme>() {
                Ok(theme) => self.theme = Some(theme),
                Err(e) => tracing::warn!("ignoring {THEME_ENV}: {e}"),
            }
        }
        if let Some(command) = print_command {
            self.print_command = Some(command);
        }
        self
    }

    /// Initial theme: configured value, else the terminal background, else light.
    ///
    /// Read once at startup; the result is passed down and never re-derived.
    pub fn initial_theme(&self) -> Theme {
        self.theme
            .or_else(|| {
                std::env::var("COLORFGBG")
                    .ok()
                    .and_then(|v| theme_from_colorfgbg(&v))
            })
            .unwrap_or_default()
    }
}

/// Interpret a `COLORFGBG` value (`"fg;bg"` or `"fg;default;bg"`)
pub fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    // 0-6 and 8 are the dark ANSI backgrounds
    Some(if bg <= 6 || bg == 8 {
        Theme::Dark
    } else {
        Theme::Light
    })
}
