//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the Enter submit shortcut
/// - macOS: SUPER (Cmd+Enter)
/// - Linux/Windows: CONTROL (Ctrl+Enter)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for form help text
/// Ctrl+S works on all platforms (Cmd+Enter/Ctrl+Enter also work where the terminal reports them)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Print shortcut display
/// - macOS: "Cmd+P"
/// - Linux/Windows: "Ctrl+P"
#[cfg(target_os = "macos")]
pub const PRINT_SHORTCUT: &str = "Cmd+P";

#[cfg(not(target_os = "macos"))]
pub const PRINT_SHORTCUT: &str = "Ctrl+P";

/// Theme toggle shortcut display
pub const THEME_SHORTCUT: &str = "Ctrl+T";
