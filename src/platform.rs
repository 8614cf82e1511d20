//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Extra modifier accepted for the save shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SAVE_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SAVE_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Save shortcut display for form help text
/// Ctrl+S works on all platforms
#[cfg(target_os = "macos")]
pub const SAVE_SHORTCUT: &str = "Ctrl+S/Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SAVE_SHORTCUT: &str = "Ctrl+S";
