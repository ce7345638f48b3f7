//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the copy shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Wizard shortcuts; Ctrl works on all platforms
pub const NEXT_SHORTCUT: &str = "Ctrl+N";
pub const PREVIOUS_SHORTCUT: &str = "Ctrl+P";
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
pub const DOCUMENTS_SHORTCUT: &str = "Ctrl+O";

/// Copy tracking id shortcut display
#[cfg(target_os = "macos")]
pub const COPY_SHORTCUT: &str = "Cmd+Y";

#[cfg(not(target_os = "macos"))]
pub const COPY_SHORTCUT: &str = "Ctrl+Y";
