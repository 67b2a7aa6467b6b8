//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the default input tunables.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "KeyMirror";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "keymirror";

/// Maximum number of characters kept in the typed-text line.
pub const MAX_TYPED_TEXT: usize = 50;

/// Window in which a repeated press of the same physical key is treated
/// as a hardware bounce and dropped (Russian controller only).
pub const KEY_DEBOUNCE_MS: u64 = 50;

/// Window in which a repeated Backspace is treated as a bounce.
pub const BACKSPACE_DEBOUNCE_MS: u64 = 50;

/// Delay before a pressed key cell fades from bright to dimmed.
pub const HIGHLIGHT_DIM_MS: u64 = 200;

/// Interval at which the OS input language is polled.
pub const LANGUAGE_POLL_MS: u64 = 100;

/// Grace period before the global listener attaches at startup.
pub const LISTENER_STARTUP_DELAY_MS: u64 = 500;
