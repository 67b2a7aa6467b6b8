//! Event types flowing from background threads to the main loop.
//!
//! Background threads (the global key listener and the language poller)
//! never touch UI state directly. They send these messages over an mpsc
//! channel, which the main loop drains before each frame, so every true
//! mutation happens on a single thread in FIFO order.

use super::Language;

/// A raw physical key as delivered by the global listener.
///
/// Character keys always carry US-coded characters regardless of the
/// active system layout; the character processor maps them to the
/// visible glyph. Non-printable keys carry a canonical lowercase name
/// ("shift", "shift_r", "backspace", "caps_lock", "f1", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawKey {
    /// Printable character key (US-coded).
    Char(char),
    /// Named non-printable key.
    Special(&'static str),
}

impl RawKey {
    /// Whether this key is either shift variant.
    pub fn is_shift(&self) -> bool {
        matches!(self, Self::Special("shift" | "shift_r"))
    }
}

/// A press or release notification from the global listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// Key went down.
    Press(RawKey),
    /// Key came up. Only forwarded for the shift variants; everything
    /// else is dropped at the listener.
    Release(RawKey),
}

/// Messages the main loop dispatches to the layout manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A global key event from the listener thread.
    Key(KeyEvent),
    /// The language poller observed a different OS input language.
    LanguageChanged(Language),
}
