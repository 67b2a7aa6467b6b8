//! The closed set of supported keyboard languages.

use std::fmt;

/// Keyboard language, selecting which layout grid, controller, and
/// transliteration rules are active.
///
/// The enum is closed: OS layout probes always default into it, so an
/// unsupported language is unrepresentable rather than a runtime error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// English QWERTY layout.
    English,
    /// Russian ЙЦУКЕН layout.
    Russian,
}

impl Language {
    /// All supported languages, in startup order (English first).
    pub const ALL: [Self; 2] = [Self::English, Self::Russian];

    /// Short uppercase tag shown in the title bar.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::English => "EN",
            Self::Russian => "RU",
        }
    }

    /// Title-bar text for this language.
    pub const fn title(self) -> &'static str {
        match self {
            Self::English => "Virtual keyboard - press keys on the physical keyboard | Language: EN",
            Self::Russian => "Virtual keyboard - press keys on the physical keyboard | Language: RU",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
