//! Static keyboard layout configuration.
//!
//! Process-wide immutable tables: the per-language key grids, the
//! position-weight table that keeps screen columns aligned between the
//! two grids, the special-key display aliases, and the English-physical
//! to Russian-glyph transliteration table.

pub mod english;
pub mod russian;

use crate::models::Language;

/// One key of a layout grid: a base label plus an optional shifted
/// symbol sharing the same physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDef {
    /// Unshifted label.
    pub base: &'static str,
    /// Shifted symbol, for keys whose two glyphs differ beyond case.
    pub shifted: Option<&'static str>,
}

impl KeyDef {
    /// Label drawn on the key cell.
    pub fn display(&self) -> String {
        match self.shifted {
            Some(shifted) => format!("{} {}", self.base, shifted),
            None => self.base.to_string(),
        }
    }

    /// All symbols this key should be findable by in the button registry.
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.base).chain(self.shifted)
    }
}

/// Shorthand for a single-label key.
pub const fn key(base: &'static str) -> KeyDef {
    KeyDef {
        base,
        shifted: None,
    }
}

/// Shorthand for an `unshifted | shifted` pair key.
pub const fn pair(base: &'static str, shifted: &'static str) -> KeyDef {
    KeyDef {
        base,
        shifted: Some(shifted),
    }
}

/// A fixed 2-D grid of key definitions.
pub type Grid = &'static [&'static [KeyDef]];

/// The key grid for a language.
pub fn grid(language: Language) -> Grid {
    match language {
        Language::English => english::LAYOUT,
        Language::Russian => russian::LAYOUT,
    }
}

/// The two home-row marker keys for a language (F/J for English, the
/// corresponding pair for Russian), as uppercase labels.
pub const fn home_row_keys(language: Language) -> [&'static str; 2] {
    match language {
        Language::English => english::HOME_ROW_KEYS,
        Language::Russian => russian::HOME_ROW_KEYS,
    }
}

/// Canonical listener key name -> label shown on the grid.
///
/// Used as the final fallback when highlight resolution finds no direct
/// symbol match ("caps_lock" -> "Caps", "shift_r" -> "Shift", ...).
pub const SPECIAL_KEY_ALIASES: &[(&str, &str)] = &[
    ("esc", "Esc"),
    ("f1", "F1"),
    ("f2", "F2"),
    ("f3", "F3"),
    ("f4", "F4"),
    ("f5", "F5"),
    ("f6", "F6"),
    ("f7", "F7"),
    ("f8", "F8"),
    ("f9", "F9"),
    ("f10", "F10"),
    ("f11", "F11"),
    ("f12", "F12"),
    ("backspace", "Backspace"),
    ("tab", "Tab"),
    ("caps_lock", "Caps"),
    ("enter", "Enter"),
    ("shift", "Shift"),
    ("shift_r", "Shift"),
    ("ctrl", "Ctrl"),
    ("ctrl_r", "Ctrl"),
    ("alt", "Alt"),
    ("alt_r", "Alt"),
    ("cmd", "Win"),
    ("cmd_r", "Win"),
    ("space", "Space"),
    ("menu", "Menu"),
];

/// Width weight for a grid position.
///
/// Keyed by position rather than by label so the same screen column has
/// a consistent width across both language grids.
pub fn position_weight(row: usize, col: usize) -> u32 {
    match (row, col) {
        // Esc
        (0, 0) => 5,
        // Backspace
        (1, 13) => 10,
        // Tab
        (2, 0) => 6,
        // Caps / Enter
        (3, 0) => 7,
        (3, 12) => 9,
        // Shift pair
        (4, 0 | 11) => 8,
        // Bottom modifier row, Space in the middle
        (5, 3) => 25,
        (5, _) => 5,
        _ => 4,
    }
}

/// English physical character -> Russian visible glyph.
///
/// Applied after case resolution for letters; punctuation entries are
/// looked up on the raw character. Unlisted characters pass through.
pub const EN_TO_RU: &[(char, char)] = &[
    ('q', 'й'),
    ('w', 'ц'),
    ('e', 'у'),
    ('r', 'к'),
    ('t', 'е'),
    ('y', 'н'),
    ('u', 'г'),
    ('i', 'ш'),
    ('o', 'щ'),
    ('p', 'з'),
    ('a', 'ф'),
    ('s', 'ы'),
    ('d', 'в'),
    ('f', 'а'),
    ('g', 'п'),
    ('h', 'р'),
    ('j', 'о'),
    ('k', 'л'),
    ('l', 'д'),
    ('z', 'я'),
    ('x', 'ч'),
    ('c', 'с'),
    ('v', 'м'),
    ('b', 'и'),
    ('n', 'т'),
    ('m', 'ь'),
    ('Q', 'Й'),
    ('W', 'Ц'),
    ('E', 'У'),
    ('R', 'К'),
    ('T', 'Е'),
    ('Y', 'Н'),
    ('U', 'Г'),
    ('I', 'Ш'),
    ('O', 'Щ'),
    ('P', 'З'),
    ('A', 'Ф'),
    ('S', 'Ы'),
    ('D', 'В'),
    ('F', 'А'),
    ('G', 'П'),
    ('H', 'Р'),
    ('J', 'О'),
    ('K', 'Л'),
    ('L', 'Д'),
    ('Z', 'Я'),
    ('X', 'Ч'),
    ('C', 'С'),
    ('V', 'М'),
    ('B', 'И'),
    ('N', 'Т'),
    ('M', 'Ь'),
    ('`', 'ё'),
    ('~', 'Ё'),
    ('[', 'х'),
    (']', 'ъ'),
    ('{', 'Х'),
    ('}', 'Ъ'),
    (';', 'ж'),
    ('\'', 'э'),
    (':', 'Ж'),
    ('"', 'Э'),
    (',', 'б'),
    ('.', 'ю'),
    ('<', 'Б'),
    ('>', 'Ю'),
    ('/', '.'),
    ('?', ','),
];

/// Looks up the Russian glyph for an English physical character.
pub fn transliterate(c: char) -> Option<char> {
    EN_TO_RU.iter().find(|(en, _)| *en == c).map(|(_, ru)| *ru)
}
