//! English QWERTY layout grid.

use super::{key, pair, KeyDef};

/// Home-row marker keys (the keys with tactile bumps).
pub const HOME_ROW_KEYS: [&str; 2] = ["F", "J"];

/// The QWERTY grid, function row through modifier row.
pub const LAYOUT: &[&[KeyDef]] = &[
    &[
        key("Esc"),
        key("F1"),
        key("F2"),
        key("F3"),
        key("F4"),
        key("F5"),
        key("F6"),
        key("F7"),
        key("F8"),
        key("F9"),
        key("F10"),
        key("F11"),
        key("F12"),
    ],
    &[
        pair("`", "~"),
        pair("1", "!"),
        pair("2", "@"),
        pair("3", "#"),
        pair("4", "$"),
        pair("5", "%"),
        pair("6", "^"),
        pair("7", "&"),
        pair("8", "*"),
        pair("9", "("),
        pair("0", ")"),
        pair("-", "_"),
        pair("=", "+"),
        key("Backspace"),
    ],
    &[
        key("Tab"),
        key("Q"),
        key("W"),
        key("E"),
        key("R"),
        key("T"),
        key("Y"),
        key("U"),
        key("I"),
        key("O"),
        key("P"),
        pair("[", "{"),
        pair("]", "}"),
        pair("\\", "|"),
    ],
    &[
        key("Caps"),
        key("A"),
        key("S"),
        key("D"),
        key("F"),
        key("G"),
        key("H"),
        key("J"),
        key("K"),
        key("L"),
        pair(";", ":"),
        pair("'", "\""),
        key("Enter"),
    ],
    &[
        key("Shift"),
        key("Z"),
        key("X"),
        key("C"),
        key("V"),
        key("B"),
        key("N"),
        key("M"),
        pair(",", "<"),
        pair(".", ">"),
        pair("/", "?"),
        key("Shift"),
    ],
    &[
        key("Ctrl"),
        key("Win"),
        key("Alt"),
        key("Space"),
        key("Alt"),
        key("Win"),
        key("Menu"),
        key("Ctrl"),
    ],
];
