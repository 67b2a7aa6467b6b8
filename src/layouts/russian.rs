//! Russian ЙЦУКЕН layout grid.
//!
//! Row shapes match the English grid position for position so the
//! shared weight table keeps columns aligned across a language switch.

use super::{key, pair, KeyDef};

/// Home-row marker keys (the ЙЦУКЕН counterparts of F/J).
pub const HOME_ROW_KEYS: [&str; 2] = ["А", "О"];

/// The ЙЦУКЕН grid, function row through modifier row.
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
        key("Ё"),
        pair("1", "!"),
        pair("2", "\""),
        pair("3", "№"),
        pair("4", ";"),
        pair("5", "%"),
        pair("6", ":"),
        pair("7", "?"),
        pair("8", "*"),
        pair("9", "("),
        pair("0", ")"),
        pair("-", "_"),
        pair("=", "+"),
        key("Backspace"),
    ],
    &[
        key("Tab"),
        key("Й"),
        key("Ц"),
        key("У"),
        key("К"),
        key("Е"),
        key("Н"),
        key("Г"),
        key("Ш"),
        key("Щ"),
        key("З"),
        key("Х"),
        key("Ъ"),
        pair("\\", "/"),
    ],
    &[
        key("Caps"),
        key("Ф"),
        key("Ы"),
        key("В"),
        key("А"),
        key("П"),
        key("Р"),
        key("О"),
        key("Л"),
        key("Д"),
        key("Ж"),
        key("Э"),
        key("Enter"),
    ],
    &[
        key("Shift"),
        key("Я"),
        key("Ч"),
        key("С"),
        key("М"),
        key("И"),
        key("Т"),
        key("Ь"),
        key("Б"),
        key("Ю"),
        pair(".", ","),
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
