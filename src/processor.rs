//! Character resolution.
//!
//! Maps a raw physical character to the glyph that should appear on
//! screen under the current language and case state. Total over
//! anything the listener can produce: unmapped input passes through
//! unchanged by policy, never as an error.

use crate::layouts::transliterate;
use crate::models::Language;

/// Resolves the display character for a raw US-coded character.
///
/// Letters are cased by the XOR rule first: uppercase iff exactly one
/// of Caps Lock and Shift is active. Under Russian the cased character
/// then goes through the transliteration table; non-letters are looked
/// up raw so remapped punctuation (`[` -> `х`) still resolves.
pub fn resolve(raw: char, caps_lock_on: bool, shift_pressed: bool, language: Language) -> char {
    if raw.is_alphabetic() {
        let cased = apply_case(raw, caps_lock_on, shift_pressed);
        match language {
            Language::English => cased,
            Language::Russian => transliterate(cased).unwrap_or(cased),
        }
    } else {
        match language {
            Language::English => raw,
            Language::Russian => transliterate(raw).unwrap_or(raw),
        }
    }
}

/// Uppercase iff `caps_lock_on != shift_pressed`.
pub fn apply_case(c: char, caps_lock_on: bool, shift_pressed: bool) -> char {
    if caps_lock_on != shift_pressed {
        c.to_ascii_uppercase()
    } else {
        c.to_ascii_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_xor_case_rule() {
        for c in 'a'..='z' {
            for caps in [false, true] {
                for shift in [false, true] {
                    let resolved = resolve(c, caps, shift, Language::English);
                    if caps != shift {
                        assert!(resolved.is_ascii_uppercase(), "{c} caps={caps} shift={shift}");
                    } else {
                        assert!(resolved.is_ascii_lowercase(), "{c} caps={caps} shift={shift}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_english_non_alpha_passthrough() {
        assert_eq!(resolve('1', true, false, Language::English), '1');
        assert_eq!(resolve('!', false, true, Language::English), '!');
        assert_eq!(resolve(' ', false, false, Language::English), ' ');
    }

    #[test]
    fn test_russian_cases_then_transliterates() {
        assert_eq!(resolve('f', false, false, Language::Russian), 'а');
        assert_eq!(resolve('f', false, true, Language::Russian), 'А');
        assert_eq!(resolve('f', true, false, Language::Russian), 'А');
        assert_eq!(resolve('f', true, true, Language::Russian), 'а');
    }

    #[test]
    fn test_russian_punctuation_remaps_raw() {
        assert_eq!(resolve('[', false, false, Language::Russian), 'х');
        assert_eq!(resolve(';', false, false, Language::Russian), 'ж');
        // Digits have no table entry and pass through.
        assert_eq!(resolve('7', false, false, Language::Russian), '7');
    }

    #[test]
    fn test_unmapped_input_passes_through() {
        assert_eq!(resolve('€', false, false, Language::Russian), '€');
        // Cyrillic input is alphabetic but has no ASCII case or table
        // entry, so it survives both paths unchanged.
        assert_eq!(resolve('ф', false, false, Language::Russian), 'ф');
    }
}
