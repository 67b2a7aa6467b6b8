//! Per-language input controllers.
//!
//! A controller owns the rolling typed-text buffer and the case state
//! for one language, and turns raw key events into visualizer updates.
//! Both controllers are pre-created at startup; a language switch only
//! changes which one the listener feeds.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::layouts::{transliterate, SPECIAL_KEY_ALIASES};
use crate::models::{Language, RawKey};
use crate::processor::{apply_case, resolve};
use crate::services::SystemProbe;
use crate::visualizer::Visualizer;

/// Input tunables shared by both controllers.
#[derive(Debug, Clone, Copy)]
pub struct ControllerTuning {
    /// Maximum typed-text length before FIFO truncation.
    pub max_text_length: usize,
    /// Duplicate-press suppression window (Russian controller only).
    pub key_debounce: Duration,
    /// Backspace bounce suppression window.
    pub backspace_debounce: Duration,
}

impl Default for ControllerTuning {
    fn default() -> Self {
        Self {
            max_text_length: crate::constants::MAX_TYPED_TEXT,
            key_debounce: Duration::from_millis(crate::constants::KEY_DEBOUNCE_MS),
            backspace_debounce: Duration::from_millis(crate::constants::BACKSPACE_DEBOUNCE_MS),
        }
    }
}

/// Controller for one language's input handling.
pub struct Controller {
    language: Language,
    typed_text: String,
    caps_lock_on: bool,
    shift_pressed: bool,
    tuning: ControllerTuning,
    last_backspace: Option<Instant>,
    /// Last-seen press time per raw key. Only consulted under Russian,
    /// where bounced duplicate hardware events were observed; the
    /// English path intentionally has no such guard.
    last_key_seen: HashMap<char, Instant>,
}

impl Controller {
    /// Creates a controller, seeding Caps Lock state from the OS.
    pub fn new(language: Language, tuning: ControllerTuning, probe: &dyn SystemProbe) -> Self {
        Self {
            language,
            typed_text: String::new(),
            caps_lock_on: probe.caps_lock_on(),
            shift_pressed: false,
            tuning,
            last_backspace: None,
            last_key_seen: HashMap::new(),
        }
    }

    /// The language this controller resolves characters for.
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Current (caps_lock_on, shift_pressed) flags, for the status bar.
    pub const fn case_state(&self) -> (bool, bool) {
        (self.caps_lock_on, self.shift_pressed)
    }

    /// The rolling typed-text buffer.
    pub fn typed_text(&self) -> &str {
        &self.typed_text
    }

    /// Replaces the buffer verbatim. Used once per language switch to
    /// transplant the outgoing controller's text; the value is pushed
    /// to the visualizer, which tolerates a torn-down tree.
    pub fn set_typed_text(&mut self, text: &str, visualizer: &mut Visualizer) {
        self.typed_text = text.to_string();
        visualizer.update_text_display(&self.typed_text);
    }

    /// Re-reads the OS Caps Lock state. Called right after a language
    /// switch so a freshly activated controller is not stale.
    pub fn sync_caps_lock_state(&mut self, probe: &dyn SystemProbe) {
        self.caps_lock_on = probe.caps_lock_on();
    }

    /// Dispatches a key-down event from the listener.
    pub fn on_key_down(
        &mut self,
        key: &RawKey,
        visualizer: &mut Visualizer,
        probe: &dyn SystemProbe,
        now: Instant,
    ) {
        match key {
            RawKey::Char(c) => self.handle_character_key(*c, visualizer, now),
            RawKey::Special(name) => {
                if key.is_shift() {
                    self.shift_pressed = true;
                }
                visualizer.highlight_key(name, SPECIAL_KEY_ALIASES, now);
                self.handle_special_key(name, visualizer, probe, now);
            }
        }
    }

    /// Dispatches a key-up event. Only a shift release changes state;
    /// all other releases are ignored.
    pub fn on_key_up(&mut self, key: &RawKey) {
        if key.is_shift() {
            self.shift_pressed = false;
        }
    }

    /// Resolves and appends a character, truncating the buffer to the
    /// most recent `max_text_length` characters.
    pub fn add_character(&mut self, raw: char, visualizer: &mut Visualizer) {
        let processed = resolve(raw, self.caps_lock_on, self.shift_pressed, self.language);
        self.typed_text.push(processed);

        let excess = self
            .typed_text
            .chars()
            .count()
            .saturating_sub(self.tuning.max_text_length);
        if excess > 0 {
            let cut = self
                .typed_text
                .char_indices()
                .nth(excess)
                .map_or(0, |(idx, _)| idx);
            self.typed_text.drain(..cut);
        }

        visualizer.update_text_display(&self.typed_text);
    }

    /// Handles a named special key.
    pub fn handle_special_key(
        &mut self,
        name: &str,
        visualizer: &mut Visualizer,
        probe: &dyn SystemProbe,
        now: Instant,
    ) {
        match name {
            "backspace" => {
                // Bounce guard observed on some hardware.
                if let Some(last) = self.last_backspace {
                    if now.duration_since(last) < self.tuning.backspace_debounce {
                        return;
                    }
                }
                self.last_backspace = Some(now);
                if self.typed_text.pop().is_some() {
                    visualizer.update_text_display(&self.typed_text);
                }
            }
            "space" => self.add_character(' ', visualizer),
            "enter" | "esc" => {
                self.typed_text.clear();
                visualizer.update_text_display(&self.typed_text);
            }
            "caps_lock" => {
                // The lock may have been toggled while another window
                // had focus, so re-read the OS state instead of
                // flipping a local flag.
                self.caps_lock_on = probe.caps_lock_on();
                debug!(caps_lock_on = self.caps_lock_on, "caps lock resynced");
            }
            _ => {}
        }
    }

    fn handle_character_key(&mut self, raw: char, visualizer: &mut Visualizer, now: Instant) {
        if self.language == Language::Russian {
            if let Some(last) = self.last_key_seen.get(&raw) {
                if now.duration_since(*last) < self.tuning.key_debounce {
                    debug!(%raw, "duplicate press dropped");
                    return;
                }
            }
            self.last_key_seen.insert(raw, now);
        }

        // The highlight target is the glyph shown on the grid: cased
        // and, under Russian, transliterated.
        let highlight = self.highlight_char(raw);
        visualizer.highlight_key(&highlight.to_string(), SPECIAL_KEY_ALIASES, now);
        self.add_character(raw, visualizer);
    }

    fn highlight_char(&self, raw: char) -> char {
        let cased = if raw.is_alphabetic() {
            apply_case(raw, self.caps_lock_on, self.shift_pressed)
        } else {
            raw
        };
        match self.language {
            Language::English => cased,
            Language::Russian => transliterate(cased).unwrap_or(cased),
        }
    }
}
