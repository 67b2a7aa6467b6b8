//! Shared test fixtures.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use keymirror::models::Language;
use keymirror::services::SystemProbe;

/// Scriptable OS probe: tests flip the simulated language and Caps
/// Lock state between events.
pub struct FakeProbe {
    language: Mutex<Language>,
    caps_lock: AtomicBool,
}

impl FakeProbe {
    pub fn new() -> Self {
        Self {
            language: Mutex::new(Language::English),
            caps_lock: AtomicBool::new(false),
        }
    }

    pub fn set_language(&self, language: Language) {
        *self.language.lock().unwrap() = language;
    }

    pub fn set_caps_lock(&self, on: bool) {
        self.caps_lock.store(on, Ordering::SeqCst);
    }
}

impl Default for FakeProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemProbe for FakeProbe {
    fn active_language(&self) -> Language {
        *self.language.lock().unwrap()
    }

    fn caps_lock_on(&self) -> bool {
        self.caps_lock.load(Ordering::SeqCst)
    }
}
