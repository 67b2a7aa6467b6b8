//! Global key listener.
//!
//! Wraps `rdev`'s OS-level hook behind an explicit start/stop
//! lifecycle. The hook thread itself can never be unwound once
//! `rdev::listen` is running, so stop/start is an atomic gate the
//! callback consults: while the gate is closed (during a layout
//! switch) events are dropped at the source, which is what guarantees
//! no event reaches a controller whose visualizer has no widget tree.
//!
//! Keys are translated from physical `rdev` codes into the canonical
//! vocabulary the controllers speak: US-coded characters (lowercase
//! letters, shift-pair symbols for non-letters) and lowercase special
//! names ("shift", "backspace", "caps_lock", "f1", ...).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rdev::Key;
use tracing::{info, warn};

use crate::constants::LISTENER_STARTUP_DELAY_MS;
use crate::models::{AppEvent, KeyEvent, RawKey};

/// Handle to the global key hook.
pub struct GlobalListener {
    gate: Arc<AtomicBool>,
    spawned: bool,
}

impl Default for GlobalListener {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobalListener {
    /// Creates a stopped listener; no thread is spawned yet.
    pub fn new() -> Self {
        Self {
            gate: Arc::new(AtomicBool::new(false)),
            spawned: false,
        }
    }

    /// Opens the gate, spawning the hook thread on first use. The
    /// thread waits a short grace period before attaching so the
    /// first widget tree exists by the time events arrive.
    pub fn start(&mut self, tx: Sender<AppEvent>) {
        self.gate.store(true, Ordering::SeqCst);
        if self.spawned {
            return;
        }
        self.spawned = true;

        let gate = Arc::clone(&self.gate);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(LISTENER_STARTUP_DELAY_MS));
            info!("global key listener attaching");
            let mut shift_held = false;
            let result = rdev::listen(move |event| {
                if let Some(key_event) = translate(&event.event_type, &mut shift_held) {
                    if gate.load(Ordering::SeqCst) {
                        // A send error means the main loop is gone;
                        // there is nothing left to notify.
                        let _ = tx.send(AppEvent::Key(key_event));
                    }
                }
            });
            if let Err(e) = result {
                warn!(?e, "global key listener failed");
            }
        });
    }

    /// Closes the gate; the hook stays installed but drops events.
    pub fn stop(&mut self) {
        self.gate.store(false, Ordering::SeqCst);
    }
}

/// Translates an `rdev` event into the canonical key vocabulary.
///
/// `shift_held` is the listener-side shift tracker used purely to pick
/// the shifted member of US symbol pairs (letters stay lowercase; the
/// case rule belongs to the character processor). Releases are only
/// forwarded for the shift variants, the only releases anyone consumes.
pub fn translate(event: &rdev::EventType, shift_held: &mut bool) -> Option<KeyEvent> {
    match event {
        rdev::EventType::KeyPress(key) => {
            if matches!(key, Key::ShiftLeft | Key::ShiftRight) {
                *shift_held = true;
            }
            raw_key(*key, *shift_held).map(KeyEvent::Press)
        }
        rdev::EventType::KeyRelease(key) => match key {
            Key::ShiftLeft => {
                *shift_held = false;
                Some(KeyEvent::Release(RawKey::Special("shift")))
            }
            Key::ShiftRight => {
                *shift_held = false;
                Some(KeyEvent::Release(RawKey::Special("shift_r")))
            }
            _ => None,
        },
        _ => None,
    }
}

/// Maps a physical key to its US-coded character or canonical name.
#[allow(clippy::too_many_lines)]
fn raw_key(key: Key, shifted: bool) -> Option<RawKey> {
    let symbol = |base: char, shift: char| {
        Some(RawKey::Char(if shifted { shift } else { base }))
    };

    match key {
        // Letter keys always deliver the lowercase US character; the
        // controller's case state decides the visible case.
        Key::KeyA => Some(RawKey::Char('a')),
        Key::KeyB => Some(RawKey::Char('b')),
        Key::KeyC => Some(RawKey::Char('c')),
        Key::KeyD => Some(RawKey::Char('d')),
        Key::KeyE => Some(RawKey::Char('e')),
        Key::KeyF => Some(RawKey::Char('f')),
        Key::KeyG => Some(RawKey::Char('g')),
        Key::KeyH => Some(RawKey::Char('h')),
        Key::KeyI => Some(RawKey::Char('i')),
        Key::KeyJ => Some(RawKey::Char('j')),
        Key::KeyK => Some(RawKey::Char('k')),
        Key::KeyL => Some(RawKey::Char('l')),
        Key::KeyM => Some(RawKey::Char('m')),
        Key::KeyN => Some(RawKey::Char('n')),
        Key::KeyO => Some(RawKey::Char('o')),
        Key::KeyP => Some(RawKey::Char('p')),
        Key::KeyQ => Some(RawKey::Char('q')),
        Key::KeyR => Some(RawKey::Char('r')),
        Key::KeyS => Some(RawKey::Char('s')),
        Key::KeyT => Some(RawKey::Char('t')),
        Key::KeyU => Some(RawKey::Char('u')),
        Key::KeyV => Some(RawKey::Char('v')),
        Key::KeyW => Some(RawKey::Char('w')),
        Key::KeyX => Some(RawKey::Char('x')),
        Key::KeyY => Some(RawKey::Char('y')),
        Key::KeyZ => Some(RawKey::Char('z')),

        Key::Num1 => symbol('1', '!'),
        Key::Num2 => symbol('2', '@'),
        Key::Num3 => symbol('3', '#'),
        Key::Num4 => symbol('4', '$'),
        Key::Num5 => symbol('5', '%'),
        Key::Num6 => symbol('6', '^'),
        Key::Num7 => symbol('7', '&'),
        Key::Num8 => symbol('8', '*'),
        Key::Num9 => symbol('9', '('),
        Key::Num0 => symbol('0', ')'),
        Key::Minus => symbol('-', '_'),
        Key::Equal => symbol('=', '+'),
        Key::LeftBracket => symbol('[', '{'),
        Key::RightBracket => symbol(']', '}'),
        Key::SemiColon => symbol(';', ':'),
        Key::Quote => symbol('\'', '"'),
        Key::BackQuote => symbol('`', '~'),
        Key::Comma => symbol(',', '<'),
        Key::Dot => symbol('.', '>'),
        Key::Slash => symbol('/', '?'),
        Key::BackSlash | Key::IntlBackslash => symbol('\\', '|'),

        Key::Escape => Some(RawKey::Special("esc")),
        Key::Backspace => Some(RawKey::Special("backspace")),
        Key::Tab => Some(RawKey::Special("tab")),
        Key::CapsLock => Some(RawKey::Special("caps_lock")),
        Key::Return => Some(RawKey::Special("enter")),
        Key::Space => Some(RawKey::Special("space")),
        Key::ShiftLeft => Some(RawKey::Special("shift")),
        Key::ShiftRight => Some(RawKey::Special("shift_r")),
        Key::ControlLeft => Some(RawKey::Special("ctrl")),
        Key::ControlRight => Some(RawKey::Special("ctrl_r")),
        Key::Alt => Some(RawKey::Special("alt")),
        Key::AltGr => Some(RawKey::Special("alt_r")),
        Key::MetaLeft => Some(RawKey::Special("cmd")),
        Key::MetaRight => Some(RawKey::Special("cmd_r")),
        Key::F1 => Some(RawKey::Special("f1")),
        Key::F2 => Some(RawKey::Special("f2")),
        Key::F3 => Some(RawKey::Special("f3")),
        Key::F4 => Some(RawKey::Special("f4")),
        Key::F5 => Some(RawKey::Special("f5")),
        Key::F6 => Some(RawKey::Special("f6")),
        Key::F7 => Some(RawKey::Special("f7")),
        Key::F8 => Some(RawKey::Special("f8")),
        Key::F9 => Some(RawKey::Special("f9")),
        Key::F10 => Some(RawKey::Special("f10")),
        Key::F11 => Some(RawKey::Special("f11")),
        Key::F12 => Some(RawKey::Special("f12")),

        // Navigation, numpad, media keys and anything unknown have no
        // cell on the grid and are dropped at the source.
        _ => None,
    }
}
