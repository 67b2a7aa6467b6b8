//! Integration tests for layout switching and event dispatch.

mod fixtures;

use std::sync::Arc;
use std::time::{Duration, Instant};

use fixtures::FakeProbe;
use keymirror::config::Config;
use keymirror::manager::LayoutManager;
use keymirror::models::{AppEvent, KeyEvent, Language, RawKey};

fn setup() -> (LayoutManager, Arc<FakeProbe>) {
    let probe = Arc::new(FakeProbe::new());
    let manager = LayoutManager::new(probe.clone(), &Config::default());
    (manager, probe)
}

fn press(manager: &mut LayoutManager, key: RawKey, now: Instant) {
    manager.handle_event(AppEvent::Key(KeyEvent::Press(key)), now);
}

fn release(manager: &mut LayoutManager, key: RawKey, now: Instant) {
    manager.handle_event(AppEvent::Key(KeyEvent::Release(key)), now);
}

#[test]
fn test_starts_with_english_grid_built() {
    let (manager, _probe) = setup();

    assert_eq!(manager.active_language(), Language::English);
    assert!(manager.active_visualizer().has_tree());
    assert_eq!(manager.active_controller().typed_text(), "");
}

#[test]
fn test_key_press_reaches_active_controller() {
    let (mut manager, _probe) = setup();
    let t0 = Instant::now();

    press(&mut manager, RawKey::Char('h'), t0);
    press(&mut manager, RawKey::Char('i'), t0);

    assert_eq!(manager.active_controller().typed_text(), "hi");
    assert_eq!(manager.press_count(), 2);
}

#[test]
fn test_language_event_switches_active_pair() {
    let (mut manager, _probe) = setup();
    let t0 = Instant::now();

    manager.handle_event(AppEvent::LanguageChanged(Language::Russian), t0);

    assert_eq!(manager.active_language(), Language::Russian);
    assert!(manager.active_visualizer().has_tree());
}

#[test]
fn test_same_language_event_is_noop() {
    let (mut manager, _probe) = setup();
    let t0 = Instant::now();

    press(&mut manager, RawKey::Char('a'), t0);
    manager.handle_event(AppEvent::LanguageChanged(Language::English), t0);

    assert_eq!(manager.active_language(), Language::English);
    assert_eq!(manager.active_controller().typed_text(), "a");
}

#[test]
fn test_switch_preserves_typed_text_exactly() {
    let (mut manager, _probe) = setup();
    let t0 = Instant::now();

    press(&mut manager, RawKey::Char('a'), t0);
    press(&mut manager, RawKey::Special("shift"), t0);
    press(&mut manager, RawKey::Char('b'), t0);
    release(&mut manager, RawKey::Special("shift"), t0);
    assert_eq!(manager.active_controller().typed_text(), "aB");

    manager.handle_event(AppEvent::LanguageChanged(Language::Russian), t0);

    // The buffer carries over verbatim, Latin letters included.
    assert_eq!(manager.active_controller().typed_text(), "aB");
    assert_eq!(manager.active_visualizer().text_display(), Some("aB"));
}

#[test]
fn test_switch_resyncs_caps_lock() {
    let (mut manager, probe) = setup();
    let t0 = Instant::now();

    // Caps Lock is turned on while another window has focus.
    probe.set_caps_lock(true);
    manager.handle_event(AppEvent::LanguageChanged(Language::Russian), t0);

    assert!(manager.active_controller().case_state().0);
}

#[test]
fn test_switch_back_and_forth() {
    let (mut manager, _probe) = setup();
    let t0 = Instant::now();

    press(&mut manager, RawKey::Char('x'), t0);
    manager.handle_event(AppEvent::LanguageChanged(Language::Russian), t0);
    manager.handle_event(AppEvent::LanguageChanged(Language::English), t0);

    assert_eq!(manager.active_language(), Language::English);
    assert_eq!(manager.active_controller().typed_text(), "x");
    assert!(manager.active_visualizer().has_tree());
}

#[test]
fn test_end_to_end_typing_and_switch() {
    let (mut manager, probe) = setup();
    let mut now = Instant::now();

    // Type 'a'.
    press(&mut manager, RawKey::Char('a'), now);
    assert_eq!(manager.active_controller().typed_text(), "a");

    // Shift+'b' appends an uppercase B.
    press(&mut manager, RawKey::Special("shift"), now);
    press(&mut manager, RawKey::Char('b'), now);
    release(&mut manager, RawKey::Special("shift"), now);
    assert_eq!(manager.active_controller().typed_text(), "aB");

    // Caps Lock pressed; the OS reports it off, so case stays normal.
    probe.set_caps_lock(false);
    press(&mut manager, RawKey::Special("caps_lock"), now);
    assert!(!manager.active_controller().case_state().0);

    // OS input language flips to Russian.
    manager.handle_event(AppEvent::LanguageChanged(Language::Russian), now);
    assert_eq!(manager.active_controller().typed_text(), "aB");

    // Physical F under the Russian layout appends Cyrillic а.
    now += Duration::from_millis(100);
    press(&mut manager, RawKey::Char('f'), now);
    assert_eq!(manager.active_controller().typed_text(), "aBа");
}

#[test]
fn test_release_of_unheld_shift_is_harmless() {
    let (mut manager, _probe) = setup();
    let t0 = Instant::now();

    release(&mut manager, RawKey::Special("shift"), t0);
    press(&mut manager, RawKey::Char('c'), t0);

    assert_eq!(manager.active_controller().typed_text(), "c");
}

#[test]
fn test_tick_runs_without_pending_deadlines() {
    let (mut manager, _probe) = setup();

    // No highlight pending: tick must be a no-op, not a panic.
    manager.tick(Instant::now() + Duration::from_secs(1));
}
