//! Layout switching and event dispatch.
//!
//! The manager owns one (visualizer, controller) pair per language,
//! the global listener handle, and the language poll thread. It is the
//! only component that decides which pair is active, and it only ever
//! runs on the main thread: background threads reach it exclusively
//! through [`AppEvent`] messages.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::Config;
use crate::controller::{Controller, ControllerTuning};
use crate::listener::GlobalListener;
use crate::models::{AppEvent, KeyEvent, Language};
use crate::services::SystemProbe;
use crate::visualizer::Visualizer;

/// One language's visualizer and controller.
struct Pair {
    visualizer: Visualizer,
    controller: Controller,
}

impl Pair {
    fn new(language: Language, tuning: ControllerTuning, probe: &dyn SystemProbe) -> Self {
        Self {
            visualizer: Visualizer::new(language),
            controller: Controller::new(language, tuning, probe),
        }
    }
}

/// Owns the active (visualizer, controller) pair and performs the
/// atomic language switch.
pub struct LayoutManager {
    english: Pair,
    russian: Pair,
    active: Language,
    listener: GlobalListener,
    probe: Arc<dyn SystemProbe>,
    tx: Option<Sender<AppEvent>>,
    language_poll: Duration,
    /// Total presses seen, for the status bar readout.
    press_count: u64,
}

impl LayoutManager {
    /// Pre-creates both pairs and builds the English grid, which is
    /// the initially active layout.
    pub fn new(probe: Arc<dyn SystemProbe>, config: &Config) -> Self {
        let tuning = config.input.controller_tuning();
        let mut manager = Self {
            english: Pair::new(Language::English, tuning, probe.as_ref()),
            russian: Pair::new(Language::Russian, tuning, probe.as_ref()),
            active: Language::English,
            listener: GlobalListener::new(),
            probe,
            tx: None,
            language_poll: Duration::from_millis(config.input.language_poll_ms),
            press_count: 0,
        };
        manager.pair_mut(Language::English).visualizer.build_layout("");
        manager
    }

    /// Starts the background threads: the language poller and the
    /// global key listener (which attaches after its grace period).
    pub fn start(&mut self, tx: Sender<AppEvent>) {
        self.spawn_language_poll(tx.clone());
        self.listener.start(tx.clone());
        self.tx = Some(tx);
    }

    /// The currently active language.
    pub const fn active_language(&self) -> Language {
        self.active
    }

    /// The active visualizer, for rendering.
    pub fn active_visualizer(&self) -> &Visualizer {
        &self.pair(self.active).visualizer
    }

    /// The active controller, for the status bar readouts.
    pub fn active_controller(&self) -> &Controller {
        &self.pair(self.active).controller
    }

    /// Total key presses dispatched since startup.
    pub const fn press_count(&self) -> u64 {
        self.press_count
    }

    /// Dispatches one message from the channel. Runs on the main
    /// thread, so a switch can never interleave inside a key event.
    pub fn handle_event(&mut self, event: AppEvent, now: Instant) {
        match event {
            AppEvent::Key(KeyEvent::Press(raw)) => {
                self.press_count += 1;
                let probe = Arc::clone(&self.probe);
                let pair = self.pair_mut(self.active);
                pair.controller
                    .on_key_down(&raw, &mut pair.visualizer, probe.as_ref(), now);
            }
            AppEvent::Key(KeyEvent::Release(raw)) => {
                self.pair_mut(self.active).controller.on_key_up(&raw);
            }
            AppEvent::LanguageChanged(language) => {
                if language != self.active {
                    self.switch_layout(language);
                }
            }
        }
    }

    /// Applies pending highlight-dim deadlines.
    pub fn tick(&mut self, now: Instant) {
        self.pair_mut(self.active).visualizer.tick(now);
    }

    /// Switches the active pair to `target`.
    ///
    /// Order matters: the listener gate closes before the outgoing
    /// tree is torn down, and reopens only after the incoming tree is
    /// rebuilt, so no key event is ever delivered to a controller
    /// whose visualizer has no widgets.
    pub fn switch_layout(&mut self, target: Language) {
        info!(from = %self.active, to = %target, "switching layout");

        let text = self.pair(self.active).controller.typed_text().to_string();

        self.listener.stop();
        self.pair_mut(self.active).visualizer.teardown();

        self.active = target;
        let probe = Arc::clone(&self.probe);
        let pair = self.pair_mut(target);
        pair.controller.sync_caps_lock_state(probe.as_ref());
        pair.controller.set_typed_text(&text, &mut pair.visualizer);
        pair.visualizer.build_layout(&text);

        if let Some(tx) = self.tx.clone() {
            self.listener.start(tx);
        }
    }

    fn spawn_language_poll(&self, tx: Sender<AppEvent>) {
        let probe = Arc::clone(&self.probe);
        let interval = self.language_poll;
        let mut last = self.active;
        thread::spawn(move || loop {
            thread::sleep(interval);
            let language = probe.active_language();
            if language != last {
                debug!(%language, "input language changed");
                last = language;
                if tx.send(AppEvent::LanguageChanged(language)).is_err() {
                    // Main loop is gone; the poller dies with it.
                    return;
                }
            }
        });
    }

    const fn pair(&self, language: Language) -> &Pair {
        match language {
            Language::English => &self.english,
            Language::Russian => &self.russian,
        }
    }

    fn pair_mut(&mut self, language: Language) -> &mut Pair {
        match language {
            Language::English => &mut self.english,
            Language::Russian => &mut self.russian,
        }
    }
}
