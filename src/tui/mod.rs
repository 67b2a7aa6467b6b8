//! Terminal user interface and the main event loop.
//!
//! The main loop is the single place where shared state mutates:
//! each iteration drains the message channel from the background
//! threads, applies due highlight transitions, redraws, and polls the
//! terminal for the quit chord. Channel order is FIFO, so a
//! highlight-then-append pair always lands in submission order.

pub mod keyboard;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::manager::LayoutManager;
use crate::models::AppEvent;

// Re-export TUI components
pub use keyboard::KeyboardWidget;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Top-level application state for the main loop.
pub struct App {
    /// Layout manager owning both language pairs.
    pub manager: LayoutManager,
    /// Loaded configuration.
    pub config: Config,
    /// Resolved color theme.
    pub theme: Theme,
    /// Channel from the listener and poller threads.
    pub rx: Receiver<AppEvent>,
    /// Set when the user requests exit.
    pub should_quit: bool,
}

impl App {
    /// Creates the application state around a started manager.
    pub fn new(manager: LayoutManager, config: Config, rx: Receiver<AppEvent>) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        Self {
            manager,
            config,
            theme,
            rx,
            should_quit: false,
        }
    }
}

/// Set up the terminal for TUI rendering
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run(app: &mut App, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto detects the OS)
        app.theme = Theme::from_mode(app.config.ui.theme_mode);

        // Drain messages from the listener and language poller. All
        // mutation of visualizer/controller state happens here, on
        // this thread, in FIFO order.
        while let Ok(message) = app.rx.try_recv() {
            app.manager.handle_event(message, Instant::now());
        }

        // Apply the pressed -> dimmed transition when due
        app.manager.tick(Instant::now());

        // Render current state
        terminal.draw(|f| render(f, app))?;

        // Poll for terminal events with a short timeout
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                    if ctrl && matches!(key.code, KeyCode::Char('q' | 'c')) {
                        app.should_quit = true;
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal resized, will re-render on next loop
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn render(f: &mut Frame, app: &App) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Typed-text display
            Constraint::Min(18),   // Key grid
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], app);
    render_text_display(f, chunks[1], app);
    KeyboardWidget::render(f, chunks[2], app.manager.active_visualizer(), &app.theme);
    StatusBar::render(f, chunks[3], &app.manager, &app.theme);
}

/// Render title bar with the language name and its accent color
fn render_title_bar(f: &mut Frame, area: Rect, app: &App) {
    let language = app.manager.active_language();
    let title_widget = Paragraph::new(language.title())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(app.theme.title_color(language))
                .bg(app.theme.background)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(app.theme.background)),
        );
    f.render_widget(title_widget, area);
}

/// Render the single-line typed-text display
fn render_text_display(f: &mut Frame, area: Rect, app: &App) {
    let text = app
        .manager
        .active_visualizer()
        .text_display()
        .unwrap_or(" ");
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(app.theme.accent)
                .bg(app.theme.surface)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(app.theme.surface)),
        );
    f.render_widget(widget, area);
}
