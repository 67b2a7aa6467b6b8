//! KeyMirror - on-screen keyboard that mirrors physical key presses
//!
//! Listens globally for keyboard events, highlights the corresponding
//! on-screen key, keeps a rolling typed-text line, and swaps the whole
//! layout between English and Russian when the OS input language
//! changes.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::mpsc::channel;

use keymirror::config::{Config, ThemeMode};
use keymirror::constants::APP_NAME;
use keymirror::manager::LayoutManager;
use keymirror::services::system_probe;
use keymirror::tui;

/// KeyMirror - terminal keyboard press visualizer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Write a debug log to this file (stderr is taken by the TUI)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Override the configured theme (auto, dark, light)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Load configuration from a specific file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(theme) = cli.theme.as_deref() {
        config.ui.theme_mode = parse_theme_mode(theme)?;
    }

    tracing::info!("{} v{} starting", APP_NAME, env!("CARGO_PKG_VERSION"));

    let probe = system_probe();
    let (tx, rx) = channel();
    let mut manager = LayoutManager::new(probe, &config);
    manager.start(tx);

    let mut terminal = tui::setup_terminal()?;
    let mut app = tui::App::new(manager, config, rx);

    // Run main TUI loop
    let result = tui::run(&mut app, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => {
            Config::load_from(path).with_context(|| format!("loading {}", path.display()))
        }
        None => {
            if Config::exists() {
                match Config::load() {
                    Ok(config) => Ok(config),
                    Err(e) => {
                        tracing::warn!(?e, "failed to load config, using defaults");
                        Ok(Config::default())
                    }
                }
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn parse_theme_mode(value: &str) -> Result<ThemeMode> {
    match value {
        "auto" => Ok(ThemeMode::Auto),
        "dark" => Ok(ThemeMode::Dark),
        "light" => Ok(ThemeMode::Light),
        other => anyhow::bail!("unknown theme mode: {other} (expected auto, dark, or light)"),
    }
}

fn init_logging(path: &std::path::Path) -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let file = std::fs::File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("keymirror=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
