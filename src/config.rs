//! Configuration management for the application.
//!
//! This module handles loading and saving application configuration in
//! TOML format with platform-specific directory resolution. Everything
//! has a sensible default; a missing config file is not an error.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants;
use crate::controller::ControllerTuning;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// UI preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme preference
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Input handling tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Interval between OS language polls, in milliseconds
    #[serde(default = "default_language_poll_ms")]
    pub language_poll_ms: u64,
    /// Duplicate-press suppression window, in milliseconds
    #[serde(default = "default_key_debounce_ms")]
    pub key_debounce_ms: u64,
    /// Maximum typed-text length before FIFO truncation
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
}

const fn default_language_poll_ms() -> u64 {
    constants::LANGUAGE_POLL_MS
}

const fn default_key_debounce_ms() -> u64 {
    constants::KEY_DEBOUNCE_MS
}

const fn default_max_text_length() -> usize {
    constants::MAX_TYPED_TEXT
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            language_poll_ms: default_language_poll_ms(),
            key_debounce_ms: default_key_debounce_ms(),
            max_text_length: default_max_text_length(),
        }
    }
}

impl InputConfig {
    /// The controller tuning derived from this configuration.
    pub fn controller_tuning(&self) -> ControllerTuning {
        ControllerTuning {
            max_text_length: self.max_text_length,
            key_debounce: Duration::from_millis(self.key_debounce_ms),
            ..ControllerTuning::default()
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Input handling tunables
    #[serde(default)]
    pub input: InputConfig,
}

impl Config {
    /// Gets the platform-specific configuration directory.
    ///
    /// - Linux: `~/.config/keymirror/`
    /// - macOS: `~/Library/Application Support/keymirror/`
    /// - Windows: `%APPDATA%\keymirror\`
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join(constants::APP_BINARY_NAME))
    }

    /// Gets the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Checks whether a configuration file exists at the default path.
    pub fn exists() -> bool {
        Self::default_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Loads the configuration from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Loads the configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Saves the configuration to the default path, creating the
    /// directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir: {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}
