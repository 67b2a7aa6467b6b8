//! Theme system for consistent UI colors across dark and light modes.
//!
//! This module provides a centralized theme that automatically detects
//! the OS theme (dark/light mode) and applies appropriate colors,
//! including the key-cell palette the highlight state machine paints
//! with.

use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::models::Language;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for borders and chrome
    pub primary: Color,
    /// Accent color for the typed-text display
    pub accent: Color,
    /// Primary text content color
    pub text: Color,
    /// Muted text color for help text and dim content
    pub text_muted: Color,
    /// Main background color
    pub background: Color,
    /// Surface color for the text display panel
    pub surface: Color,

    // Key-cell palette
    /// Resting key background
    pub key_resting: Color,
    /// Resting background for the two home-row marker keys
    pub key_home_row: Color,
    /// Background of a just-pressed key
    pub key_pressed_bg: Color,
    /// Foreground of a just-pressed key
    pub key_pressed_fg: Color,
    /// Background of a dimmed-but-still-marked key
    pub key_dimmed_bg: Color,

    /// Title accent for the English layout
    pub title_english: Color,
    /// Title accent for the Russian layout
    pub title_russian: Color,
}

impl Theme {
    /// Resolves a theme from the configured mode. `Auto` detects the
    /// OS dark/light preference via the `dark-light` crate.
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Detects the OS theme and returns the matching variant.
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Dark theme for dark mode, unspecified, or errors.
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Dark theme, matching the original desktop palette.
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Rgb(0, 255, 136),
            text: Color::Rgb(224, 224, 224),
            text_muted: Color::DarkGray,
            background: Color::Rgb(26, 26, 26),
            surface: Color::Rgb(37, 37, 37),

            key_resting: Color::Rgb(45, 45, 45),
            key_home_row: Color::Rgb(58, 58, 80),
            key_pressed_bg: Color::Rgb(0, 255, 136),
            key_pressed_fg: Color::Black,
            key_dimmed_bg: Color::Rgb(0, 170, 85),

            title_english: Color::Rgb(77, 171, 247),
            title_russian: Color::Rgb(255, 107, 107),
        }
    }

    /// Light theme for light terminal backgrounds.
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(0, 128, 64),
            text: Color::Black,
            text_muted: Color::Gray,
            background: Color::White,
            surface: Color::Rgb(240, 240, 240),

            key_resting: Color::Rgb(220, 220, 220),
            key_home_row: Color::Rgb(190, 190, 220),
            key_pressed_bg: Color::Rgb(0, 200, 100),
            key_pressed_fg: Color::Black,
            key_dimmed_bg: Color::Rgb(120, 220, 170),

            title_english: Color::Rgb(20, 90, 170),
            title_russian: Color::Rgb(190, 40, 40),
        }
    }

    /// The title accent color for a language.
    pub const fn title_color(&self, language: Language) -> Color {
        match language {
            Language::English => self.title_english,
            Language::Russian => self.title_russian,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
