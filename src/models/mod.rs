//! Data models shared across the application.
//!
//! This module contains the core data structures used throughout the
//! application. Models are independent of UI and business logic.

pub mod event;
pub mod language;

// Re-export all model types
pub use event::{AppEvent, KeyEvent, RawKey};
pub use language::Language;
