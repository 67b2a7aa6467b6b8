//! Service layer for OS integration.
//!
//! This module wraps the platform queries the rest of the application
//! depends on, behind a trait so tests can substitute fakes.

pub mod platform;

// Re-export commonly used types and functions
pub use platform::{system_probe, SystemProbe};
