//! KeyMirror library
//!
//! Core functionality for the KeyMirror application: keyboard layout
//! tables, character resolution, per-language controllers, the visual
//! key grid model, and the layout switching machinery.

// Module declarations
pub mod config;
pub mod constants;
pub mod controller;
pub mod layouts;
pub mod listener;
pub mod manager;
pub mod models;
pub mod processor;
pub mod services;
pub mod tui;
pub mod visualizer;
