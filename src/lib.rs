//! Depsweep - a dependency-cache cleanup utility
//!
//! This crate provides functionality for:
//! - Discovering `vendor/` and `node_modules/` directories under a root
//! - Deleting discovered directories after per-path confirmation
//! - Interactive TUI for reviewing and deleting matches

pub mod cleaner;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod scanner;
pub mod tui;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SweepError};
