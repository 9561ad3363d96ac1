//! Discovery of dependency-cache directories.
//!
//! This module provides:
//! - The set of folder basenames that count as a match
//! - A pruning directory walk that finds matches under a root

mod targets;
mod walker;

pub use targets::TargetNames;
pub use walker::{dir_size, scan, MatchedDir, ScanOptions};
