//! Pruning directory walk for dependency-cache discovery.

use super::targets::TargetNames;
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Options for scanning.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Folder basenames that count as a match.
    pub targets: TargetNames,
    /// Maximum directory depth to scan (None = unlimited).
    pub max_depth: Option<usize>,
    /// Whether to follow symbolic links.
    pub follow_symlinks: bool,
}

impl ScanOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target basenames.
    pub fn with_targets(mut self, targets: TargetNames) -> Self {
        self.targets = targets;
        self
    }

    /// Set maximum recursion depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set whether to follow symbolic links.
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}

/// A discovered dependency-cache directory.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MatchedDir {
    /// Absolute path of the matched directory.
    pub path: PathBuf,
    /// The basename that matched (e.g. "node_modules").
    pub name: String,
    /// Total size of the subtree in bytes.
    pub size: u64,
}

/// Scan a directory tree for folders whose basename is a target name.
///
/// Pre-order depth-first traversal. A matched folder is emitted and never
/// descended into, so a vendor folder inside another match is not reported
/// separately. Matches are returned in discovery order.
///
/// A missing or unreadable root yields an empty result; unreadable
/// subdirectories are skipped and the walk continues elsewhere.
pub fn scan(root: &Path, options: &ScanOptions) -> Vec<MatchedDir> {
    let mut matches = Vec::new();

    let mut walker = WalkDir::new(root).follow_links(options.follow_symlinks);
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut iter = walker.into_iter();
    loop {
        let entry = match iter.next() {
            None => break,
            Some(Ok(entry)) => entry,
            Some(Err(err)) => {
                tracing::debug!(error = %err, "Skipping unreadable entry");
                continue;
            }
        };

        // The root itself is never a match; only its descendants are
        // examined. Non-directories are not part of the matching domain.
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            continue;
        }

        if options.targets.matches(entry.file_name()) {
            let name = entry.file_name().to_string_lossy().into_owned();
            let path = entry.into_path();
            matches.push(MatchedDir {
                size: dir_size(&path),
                name,
                path,
            });
            // Prune: do not descend into a match
            iter.skip_current_dir();
        }
    }

    matches
}

/// Total size in bytes of all files under `path`.
pub fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .flatten()
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}
