//! Recursive deletion of a matched directory.

use crate::scanner::dir_size;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a removal attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The directory and everything it contained were deleted.
    Removed { path: PathBuf, freed_bytes: u64 },
    /// The path was already gone (or not a directory); nothing to do.
    Missing { path: PathBuf },
    /// The confirmation gate declined the deletion.
    Declined { path: PathBuf },
    /// Deletion failed (permission denied, file in use, race).
    Failed { path: PathBuf, error: String },
}

impl RemoveOutcome {
    /// The path this outcome refers to.
    pub fn path(&self) -> &Path {
        match self {
            RemoveOutcome::Removed { path, .. }
            | RemoveOutcome::Missing { path }
            | RemoveOutcome::Declined { path }
            | RemoveOutcome::Failed { path, .. } => path,
        }
    }
}

/// Delete the directory subtree rooted at `path`.
///
/// Children are removed before their parent (post-order). A path that no
/// longer exists, or is not a directory, is a no-op reported as
/// [`RemoveOutcome::Missing`] rather than an error. Failures are captured
/// per path and never panic or propagate.
pub fn remove_dir(path: &Path) -> RemoveOutcome {
    if !path.is_dir() {
        tracing::debug!(path = %path.display(), "Nothing to remove");
        return RemoveOutcome::Missing {
            path: path.to_path_buf(),
        };
    }

    let size = dir_size(path);
    match fs::remove_dir_all(path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), freed = size, "Removed directory");
            RemoveOutcome::Removed {
                path: path.to_path_buf(),
                freed_bytes: size,
            }
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "Failed to remove directory");
            RemoveOutcome::Failed {
                path: path.to_path_buf(),
                error: err.to_string(),
            }
        }
    }
}
