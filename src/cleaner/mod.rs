//! Confirmation-gated deletion of scan matches.
//!
//! This module provides:
//! - Recursive removal of a single matched directory
//! - The confirmation gate contract honored before every deletion
//! - A batch runner with per-path outcomes and a summary

mod remover;

pub use remover::{remove_dir, RemoveOutcome};

use crate::scanner::MatchedDir;
use std::path::Path;

/// Decides whether a given match may be deleted.
///
/// Declining leaves both the filesystem and the caller's match list
/// untouched.
pub trait ConfirmGate {
    fn confirm(&mut self, path: &Path) -> bool;
}

/// Gate that accepts every path (used by `clean --force`).
pub struct AcceptAll;

impl ConfirmGate for AcceptAll {
    fn confirm(&mut self, _path: &Path) -> bool {
        true
    }
}

/// Gate backed by a function, for embedding and tests.
pub struct FnGate<F: FnMut(&Path) -> bool>(pub F);

impl<F: FnMut(&Path) -> bool> ConfirmGate for FnGate<F> {
    fn confirm(&mut self, path: &Path) -> bool {
        (self.0)(path)
    }
}

/// Run the confirmation gate and remover over a batch of matches.
///
/// A failed deletion never aborts processing of the remaining matches.
pub fn remove_all(matches: &[MatchedDir], gate: &mut dyn ConfirmGate) -> Vec<RemoveOutcome> {
    matches
        .iter()
        .map(|m| {
            if gate.confirm(&m.path) {
                remove_dir(&m.path)
            } else {
                tracing::debug!(path = %m.path.display(), "Deletion declined");
                RemoveOutcome::Declined {
                    path: m.path.clone(),
                }
            }
        })
        .collect()
}

/// Summary of removal results.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RemoveSummary {
    /// Number of directories deleted.
    pub removed_count: usize,
    /// Number of paths already gone at delete time.
    pub missing_count: usize,
    /// Number of deletions the gate declined.
    pub declined_count: usize,
    /// Number of failed deletions.
    pub failed_count: usize,
    /// Total bytes freed.
    pub total_freed: u64,
}

/// Get summary statistics from results.
pub fn summarize(results: &[RemoveOutcome]) -> RemoveSummary {
    let mut summary = RemoveSummary::default();

    for result in results {
        match result {
            RemoveOutcome::Removed { freed_bytes, .. } => {
                summary.removed_count += 1;
                summary.total_freed += freed_bytes;
            }
            RemoveOutcome::Missing { .. } => {
                summary.missing_count += 1;
            }
            RemoveOutcome::Declined { .. } => {
                summary.declined_count += 1;
            }
            RemoveOutcome::Failed { .. } => {
                summary.failed_count += 1;
            }
        }
    }

    summary
}
