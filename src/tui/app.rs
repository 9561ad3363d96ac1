//! Application state for the TUI.
//!
//! The view emits (selection, intent) events; this controller maps them to
//! confirmation and removal against the scanner/cleaner core.

use std::path::PathBuf;

use crate::cleaner::{remove_dir, RemoveOutcome};
use crate::scanner::{scan, MatchedDir, ScanOptions};
use humansize::{format_size, BINARY};

/// The current UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal navigation mode.
    Normal,
    /// Confirmation dialog for deleting the selected match.
    Confirm,
    /// Help overlay mode.
    Help,
}

/// Main application state for the TUI.
pub struct App {
    /// Root directory being scanned.
    pub root: PathBuf,

    /// Scan options (targets, depth, symlink policy).
    options: ScanOptions,

    /// Whether deletion requires the confirmation dialog.
    confirm_before_delete: bool,

    /// Discovered matches, sorted by path.
    pub matches: Vec<MatchedDir>,

    /// Currently selected index in `matches`.
    pub selected: usize,

    /// Current UI mode.
    pub mode: Mode,

    /// Application should quit.
    pub should_quit: bool,

    /// Status message to display.
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance.
    pub fn new(root: PathBuf, options: ScanOptions, confirm_before_delete: bool) -> Self {
        Self {
            root,
            options,
            confirm_before_delete,
            matches: Vec::new(),
            selected: 0,
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
        }
    }

    /// Re-run the scan and rebuild the match list.
    pub fn rescan(&mut self) {
        self.matches = scan(&self.root, &self.options);
        self.matches.sort_by(|a, b| a.path.cmp(&b.path));
        self.clamp_selection();
        self.status_message = Some(format!(
            "Found {} dependency cache{}",
            self.matches.len(),
            if self.matches.len() == 1 { "" } else { "s" }
        ));
    }

    /// Get the currently selected match, if any.
    pub fn selected_match(&self) -> Option<&MatchedDir> {
        self.matches.get(self.selected)
    }

    /// Total size of all listed matches.
    pub fn total_size(&self) -> u64 {
        self.matches.iter().map(|m| m.size).sum()
    }

    /// Move the selection by `delta`, clamped to the list bounds.
    pub fn move_selection(&mut self, delta: isize) {
        if self.matches.is_empty() {
            return;
        }
        let last = self.matches.len() - 1;
        self.selected = self
            .selected
            .saturating_add_signed(delta)
            .min(last);
    }

    /// Handle the delete intent for the current selection.
    ///
    /// Opens the confirmation dialog unless confirmation is disabled.
    pub fn request_delete(&mut self) {
        if self.selected_match().is_none() {
            return;
        }
        if self.confirm_before_delete {
            self.mode = Mode::Confirm;
        } else {
            self.delete_selected();
        }
    }

    /// Delete the selected match and drop it from the list on success.
    ///
    /// Failures keep the entry listed and surface the error in the status
    /// line.
    pub fn delete_selected(&mut self) {
        let Some(m) = self.matches.get(self.selected) else {
            return;
        };

        match remove_dir(&m.path) {
            RemoveOutcome::Removed { path, freed_bytes } => {
                self.status_message = Some(format!(
                    "Removed {} ({} freed)",
                    path.display(),
                    format_size(freed_bytes, BINARY)
                ));
                self.matches.remove(self.selected);
            }
            RemoveOutcome::Missing { path } => {
                self.status_message = Some(format!("Already gone: {}", path.display()));
                self.matches.remove(self.selected);
            }
            RemoveOutcome::Failed { path, error } => {
                self.status_message =
                    Some(format!("Failed to remove {}: {}", path.display(), error));
            }
            RemoveOutcome::Declined { .. } => {}
        }

        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.matches.len() {
            self.selected = self.matches.len().saturating_sub(1);
        }
    }
}
