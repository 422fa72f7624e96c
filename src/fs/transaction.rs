//! All-or-nothing batch renames with single-level undo.
//!
//! Applies a planned batch move by move and records every completed move in
//! a journal. The journal drives both automatic rollback and explicit undo.
//!
//! ## Execution Guarantees
//!
//! - **Atomicity**: All renames succeed, or the completed ones are reversed
//! - **Ordering**: Rollback and undo walk the journal in reverse (LIFO)
//! - **Collision safety**: An occupied target aborts the batch before moving
//! - **Single-level undo**: Starting a batch discards the previous journal
//!
//! ## States
//!
//! ```text
//! Idle → Applying → Committed | RolledBack
//! Committed → UndoInProgress → Idle | Committed (undo failed, journal kept)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! # use prefix_rename::fs::{FileSystem, RenameTransaction, StdFileSystem};
//! # use prefix_rename::naming::{RenameParameters, generate};
//! # use std::path::Path;
//! # fn example() -> prefix_rename::error::Result<()> {
//! let params = RenameParameters::parse("A", 5, 1, 2)?;
//! let listing = StdFileSystem.list_files(Path::new("photos"))?;
//!
//! let mut txn = RenameTransaction::new();
//! txn.apply(&generate(&listing, &params))?; // Commits or rolls back
//! txn.undo_last()?;
//! # Ok(())
//! # }
//! ```

use super::backend::{FileSystem, StdFileSystem};
use crate::error::{RenameError, Result};
use crate::naming::PlannedRename;

use colored::Colorize;
use std::path::{Path, PathBuf};

/// A rename that was physically performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedRename {
    pub original_path: PathBuf,
    pub new_path: PathBuf,
}

impl From<&PlannedRename> for AppliedRename {
    fn from(planned: &PlannedRename) -> Self {
        Self {
            original_path: planned.original_path.clone(),
            new_path: planned.new_path.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionState {
    /// Nothing pending; undo not available.
    Idle,
    /// Moves in progress.
    Applying,
    /// Batch fully applied; journal available for undo.
    Committed,
    /// Batch aborted and reversed.
    RolledBack,
    /// Reversing the committed journal.
    UndoInProgress,
}

/// Applies rename batches and owns the journal of the last one.
///
/// Each instance owns its journal, so independent transactions never
/// interfere with each other.
pub struct RenameTransaction<F: FileSystem = StdFileSystem> {
    fs: F,
    journal: Vec<AppliedRename>,
    state: TransactionState,
    rollback_failures: Vec<String>,
}

impl RenameTransaction<StdFileSystem> {
    /// Creates a transaction on the real file system.
    pub fn new() -> Self {
        Self::with_file_system(StdFileSystem)
    }
}

impl Default for RenameTransaction<StdFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> RenameTransaction<F> {
    /// Creates a transaction on a custom [`FileSystem`].
    pub fn with_file_system(fs: F) -> Self {
        Self {
            fs,
            journal: Vec::new(),
            state: TransactionState::Idle,
            rollback_failures: Vec::new(),
        }
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    pub fn state(&self) -> TransactionState {
        self.state
    }

    /// Moves recorded for the last committed batch, in applied order.
    pub fn journal(&self) -> &[AppliedRename] {
        &self.journal
    }

    pub fn len(&self) -> usize {
        self.journal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.journal.is_empty()
    }

    /// Returns true if a committed batch can be undone.
    pub fn can_undo(&self) -> bool {
        !self.journal.is_empty()
    }

    /// Entries the last rollback could not restore.
    ///
    /// Empty unless the most recent `apply` aborted and reversing one of its
    /// moves failed too.
    pub fn rollback_failures(&self) -> &[String] {
        &self.rollback_failures
    }

    /// Applies `plan` in order.
    ///
    /// Discards the previous journal first. On the first collision or failed
    /// move, reverses every move made so far in this batch and returns that
    /// error; the journal is left empty.
    ///
    /// Returns the number of files renamed.
    pub fn apply(&mut self, plan: &[PlannedRename]) -> Result<usize> {
        if !self.journal.is_empty() {
            log::info!(
                "Discarding undo journal of previous batch ({} renames)",
                self.journal.len()
            );
        }
        self.journal.clear();
        self.rollback_failures.clear();

        if plan.is_empty() {
            self.state = TransactionState::Idle;
            return Ok(0);
        }

        self.state = TransactionState::Applying;
        log::info!("Applying {} renames", plan.len());

        for planned in plan {
            if let Err(e) = self.apply_one(planned) {
                log::warn!("Batch aborted: {}", e);
                self.rollback();
                self.state = TransactionState::RolledBack;
                return Err(e);
            }
        }

        self.state = TransactionState::Committed;
        Ok(self.journal.len())
    }

    fn apply_one(&mut self, planned: &PlannedRename) -> Result<()> {
        if self.fs.exists(&planned.new_path) {
            return Err(RenameError::Collision {
                file_name: planned.new_file_name(),
                path: planned.new_path.clone(),
            });
        }

        self.fs
            .move_path(&planned.original_path, &planned.new_path)
            .map_err(|source| RenameError::MoveFailed {
                from: planned.original_path.clone(),
                to: planned.new_path.clone(),
                source,
            })?;

        log::debug!(
            "Renamed: {} → {}",
            planned.original_path.display(),
            planned.new_path.display()
        );
        self.journal.push(AppliedRename::from(planned));
        Ok(())
    }

    /// Reverses the current batch, best-effort.
    ///
    /// Keeps going past individual failures and records them in
    /// `rollback_failures`. The journal is cleared regardless.
    fn rollback(&mut self) {
        log::warn!("Rolling back {} renames...", self.journal.len());

        let mut errors = Vec::new();
        for applied in self.journal.iter().rev() {
            if !self.fs.exists(&applied.new_path) {
                continue;
            }

            if let Err(e) = self.fs.move_path(&applied.new_path, &applied.original_path) {
                let message = format!(
                    "Failed to move back {}: {}",
                    applied.new_path.display(),
                    e
                );
                log::error!("{}", message);
                errors.push(message);
            }
        }

        if errors.is_empty() {
            log::info!("Rollback completed");
        }

        self.journal.clear();
        self.rollback_failures = errors;
    }

    /// Reverses the last committed batch.
    ///
    /// Entries whose renamed file has disappeared are skipped. If a move
    /// fails, stops there and keeps the journal untouched so the undo can be
    /// retried; already-restored entries are skipped on retry.
    ///
    /// # Errors
    ///
    /// - `EmptyJournal` if there is nothing to undo (no file system access)
    /// - `MoveFailed` for the first entry that could not be restored
    pub fn undo_last(&mut self) -> Result<()> {
        if self.journal.is_empty() {
            return Err(RenameError::EmptyJournal);
        }

        self.state = TransactionState::UndoInProgress;
        log::info!("Undoing {} renames", self.journal.len());

        for applied in self.journal.iter().rev() {
            if !self.fs.exists(&applied.new_path) {
                log::warn!(
                    "{} no longer exists, skipping",
                    applied.new_path.display()
                );
                continue;
            }

            if let Err(source) = self.fs.move_path(&applied.new_path, &applied.original_path) {
                self.state = TransactionState::Committed;
                return Err(RenameError::MoveFailed {
                    from: applied.new_path.clone(),
                    to: applied.original_path.clone(),
                    source,
                });
            }

            log::debug!(
                "Restored: {} → {}",
                applied.new_path.display(),
                applied.original_path.display()
            );
        }

        self.journal.clear();
        self.state = TransactionState::Idle;
        log::info!("Undo completed");
        Ok(())
    }

    /// Returns a human-readable preview of `plan`.
    ///
    /// Targets that are already taken are flagged, so a dry run shows where
    /// the batch would abort.
    pub fn preview(&self, plan: &[PlannedRename]) -> Vec<String> {
        plan.iter()
            .map(|planned| {
                let from = display_name(&planned.original_path);
                let to = planned.new_file_name();
                if self.fs.exists(&planned.new_path) {
                    format!("Conflict: {} → {} (already exists)", from, to)
                } else {
                    format!("Rename: {} → {}", from, to)
                }
            })
            .collect()
    }

    /// Prints the renames recorded in the journal to stdout.
    ///
    /// Lists the first 8 entries, then a count of the rest. The directory
    /// header is shown relative to the current directory when possible.
    pub fn print_summary(&self, directory: &Path) {
        if self.journal.is_empty() {
            println!("\n{}", "No files renamed".yellow());
            return;
        }

        let shown_dir = std::env::current_dir()
            .ok()
            .and_then(|cwd| pathdiff::diff_paths(directory, cwd))
            .filter(|rel| !rel.as_os_str().is_empty())
            .unwrap_or_else(|| directory.to_path_buf());

        println!(
            "\n{} {}",
            "Renamed in".green().bold(),
            shown_dir.to_string_lossy().replace('\\', "/")
        );

        for applied in self.journal.iter().take(8) {
            println!(
                "   {} {} → {}",
                "✓".green(),
                display_name(&applied.original_path).dimmed(),
                display_name(&applied.new_path)
            );
        }
        if self.journal.len() > 8 {
            println!(
                "   {} {} more...",
                "✓".green(),
                self.journal.len() - 8
            );
        }

        println!();
        let count = self.journal.len();
        println!(
            "{} Successfully renamed {} {}",
            "✓".green().bold(),
            count,
            if count == 1 { "file" } else { "files" }
        );
    }
}

impl<F: FileSystem> Drop for RenameTransaction<F> {
    fn drop(&mut self) {
        if self.state == TransactionState::Committed && !self.journal.is_empty() {
            log::debug!(
                "Transaction dropped; undo for {} renames no longer available",
                self.journal.len()
            );
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
