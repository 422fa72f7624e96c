//! Reverting the last tagging batch.

use crate::error::{RenameError, Result};
use crate::fs::{FileSystem, RenameTransaction};
use crate::verify::confirm_undo;

use clap::Parser;
use colored::Colorize;

/// Arguments for the `undo` command.
#[derive(Parser, Debug, Clone, Default)]
pub struct UndoArgs {
    /// Skip interactive confirmation
    #[arg(long = "yes", short = 'y')]
    pub skip_confirmation: bool,
}

/// Reverts the batch recorded in `txn`.
///
/// Returns `EmptyJournal` without prompting when there is nothing to undo.
/// If a file cannot be restored the journal is kept, so running undo again
/// retries the remaining entries.
pub fn execute<F: FileSystem>(args: &UndoArgs, txn: &mut RenameTransaction<F>) -> Result<()> {
    if !txn.can_undo() {
        return Err(RenameError::EmptyJournal);
    }

    let count = txn.len();
    if !confirm_undo(args, count)? {
        println!("\n{}", "Undo cancelled.".yellow());
        return Err(RenameError::Cancelled);
    }

    if let Err(e) = txn.undo_last() {
        eprintln!(
            "{} Undo incomplete; run undo again to retry the remaining files.",
            "⚠".yellow().bold()
        );
        return Err(e);
    }

    println!(
        "{} Restored {} original {}",
        "✓".green().bold(),
        count,
        if count == 1 { "name" } else { "names" }
    );
    Ok(())
}
