//! Orchestration logic for tagging a directory.
//!
//! All file system modifications go through a `RenameTransaction` so the
//! batch is all-or-nothing and can be undone.

use crate::error::{RenameError, Result};
use crate::fs::{FileSystem, RenameTransaction};
use crate::naming::{PlannedRename, RenameParameters, generate};
use crate::verify::{confirm_operation, preflight_checks};

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

/// Arguments for the `rename` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct RenameArgs {
    /// Directory whose files get tagged (not recursive)
    pub directory: PathBuf,

    /// Tag letter, A-Z
    pub letter: String,

    /// Fixed number, printed with three digits (0-999)
    pub number: u32,

    /// First counter value (0-999)
    pub start: u32,

    /// Counter digits, 2 or 3
    pub digits: u8,

    /// Preview changes without applying them
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Skip interactive confirmation
    #[arg(long = "yes", short = 'y')]
    pub skip_confirmation: bool,
}

impl RenameArgs {
    /// Builds validated parameters from the raw arguments.
    pub fn parameters(&self) -> Result<RenameParameters> {
        RenameParameters::parse(&self.letter, self.number, self.start, self.digits)
    }
}

/// Executes a tagging batch.
///
/// ## Phases
///
/// 1. Pre-flight checks (directory, parameters)
/// 2. List files in native order and plan new names
/// 3. Preview only, if `--dry-run`
/// 4. User confirmation (unless `--yes`)
/// 5. Apply through `txn`; on failure the batch is already rolled back
///
/// On success `txn` holds the journal for a later undo.
pub fn execute<F: FileSystem>(args: &RenameArgs, txn: &mut RenameTransaction<F>) -> Result<()> {
    let params = preflight_checks(args)?;

    let listing = txn.file_system().list_files(&args.directory)?;
    if listing.is_empty() {
        println!(
            "{}",
            format!("No files found in '{}'", args.directory.display()).yellow()
        );
        return Ok(());
    }

    let plan = generate(&listing, &params);
    log::debug!(
        "Planned {} renames in {}",
        plan.len(),
        args.directory.display()
    );

    if args.dry_run {
        print_dry_run(txn, &plan);
        return Ok(());
    }

    if !confirm_operation(args, plan.len())? {
        println!("\n{}", "Operation cancelled.".yellow());
        return Err(RenameError::Cancelled);
    }

    match txn.apply(&plan) {
        Ok(_) => {
            txn.print_summary(&args.directory);
            Ok(())
        }
        Err(e) => handle_apply_error(e, txn),
    }
}

fn print_dry_run<F: FileSystem>(txn: &RenameTransaction<F>, plan: &[PlannedRename]) {
    println!("\n{}", "DRY RUN - No changes will be made".yellow().bold());

    let lines = txn.preview(plan);
    let conflicts = lines.iter().filter(|l| l.starts_with("Conflict")).count();
    for line in &lines {
        println!("   • {}", line);
    }

    println!();
    if conflicts > 0 {
        log::warn!("{} target name(s) already exist; the batch would abort", conflicts);
    }
    println!(
        "{} {} will be renamed. Run without {} to apply.",
        plan.len().to_string().cyan().bold(),
        if plan.len() == 1 { "file" } else { "files" },
        "--dry-run".cyan()
    );
}

fn handle_apply_error<F: FileSystem>(e: RenameError, txn: &RenameTransaction<F>) -> Result<()> {
    let failures = txn.rollback_failures();

    if failures.is_empty() {
        eprintln!(
            "{} Rename aborted; all files keep their original names.",
            "ℹ".blue().bold()
        );
    } else {
        eprintln!("{}", "✗ Rollback incomplete:".red().bold());
        for failure in failures {
            eprintln!("   {}", failure);
        }
        eprintln!(
            "{}",
            "⚠ Manual intervention may be required.".yellow().bold()
        );
    }

    Err(e)
}
