//! User confirmation prompts.
//!
//! Automatically skipped with `--yes`. In a non-interactive terminal the
//! prompt is not shown and the operation is declined.

use crate::error::Result;
use crate::steps::rename::RenameArgs;
use crate::steps::undo::UndoArgs;
use colored::Colorize;
use std::io::{self, IsTerminal, Write};

/// Asks before renaming `count` files.
///
/// # Automatic Skip Conditions
///
/// - `--yes` flag is set
/// - `--dry-run` flag is set (no confirmation needed)
///
/// # Returns
///
/// - `Ok(true)` if user confirms or prompt is skipped
/// - `Ok(false)` if user declines or stdin is not a terminal
///
/// # Errors
///
/// Returns `Err` only on I/O errors reading stdin.
pub fn confirm_operation(args: &RenameArgs, count: usize) -> Result<bool> {
    if args.skip_confirmation || args.dry_run {
        return Ok(true);
    }

    println!("\n{}", "Rename Plan:".bold().cyan());
    println!(
        "  {} {}",
        "Directory:".bold(),
        args.directory.display().to_string().yellow()
    );
    println!(
        "  {} {} {} will be prefixed",
        "✓".green(),
        count,
        if count == 1 { "file" } else { "files" }
    );
    println!();

    ask("Continue?")
}

/// Asks before undoing the last batch of `count` renames.
pub fn confirm_undo(args: &UndoArgs, count: usize) -> Result<bool> {
    if args.skip_confirmation {
        return Ok(true);
    }

    println!(
        "\n{} {} {} will get their original names back.",
        "Undo:".bold().cyan(),
        count,
        if count == 1 { "file" } else { "files" }
    );

    ask("Undo the last rename?")
}

fn ask(question: &str) -> Result<bool> {
    if !io::stdin().is_terminal() {
        log::warn!("Non-interactive terminal detected. Use --yes to confirm automatically.");
        return Ok(false);
    }

    print!("{} {} ", question.bold(), "(y/N)".dimmed());
    io::stdout().flush()?;

    let mut response = String::new();
    io::stdin().read_line(&mut response)?;

    let confirmed =
        response.trim().eq_ignore_ascii_case("y") || response.trim().eq_ignore_ascii_case("yes");

    if !confirmed {
        log::info!("Cancelled by user");
    }

    Ok(confirmed)
}
