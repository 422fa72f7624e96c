//! Interactive session: several commands sharing one transaction.
//!
//! The undo journal only lives as long as the process, so `undo` is only
//! meaningful inside a session, after a `rename` in the same session.

use super::rename::{self, RenameArgs};
use super::undo::{self, UndoArgs};
use crate::error::Result;
use crate::fs::{FileSystem, RenameTransaction};

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, IsTerminal, Write};

/// Arguments for the `session` subcommand.
#[derive(Parser, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Skip confirmation for every command in the session
    #[arg(long = "yes", short = 'y')]
    pub skip_confirmation: bool,
}

/// One line typed in a session.
#[derive(Parser, Debug)]
#[command(name = "session", no_binary_name = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Tag every file in a directory
    Rename(RenameArgs),
    /// Revert the last rename of this session
    Undo(UndoArgs),
    /// Show whether an undo is available
    Status,
    /// Leave the session
    #[command(alias = "quit")]
    Exit,
}

/// What the session loop does after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFlow {
    Continue,
    Exit,
}

/// Runs the session on stdin until `exit` or end of input.
///
/// Command errors are printed and the session keeps going.
pub fn execute(args: &SessionArgs) -> Result<()> {
    let mut txn = RenameTransaction::new();
    let interactive = io::stdin().is_terminal();

    if interactive {
        println!(
            "{} Commands: rename <DIR> <LETTER> <NUMBER> <START> <DIGITS>, undo, status, exit",
            format!("prefix-rename {} session.", crate::VERSION).bold().cyan()
        );
    }

    let mut line = String::new();
    loop {
        if interactive {
            print!("{} ", ">".bold());
            io::stdout().flush()?;
        }

        line.clear();
        // Read without holding the stdin lock; confirmation prompts read too.
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        match dispatch(&line, args, &mut txn) {
            Ok(SessionFlow::Exit) => break,
            Ok(SessionFlow::Continue) => {}
            Err(e) => eprintln!("Error [{}]: {}", e.kind(), e),
        }
    }

    if txn.can_undo() {
        log::info!(
            "Session ended; last batch of {} renames is no longer undoable",
            txn.len()
        );
    }
    Ok(())
}

/// Parses and runs a single session line against `txn`.
///
/// Malformed lines print clap's usage message and do not fail.
pub fn dispatch<F: FileSystem>(
    line: &str,
    args: &SessionArgs,
    txn: &mut RenameTransaction<F>,
) -> Result<SessionFlow> {
    let words = split_words(line);
    if words.is_empty() {
        return Ok(SessionFlow::Continue);
    }

    let parsed = match SessionLine::try_parse_from(&words) {
        Ok(parsed) => parsed,
        Err(e) => {
            e.print()?;
            return Ok(SessionFlow::Continue);
        }
    };

    match parsed.command {
        SessionCommand::Rename(mut rename_args) => {
            rename_args.skip_confirmation |= args.skip_confirmation;
            rename::execute(&rename_args, txn)?;
        }
        SessionCommand::Undo(mut undo_args) => {
            undo_args.skip_confirmation |= args.skip_confirmation;
            undo::execute(&undo_args, txn)?;
        }
        SessionCommand::Status => {
            if txn.can_undo() {
                println!("Last batch: {} renames, undo available", txn.len());
            } else {
                println!("Nothing to undo");
            }
        }
        SessionCommand::Exit => return Ok(SessionFlow::Exit),
    }

    Ok(SessionFlow::Continue)
}

/// Splits a line on whitespace, keeping double-quoted parts together.
fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_word = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_word = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_word {
                    words.push(std::mem::take(&mut current));
                    has_word = false;
                }
            }
            c => {
                current.push(c);
                has_word = true;
            }
        }
    }

    if has_word {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenameError;
    use std::fs;
    use tempfile::TempDir;

    fn yes() -> SessionArgs {
        SessionArgs {
            skip_confirmation: true,
        }
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("undo"), ["undo"]);
        assert_eq!(split_words("  rename  dir A 1 1 2\n"), ["rename", "dir", "A", "1", "1", "2"]);
        assert_eq!(
            split_words(r#"rename "/tmp/my photos" A 1 1 2"#),
            ["rename", "/tmp/my photos", "A", "1", "1", "2"]
        );
        assert_eq!(split_words(r#"rename """#), ["rename", ""]);
        assert!(split_words("   ").is_empty());
    }

    #[test]
    fn test_rename_then_undo_in_one_session() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();
        fs::write(temp.path().join("b.txt"), "b").unwrap();

        let mut txn = RenameTransaction::new();
        let line = format!("rename \"{}\" C 12 5 2", temp.path().display());
        assert_eq!(dispatch(&line, &yes(), &mut txn).unwrap(), SessionFlow::Continue);

        assert!(!temp.path().join("a.txt").exists());
        assert_eq!(txn.len(), 2);

        dispatch("undo", &yes(), &mut txn).unwrap();

        assert!(temp.path().join("a.txt").exists());
        assert!(temp.path().join("b.txt").exists());
    }

    #[test]
    fn test_undo_without_rename_reports_empty_journal() {
        let mut txn = RenameTransaction::new();
        let err = dispatch("undo", &yes(), &mut txn).unwrap_err();

        assert!(matches!(err, RenameError::EmptyJournal));
    }

    #[test]
    fn test_exit_and_quit() {
        let mut txn = RenameTransaction::new();
        assert_eq!(dispatch("exit", &yes(), &mut txn).unwrap(), SessionFlow::Exit);
        assert_eq!(dispatch("quit\n", &yes(), &mut txn).unwrap(), SessionFlow::Exit);
    }

    #[test]
    fn test_blank_and_unknown_lines_continue() {
        let mut txn = RenameTransaction::new();
        assert_eq!(dispatch("", &yes(), &mut txn).unwrap(), SessionFlow::Continue);
        assert_eq!(dispatch("frobnicate", &yes(), &mut txn).unwrap(), SessionFlow::Continue);
        assert_eq!(dispatch("status", &yes(), &mut txn).unwrap(), SessionFlow::Continue);
    }
}
