use crate::steps::rename::RenameArgs;
use crate::steps::session::SessionArgs;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "prefix-rename", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Prefix every file in a directory with a sequential tag (X-YYY-ZZ).
    ///
    /// A one-shot rename cannot be undone later. To keep `undo` available,
    /// run the rename inside `prefix-rename session`.
    Rename(RenameArgs),

    /// Read rename/undo commands from stdin; undo reverts the last rename of the session.
    Session(SessionArgs),
}
