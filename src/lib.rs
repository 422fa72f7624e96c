#![doc = include_str!("../README.md")]

pub mod cli;
pub mod error;
pub mod fs;
pub mod naming;
pub mod steps;
pub mod verify;

pub use error::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    use clap::Parser;
    use cli::Command;

    let cli = cli::Cli::parse();
    match cli.command {
        Command::Rename(args) => {
            let mut txn = fs::RenameTransaction::new();
            steps::rename::execute(&args, &mut txn)
        }
        Command::Session(args) => steps::session::execute(&args),
    }
}
