//! Command implementations.
//!
//! - `rename`: tag a directory in one shot
//! - `undo`: revert the last batch of a transaction
//! - `session`: run `rename`/`undo` interactively against one transaction

pub mod rename;
pub mod session;
pub mod undo;
