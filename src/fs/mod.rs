//! File system operations with transaction support.
//!
//! Provides batch renames that are applied as a unit, rolled back on
//! failure, and undoable afterwards.

pub mod backend;
pub mod transaction;

pub use backend::{FileSystem, StdFileSystem};
pub use transaction::{AppliedRename, RenameTransaction, TransactionState};
