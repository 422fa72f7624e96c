//! Error types for prefix-rename.
//!
//! All operations return `Result<T>` which aliases `Result<T, RenameError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from rename operations.
#[derive(Debug, Error)]
pub enum RenameError {
    /// A planned target name is already taken in the directory.
    #[error("File '{file_name}' already exists: {}", path.display())]
    Collision { file_name: String, path: PathBuf },

    /// Moving a single file failed.
    #[error("Failed to move {} → {}: {source}", from.display(), to.display())]
    MoveFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Undo requested but no batch is recorded.
    ///
    /// Informational—lets the caller tell "nothing happened" apart from a
    /// successful undo.
    #[error("Nothing to undo")]
    EmptyJournal,

    /// Invalid rename parameter.
    #[error("Invalid {0}: {1}")]
    InvalidParameter(String, String),

    /// Invalid directory path.
    #[error("Invalid path '{0}': {1}")]
    InvalidPath(String, String),

    /// User declined confirmation.
    ///
    /// Not a failure—used for control flow when user cancels.
    #[error("Operation cancelled by user")]
    Cancelled,

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RenameError {
    /// Short, stable name of the error kind, printed by the CLI.
    pub fn kind(&self) -> &'static str {
        match self {
            RenameError::Collision { .. } => "collision",
            RenameError::MoveFailed { .. } | RenameError::Io(_) => "io",
            RenameError::EmptyJournal => "empty-journal",
            RenameError::InvalidParameter(..) => "invalid-parameter",
            RenameError::InvalidPath(..) => "invalid-path",
            RenameError::Cancelled => "cancelled",
        }
    }
}

/// Result type alias for prefix-rename operations.
pub type Result<T> = std::result::Result<T, RenameError>;
