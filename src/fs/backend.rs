//! File system capabilities used by the rename transaction.
//!
//! The transaction never calls `std::fs` directly; it goes through
//! [`FileSystem`] so tests can inject failures at any step.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Listing, moving and existence checks.
pub trait FileSystem {
    /// Lists regular files directly inside `dir`.
    ///
    /// Non-recursive. Returns absolute paths in the platform's native
    /// listing order; implementations must not re-sort, the counter
    /// sequence depends on this order.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// Moves `from` to `to`.
    ///
    /// Never replaces an existing entry at `to`; that fails with
    /// `io::ErrorKind::AlreadyExists`. Either the file ends up at `to`, or an
    /// error is returned and the file remains at `from`.
    fn move_path(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Returns true if any entry (including a dangling symlink) occupies `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let dir = dir.canonicalize().map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Failed to resolve {}: {}", dir.display(), e),
            )
        })?;

        let mut files = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = dir.join(entry.file_name());

            // Follows symlinks, so a link to a regular file counts as a file.
            match fs::metadata(&path) {
                Ok(metadata) if metadata.is_file() => files.push(path),
                Ok(_) => log::debug!("Skipping non-file: {}", path.display()),
                Err(e) => log::debug!("Skipping unreadable entry {}: {}", path.display(), e),
            }
        }

        log::debug!("Listed {} files in {}", files.len(), dir.display());
        Ok(files)
    }

    fn move_path(&self, from: &Path, to: &Path) -> io::Result<()> {
        // fs::rename silently replaces the destination on Unix.
        if self.exists(to) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", to.display()),
            ));
        }
        fs::rename(from, to)
    }

    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }
}
