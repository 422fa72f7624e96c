//! Pre-flight checks performed before executing a rename batch.
//!
//! Unlike `rules`, these checks look at the target directory on disk.
//! Nothing is modified here.

use crate::error::Result;
use crate::naming::RenameParameters;
use crate::steps::rename::RenameArgs;
use crate::verify::rules::validate_directory_path;

/// Validates the directory and parameters of a batch.
///
/// # Checks Performed
///
/// 1. Directory exists and is a directory
/// 2. Letter is `A`–`Z`
/// 3. Number and start counter are within 0-999
/// 4. Counter width is 2 or 3
///
/// # Errors
///
/// Returns the first validation error encountered.
pub fn preflight_checks(args: &RenameArgs) -> Result<RenameParameters> {
    validate_directory_path(&args.directory)?;

    let params = args.parameters()?;
    log::debug!(
        "Parameters: letter={} number={:03} start={} digits={}",
        params.letter(),
        params.number(),
        params.start_counter(),
        params.counter_width().digits()
    );

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenameError;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(directory: PathBuf, letter: &str) -> RenameArgs {
        RenameArgs {
            directory,
            letter: letter.to_string(),
            number: 100,
            start: 1,
            digits: 3,
            dry_run: false,
            skip_confirmation: false,
        }
    }

    #[test]
    fn test_preflight_passes() {
        let temp = TempDir::new().unwrap();
        let params = preflight_checks(&args(temp.path().to_path_buf(), "K")).unwrap();

        assert_eq!(params.letter(), 'K');
        assert_eq!(params.number(), 100);
    }

    #[test]
    fn test_preflight_checks_directory_first() {
        let temp = TempDir::new().unwrap();
        let err = preflight_checks(&args(temp.path().join("nope"), "lower")).unwrap_err();

        assert!(matches!(err, RenameError::InvalidPath(_, _)));
    }

    #[test]
    fn test_preflight_rejects_letter() {
        let temp = TempDir::new().unwrap();
        let err = preflight_checks(&args(temp.path().to_path_buf(), "7")).unwrap_err();

        assert!(matches!(err, RenameError::InvalidParameter(_, _)));
    }
}
