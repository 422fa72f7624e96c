//! Validation rules for rename parameters and directory paths.
//!
//! Pure functions with no side effects, except `validate_directory_path`
//! which has to stat the path.

use crate::error::{RenameError, Result};
use std::path::Path;

/// Largest value accepted for the fixed number and the start counter.
pub const MAX_PARAMETER_VALUE: u32 = 999;

/// Counter widths the tag format supports.
pub const SUPPORTED_COUNTER_WIDTHS: &[u8] = &[2, 3];

/// Validates the tag letter.
///
/// ## Rules
/// - Exactly one character
/// - Uppercase ASCII `A`–`Z`
pub fn validate_letter(letter: &str) -> Result<char> {
    let mut chars = letter.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return Err(RenameError::InvalidParameter(
            "letter".to_string(),
            format!("expected a single character, got '{}'", letter),
        ));
    };

    if !ch.is_ascii_uppercase() {
        return Err(RenameError::InvalidParameter(
            "letter".to_string(),
            format!("'{}' is not an uppercase letter A-Z", ch),
        ));
    }

    Ok(ch)
}

/// Validates a value that must fit in three decimal digits.
///
/// Used for both the fixed number and the start counter.
pub fn validate_three_digit(name: &str, value: u32) -> Result<()> {
    if value > MAX_PARAMETER_VALUE {
        return Err(RenameError::InvalidParameter(
            name.to_string(),
            format!("{} is out of range (0-{})", value, MAX_PARAMETER_VALUE),
        ));
    }

    Ok(())
}

/// Validates the counter digit width.
pub fn validate_counter_width(width: u8) -> Result<()> {
    if !SUPPORTED_COUNTER_WIDTHS.contains(&width) {
        return Err(RenameError::InvalidParameter(
            "digits".to_string(),
            format!("counter width must be 2 or 3, got {}", width),
        ));
    }

    Ok(())
}

/// Validates the target directory.
///
/// ## Rules
/// - Not empty
/// - Exists
/// - Is a directory (symlinks to directories are fine)
pub fn validate_directory_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(RenameError::InvalidPath(
            String::new(),
            "no directory given".to_string(),
        ));
    }

    if !path.exists() {
        return Err(RenameError::InvalidPath(
            path.display().to_string(),
            "does not exist".to_string(),
        ));
    }

    if !path.is_dir() {
        return Err(RenameError::InvalidPath(
            path.display().to_string(),
            "is not a directory".to_string(),
        ));
    }

    Ok(())
}
