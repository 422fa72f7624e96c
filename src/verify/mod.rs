//! Validation and confirmation for rename operations.

pub mod preflight;
pub mod prompt;
pub mod rules;

pub use preflight::preflight_checks;
pub use prompt::{confirm_operation, confirm_undo};
pub use rules::{validate_counter_width, validate_directory_path, validate_letter};
