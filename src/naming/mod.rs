//! Sequential tag naming.
//!
//! Turns a directory listing plus [`RenameParameters`] into an ordered plan
//! of `original → "X-YYY-ZZ original"` moves.

pub mod generator;
pub mod params;

pub use generator::{PlannedRename, format_prefix, generate};
pub use params::{CounterWidth, RenameParameters};
