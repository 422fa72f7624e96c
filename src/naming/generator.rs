//! Planning of new file names.
//!
//! Pure: takes a directory listing and parameters, returns the ordered plan.
//! Nothing here touches the filesystem.

use super::params::RenameParameters;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// One planned move inside a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRename {
    pub original_path: PathBuf,
    pub new_path: PathBuf,
}

impl PlannedRename {
    /// File name of the target, lossily converted for display.
    pub fn new_file_name(&self) -> String {
        self.new_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Builds the tag for a counter value, e.g. `A-005-01`.
///
/// The counter is padded to the configured width; values that need more
/// digits are printed in full.
pub fn format_prefix(params: &RenameParameters, counter: u32) -> String {
    format!(
        "{}-{:03}-{:0width$}",
        params.letter(),
        params.number(),
        counter,
        width = params.counter_width().digits()
    )
}

/// Plans the renames for `listing`, preserving its order.
///
/// The counter starts at `params.start_counter()` and increases by one per
/// planned file.
pub fn generate(listing: &[PathBuf], params: &RenameParameters) -> Vec<PlannedRename> {
    let mut counter = params.start_counter();
    let mut plan = Vec::with_capacity(listing.len());

    for path in listing {
        let Some(file_name) = path.file_name() else {
            log::warn!("Skipping entry without a file name: {}", path.display());
            continue;
        };

        let mut new_file_name = OsString::from(format_prefix(params, counter));
        new_file_name.push(" ");
        new_file_name.push(file_name);

        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        plan.push(PlannedRename {
            original_path: path.clone(),
            new_path: parent.join(new_file_name),
        });

        counter += 1;
    }

    log::debug!("Planned {} renames", plan.len());
    plan
}
