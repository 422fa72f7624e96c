//! Shared helpers for integration tests.

use assert_cmd::cargo::cargo_bin_cmd;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a directory holding one file per name; content is the name.
#[allow(unused)]
pub fn create_test_dir(names: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for name in names {
        fs::write(temp.path().join(name), *name).unwrap();
    }
    temp
}

/// Paths of `names` inside `dir`, in the given order.
#[allow(unused)]
pub fn paths_in(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(|name| dir.join(name)).collect()
}

/// Names of all entries in `dir` (files and directories).
#[allow(unused)]
pub fn entry_names(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[allow(unused)]
pub fn names(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Helper to run a rename command
#[allow(unused)]
pub fn run_rename(dir: &Path, params: &[&str], extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("prefix-rename");
    cmd.arg("rename")
        .arg(dir)
        .args(params)
        .args(extra_args)
        .env("NO_COLOR", "1");

    cmd.assert()
}

/// Helper to feed a script into `prefix-rename session --yes`
#[allow(unused)]
pub fn run_session(script: &str) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("prefix-rename");
    cmd.arg("session")
        .arg("--yes")
        .env("NO_COLOR", "1")
        .write_stdin(script.to_string());

    cmd.assert()
}
