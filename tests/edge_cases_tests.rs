//! Edge cases around file names and directory contents

mod common;

use common::*;

use prefix_rename::fs::{FileSystem, RenameTransaction, StdFileSystem};
use prefix_rename::naming::{RenameParameters, generate};
use std::fs;

#[test]
fn test_hidden_and_extensionless_files() {
    let temp = create_test_dir(&[".env", "Makefile"]);
    let listing = paths_in(temp.path(), &[".env", "Makefile"]);
    let params = RenameParameters::parse("H", 1, 1, 2).unwrap();

    let mut txn = RenameTransaction::new();
    txn.apply(&generate(&listing, &params)).unwrap();

    assert_eq!(
        entry_names(temp.path()),
        names(&["H-001-01 .env", "H-001-02 Makefile"])
    );
}

#[test]
fn test_unicode_file_names() {
    let temp = create_test_dir(&["résumé.pdf", "日本.txt"]);
    let listing = paths_in(temp.path(), &["résumé.pdf", "日本.txt"]);
    let params = RenameParameters::parse("U", 7, 10, 3).unwrap();

    let mut txn = RenameTransaction::new();
    txn.apply(&generate(&listing, &params)).unwrap();

    assert_eq!(
        entry_names(temp.path()),
        names(&["U-007-010 résumé.pdf", "U-007-011 日本.txt"])
    );

    txn.undo_last().unwrap();
    assert_eq!(entry_names(temp.path()), names(&["résumé.pdf", "日本.txt"]));
}

#[test]
fn test_already_tagged_files_get_tagged_again() {
    let temp = create_test_dir(&["A-005-01 a.txt"]);
    let listing = StdFileSystem.list_files(temp.path()).unwrap();
    let params = RenameParameters::parse("A", 5, 1, 2).unwrap();

    // The target differs from the source, so there is no collision.
    let mut txn = RenameTransaction::new();
    txn.apply(&generate(&listing, &params)).unwrap();

    assert_eq!(entry_names(temp.path()), names(&["A-005-01 A-005-01 a.txt"]));
}

#[test]
fn test_second_batch_in_same_directory() {
    let temp = create_test_dir(&["a.txt"]);
    let params = RenameParameters::parse("A", 5, 1, 2).unwrap();

    let mut txn = RenameTransaction::new();
    let listing = StdFileSystem.list_files(temp.path()).unwrap();
    txn.apply(&generate(&listing, &params)).unwrap();

    let listing = StdFileSystem.list_files(temp.path()).unwrap();
    txn.apply(&generate(&listing, &params)).unwrap();
    assert_eq!(entry_names(temp.path()), names(&["A-005-01 A-005-01 a.txt"]));

    // Undo reverts only the second batch.
    txn.undo_last().unwrap();
    assert_eq!(entry_names(temp.path()), names(&["A-005-01 a.txt"]));
}

#[test]
fn test_file_removed_between_listing_and_apply() {
    let temp = create_test_dir(&["a.txt", "b.txt"]);
    let listing = paths_in(temp.path(), &["a.txt", "b.txt"]);
    let params = RenameParameters::parse("A", 5, 1, 2).unwrap();
    let plan = generate(&listing, &params);

    fs::remove_file(temp.path().join("b.txt")).unwrap();

    let mut txn = RenameTransaction::new();
    let err = txn.apply(&plan).unwrap_err();

    assert_eq!(err.kind(), "io");
    assert_eq!(entry_names(temp.path()), names(&["a.txt"]));
}

#[cfg(unix)]
#[test]
fn test_symlinked_file_is_listed() {
    let temp = create_test_dir(&["target.txt"]);
    std::os::unix::fs::symlink(temp.path().join("target.txt"), temp.path().join("link.txt"))
        .unwrap();

    let listing = StdFileSystem.list_files(temp.path()).unwrap();

    assert_eq!(listing.len(), 2);
}
