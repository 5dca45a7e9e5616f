// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fs;
use std::path::PathBuf;

use tempfile::{TempDir, tempdir};

use crate::{FileStore, PLAYERS_FILE_NAME, PersistenceError, USERS_FILE_NAME};

fn create_test_store() -> (TempDir, FileStore) {
    let dir: TempDir = tempdir().expect("temp dir");
    let store: FileStore = FileStore::new(dir.path().join("data"));
    (dir, store)
}

#[test]
fn test_missing_file_loads_as_empty() {
    let (_dir, store) = create_test_store();
    let lines: Vec<String> = store.load_lines(PLAYERS_FILE_NAME).unwrap();
    assert!(lines.is_empty());
    assert!(!store.exists(PLAYERS_FILE_NAME).unwrap());
}

#[test]
fn test_save_creates_data_directory() {
    let (_dir, store) = create_test_store();
    assert!(!store.data_dir().exists());

    store.save_text(USERS_FILE_NAME, "admin:hash:0\n").unwrap();

    assert!(store.data_dir().is_dir());
    assert!(store.exists(USERS_FILE_NAME).unwrap());
}

#[test]
fn test_save_then_load_returns_lines_in_order() {
    let (_dir, store) = create_test_store();
    store
        .save_lines(PLAYERS_FILE_NAME, ["FC Dynamo,1000", "CP,1", "GK,2"])
        .unwrap();

    let lines: Vec<String> = store.load_lines(PLAYERS_FILE_NAME).unwrap();
    assert_eq!(lines, vec!["FC Dynamo,1000", "CP,1", "GK,2"]);
}

#[test]
fn test_load_skips_blank_lines() {
    let (_dir, store) = create_test_store();
    store
        .save_text(USERS_FILE_NAME, "first\n\n   \nsecond\n")
        .unwrap();

    let lines: Vec<String> = store.load_lines(USERS_FILE_NAME).unwrap();
    assert_eq!(lines, vec!["first", "second"]);
}

#[test]
fn test_load_handles_crlf_line_endings() {
    let (_dir, store) = create_test_store();
    store.save_text(USERS_FILE_NAME, "first\r\nsecond\r\n").unwrap();

    let lines: Vec<String> = store.load_lines(USERS_FILE_NAME).unwrap();
    assert_eq!(lines, vec!["first", "second"]);
}

#[test]
fn test_save_replaces_previous_contents() {
    let (_dir, store) = create_test_store();
    store.save_lines(USERS_FILE_NAME, ["old-1", "old-2"]).unwrap();
    store.save_lines(USERS_FILE_NAME, ["new"]).unwrap();

    let lines: Vec<String> = store.load_lines(USERS_FILE_NAME).unwrap();
    assert_eq!(lines, vec!["new"]);
}

#[test]
fn test_save_leaves_no_temporary_files() {
    let (_dir, store) = create_test_store();
    store.save_text(USERS_FILE_NAME, "a\n").unwrap();
    store.save_text(PLAYERS_FILE_NAME, "b\n").unwrap();

    let mut names: Vec<String> = fs::read_dir(store.data_dir())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec![PLAYERS_FILE_NAME, USERS_FILE_NAME]);
}

#[test]
fn test_delete_reports_whether_file_existed() {
    let (_dir, store) = create_test_store();
    assert!(!store.delete(USERS_FILE_NAME).unwrap());

    store.save_text(USERS_FILE_NAME, "a\n").unwrap();
    assert!(store.delete(USERS_FILE_NAME).unwrap());
    assert!(!store.exists(USERS_FILE_NAME).unwrap());
}

#[test]
fn test_path_of_rejects_names_outside_data_directory() {
    let (_dir, store) = create_test_store();
    for name in ["", ".", "..", "../users.txt", "nested/users.txt", "a\\b"] {
        let result: Result<PathBuf, PersistenceError> = store.path_of(name);
        assert!(
            matches!(result, Err(PersistenceError::InvalidFileName(_))),
            "expected rejection of {name:?}"
        );
    }
}

#[test]
fn test_load_reports_unreadable_path() {
    let (_dir, store) = create_test_store();
    let as_dir: PathBuf = store.path_of(USERS_FILE_NAME).unwrap();
    fs::create_dir_all(&as_dir).unwrap();

    let err: PersistenceError = store.load_lines(USERS_FILE_NAME).unwrap_err();
    assert!(matches!(err, PersistenceError::Io { .. }));
    assert!(err.to_string().contains(USERS_FILE_NAME));
}
