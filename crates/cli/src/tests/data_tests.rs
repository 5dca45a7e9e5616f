// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use club_roster_api::{DEFAULT_ADMIN_USERNAME, Role};
use club_roster_domain::PlayerId;
use club_roster_persistence::{FileStore, PLAYERS_FILE_NAME, USERS_FILE_NAME};
use tempfile::{TempDir, tempdir};

use crate::data::{ClubData, Defaults, LoadSummary};

use super::helpers::{create_test_data, create_test_defaults};

#[test]
fn test_load_from_empty_directory_uses_defaults() {
    let dir: TempDir = tempdir().unwrap();
    let defaults: Defaults = create_test_defaults();

    let (data, summary) = ClubData::load(FileStore::new(dir.path()), &defaults).unwrap();

    assert!(summary.default_admin_created);
    assert_eq!(summary.skipped_users, 0);
    assert_eq!(summary.roster.loaded, 0);
    assert_eq!(data.roster.club_name(), "FC Dynamo");
    assert!(data.roster.is_empty());
    assert_eq!(
        data.users.find(DEFAULT_ADMIN_USERNAME).unwrap().role(),
        Role::Admin
    );
}

#[test]
fn test_save_then_load_restores_users_and_players() {
    let dir: TempDir = tempdir().unwrap();
    let original: ClubData = create_test_data(dir.path());
    original.save().unwrap();

    let (loaded, summary) =
        ClubData::load(original.files.clone(), &create_test_defaults()).unwrap();

    assert!(!summary.default_admin_created);
    assert!(summary.roster.is_clean());
    assert_eq!(summary.roster.loaded, 3);
    assert_eq!(loaded.roster, original.roster);
    // Guests are not persisted across a reload.
    assert_eq!(summary.skipped_users, 1);
    assert!(loaded.users.find("visitor").is_none());
    assert!(loaded.users.authenticate("scout", "scout-pass").is_ok());
}

#[test]
fn test_saved_header_overrides_defaults() {
    let dir: TempDir = tempdir().unwrap();
    let files: FileStore = FileStore::new(dir.path());
    files
        .save_text(PLAYERS_FILE_NAME, "Harbour City,1250.5\n")
        .unwrap();

    let (data, _) = ClubData::load(files, &create_test_defaults()).unwrap();

    assert_eq!(data.roster.club_name(), "Harbour City");
    assert!((data.roster.transfer_budget() - 1250.5).abs() < f64::EPSILON);
}

#[test]
fn test_malformed_lines_are_reported_and_skipped() {
    let dir: TempDir = tempdir().unwrap();
    let original: ClubData = create_test_data(dir.path());
    let mut text: String = original.roster.serialize().unwrap();
    text.push_str("XX\tnot a player\n");
    original.files.save_text(PLAYERS_FILE_NAME, &text).unwrap();
    original
        .files
        .save_text(USERS_FILE_NAME, "admin\nbroken:record\n")
        .unwrap();

    let (data, summary): (ClubData, LoadSummary) =
        ClubData::load(original.files.clone(), &create_test_defaults()).unwrap();

    assert_eq!(summary.roster.loaded, 3);
    assert_eq!(summary.roster.skipped, 1);
    assert_eq!(summary.roster.failures[0].line, 5);
    assert_eq!(summary.skipped_users, 2);
    assert!(summary.default_admin_created);
    assert!(data.roster.get(PlayerId::new(1003)).is_some());
}
