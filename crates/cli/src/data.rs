// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use club_roster::{LoadReport, Roster};
use club_roster_api::CredentialStore;
use club_roster_persistence::{FileStore, PLAYERS_FILE_NAME, USERS_FILE_NAME};
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use tracing::{info, warn};

/// Values used when the data files do not say otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Defaults {
    /// Club name for a fresh roster.
    pub club_name: String,
    /// Transfer budget for a fresh roster.
    pub transfer_budget: f64,
    /// Work factor for new password hashes.
    pub bcrypt_cost: u32,
}

/// What happened while loading the data files.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadSummary {
    /// User records that could not be used.
    pub skipped_users: usize,
    /// True when the default admin account had to be created or promoted.
    pub default_admin_created: bool,
    /// The roster load outcome.
    pub roster: LoadReport,
}

/// Everything the menu works on, plus where it lives on disk.
#[derive(Debug)]
pub struct ClubData {
    pub files: FileStore,
    pub roster: Roster,
    pub users: CredentialStore,
}

impl ClubData {
    /// Loads users and players from `files`.
    ///
    /// Missing files start empty. Unreadable records are skipped and
    /// counted in the returned summary. An admin account always exists
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read, the defaults
    /// are invalid, or the default admin cannot be created.
    pub fn load(files: FileStore, defaults: &Defaults) -> Result<(Self, LoadSummary)> {
        let mut summary: LoadSummary = LoadSummary::default();

        let mut users: CredentialStore = CredentialStore::new(defaults.bcrypt_cost);
        let user_lines: Vec<String> = files
            .load_lines(USERS_FILE_NAME)
            .wrap_err("Unable to load users")?;
        summary.skipped_users = users.load_records(&user_lines);
        summary.default_admin_created = users
            .ensure_default_admin()
            .wrap_err("Unable to create the default admin")?;
        info!(
            users = users.len(),
            skipped = summary.skipped_users,
            "Users loaded"
        );

        let mut roster: Roster = Roster::new(&defaults.club_name, defaults.transfer_budget)
            .wrap_err("Invalid club defaults")?;
        let player_lines: Vec<String> = files
            .load_lines(PLAYERS_FILE_NAME)
            .wrap_err("Unable to load players")?;
        if !player_lines.is_empty() {
            summary.roster = roster.load_records(&player_lines);
        }
        if !summary.roster.is_clean() {
            warn!(
                skipped = summary.roster.skipped,
                "Some roster lines were not loaded"
            );
        }
        info!(
            club = roster.club_name(),
            players = roster.len(),
            "Roster loaded"
        );

        Ok((
            Self {
                files,
                roster,
                users,
            },
            summary,
        ))
    }

    /// Writes users and players back to their files.
    ///
    /// # Errors
    ///
    /// Returns an error if a record cannot be encoded or a file cannot be
    /// written.
    pub fn save(&self) -> Result<()> {
        self.files
            .save_text(USERS_FILE_NAME, &self.users.serialize())
            .wrap_err("Unable to save users")?;
        let roster_text: String = self
            .roster
            .serialize()
            .wrap_err("Unable to encode the roster")?;
        self.files
            .save_text(PLAYERS_FILE_NAME, &roster_text)
            .wrap_err("Unable to save players")?;
        info!(
            users = self.users.len(),
            players = self.roster.len(),
            "Data saved"
        );
        Ok(())
    }
}
