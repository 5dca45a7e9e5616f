// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::io::Cursor;
use std::path::Path;

use club_roster::Roster;
use club_roster_api::{CredentialStore, Role};
use club_roster_domain::{
    ContractDetails, ContractedPlayer, FreeAgent, Goalkeeper, Player, PlayerProfile, Position,
};
use club_roster_persistence::FileStore;

use crate::data::{ClubData, Defaults};
use crate::prompt::Prompter;

/// Lowest cost bcrypt accepts; keeps hashing fast in tests.
pub const TEST_BCRYPT_COST: u32 = 4;

pub type ScriptedPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

/// A prompter that answers with `script` and records everything printed.
pub fn create_test_prompter(script: &str) -> ScriptedPrompter {
    Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
}

/// Everything printed so far.
pub fn transcript(prompter: &mut ScriptedPrompter) -> String {
    String::from_utf8(prompter.output().clone()).unwrap()
}

pub fn create_test_defaults() -> Defaults {
    Defaults {
        club_name: String::from("FC Dynamo"),
        transfer_budget: 500_000.0,
        bcrypt_cost: TEST_BCRYPT_COST,
    }
}

fn create_test_profile(name: &str, age: u32) -> PlayerProfile {
    PlayerProfile::new(name, age, "Portuguese", "Porto", 1.79, 74.0, 2_500_000.0).unwrap()
}

/// Users `admin`/`admin123`, `scout`/`scout-pass` (Standard) and
/// `visitor`/`visitor-pass` (Guest); a roster with a contracted
/// midfielder (1001), a free agent expecting 40 000 (1002) and a
/// goalkeeper (1003). Files live under `dir`.
pub fn create_test_data(dir: &Path) -> ClubData {
    let mut users: CredentialStore = CredentialStore::new(TEST_BCRYPT_COST);
    users.register("admin", "admin123", Role::Admin).unwrap();
    users
        .register("scout", "scout-pass", Role::StandardUser)
        .unwrap();
    users
        .register("visitor", "visitor-pass", Role::Guest)
        .unwrap();

    let mut roster: Roster = Roster::new("FC Dynamo", 500_000.0).unwrap();
    let contract: ContractDetails =
        ContractDetails::new("FC Dynamo", 90_000.0, "2028-06-30").unwrap();
    roster
        .add_player(Player::Contracted(ContractedPlayer::new(
            create_test_profile("Rui Costa", 27),
            Position::Midfielder,
            contract,
        )))
        .unwrap();
    roster
        .add_player(Player::FreeAgent(
            FreeAgent::new(
                create_test_profile("Nuno Gomes", 31),
                Position::Forward,
                40_000.0,
                "Harbour City",
            )
            .unwrap(),
        ))
        .unwrap();
    roster
        .add_player(Player::Goalkeeper(Goalkeeper::new(create_test_profile(
            "Vitor Baia",
            33,
        ))))
        .unwrap();

    ClubData {
        files: FileStore::new(dir.join("data")),
        roster,
        users,
    }
}
