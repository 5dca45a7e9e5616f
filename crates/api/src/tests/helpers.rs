// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use club_roster::Roster;
use club_roster_domain::{
    ContractDetails, ContractedPlayer, FreeAgent, Goalkeeper, Player, PlayerProfile, Position,
};

use crate::{AuthenticatedActor, CredentialStore, Role};

/// Lowest cost bcrypt accepts; keeps hashing fast in tests.
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn create_test_admin() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("admin"), Role::Admin)
}

pub fn create_test_standard_user() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("scout"), Role::StandardUser)
}

pub fn create_test_guest() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("visitor"), Role::Guest)
}

/// A store holding `admin`/`admin123`, `scout`/`scout-pass` and
/// `visitor`/`visitor-pass`.
pub fn create_test_store() -> CredentialStore {
    let mut store: CredentialStore = CredentialStore::new(TEST_BCRYPT_COST);
    store.register("admin", "admin123", Role::Admin).unwrap();
    store
        .register("scout", "scout-pass", Role::StandardUser)
        .unwrap();
    store
        .register("visitor", "visitor-pass", Role::Guest)
        .unwrap();
    store
}

fn create_test_profile(name: &str, age: u32) -> PlayerProfile {
    PlayerProfile::new(name, age, "Portuguese", "Porto", 1.79, 74.0, 2_500_000.0).unwrap()
}

/// A roster with a contracted midfielder (1001), a free agent (1002)
/// expecting 40 000 and a goalkeeper (1003).
pub fn create_test_roster() -> Roster {
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
    roster
}
