// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Roster;
use club_roster_domain::{
    ContractDetails, ContractedPlayer, FreeAgent, Goalkeeper, Player, PlayerId, PlayerProfile,
    Position,
};

pub fn create_test_profile(name: &str) -> PlayerProfile {
    PlayerProfile::new(name, 26, "Brazilian", "Recife", 1.81, 76.0, 3_000_000.0).unwrap()
}

pub fn create_test_contracted(name: &str) -> Player {
    let contract: ContractDetails =
        ContractDetails::new("FC Dynamo", 80_000.0, "2028-06-30").unwrap();
    Player::Contracted(ContractedPlayer::new(
        create_test_profile(name),
        Position::Midfielder,
        contract,
    ))
}

pub fn create_test_free_agent(name: &str, expected_salary: f64) -> Player {
    Player::FreeAgent(
        FreeAgent::new(
            create_test_profile(name),
            Position::Defender,
            expected_salary,
            "Riverside FC",
        )
        .unwrap(),
    )
}

pub fn create_test_goalkeeper(name: &str) -> Player {
    Player::Goalkeeper(Goalkeeper::new(create_test_profile(name)))
}

pub fn create_test_roster() -> Roster {
    Roster::new("FC Dynamo", 1_000_000.0).unwrap()
}

/// A roster holding a contracted player (1001), a free agent (1002)
/// expecting 50 000, and a goalkeeper (1003).
pub fn create_populated_roster() -> Roster {
    let mut roster: Roster = create_test_roster();
    roster.add_player(create_test_contracted("Ana Souza")).unwrap();
    roster
        .add_player(create_test_free_agent("Bruno Lima", 50_000.0))
        .unwrap();
    roster.add_player(create_test_goalkeeper("Caio Dias")).unwrap();
    roster
}

pub const CONTRACTED_ID: PlayerId = PlayerId::new(1001);
pub const FREE_AGENT_ID: PlayerId = PlayerId::new(1002);
pub const GOALKEEPER_ID: PlayerId = PlayerId::new(1003);

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
