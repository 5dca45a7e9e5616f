// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ContractDetails, ContractedPlayer, FreeAgent, Goalkeeper, PlayerProfile, Position,
};
use time::{Date, Month};

pub fn create_test_profile() -> PlayerProfile {
    PlayerProfile::new("Lena Vogt", 24, "German", "Hamburg", 1.78, 72.5, 2_000_000.0).unwrap()
}

pub fn create_test_profile_aged(age: u32) -> PlayerProfile {
    PlayerProfile::new("Marco Reyes", age, "Spanish", "Sevilla", 1.83, 79.0, 2_000_000.0).unwrap()
}

pub fn create_test_contract() -> ContractDetails {
    ContractDetails::new("FC Dynamo", 100_000.0, "2028-06-30").unwrap()
}

pub fn create_test_contracted_player() -> ContractedPlayer {
    ContractedPlayer::new(
        create_test_profile(),
        Position::Midfielder,
        create_test_contract(),
    )
}

pub fn create_test_free_agent(expected_salary: f64) -> FreeAgent {
    FreeAgent::new(
        create_test_profile(),
        Position::Forward,
        expected_salary,
        "Old Town United",
    )
    .unwrap()
}

pub fn create_test_goalkeeper() -> Goalkeeper {
    let profile: PlayerProfile =
        PlayerProfile::new("Ivo Hart", 29, "Dutch", "Utrecht", 1.92, 88.0, 1_000_000.0).unwrap();
    Goalkeeper::new(profile)
}

pub fn create_test_date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
