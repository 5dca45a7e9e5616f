// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    CONTRACTED_ID, FREE_AGENT_ID, GOALKEEPER_ID, create_populated_roster, create_test_contracted,
    create_test_goalkeeper, create_test_profile, create_test_roster,
};
use crate::{CoreError, ID_FLOOR, Roster};
use club_roster_domain::{
    DomainError, Goalkeeper, Player, PlayerId, PlayerProfile, PlayerRole,
};

#[test]
fn test_new_roster_validates_name_and_budget() {
    assert!(matches!(
        Roster::new(" ", 10.0),
        Err(CoreError::DomainViolation(DomainError::InvalidClubName(_)))
    ));
    assert!(matches!(
        Roster::new("FC Dynamo", -1.0),
        Err(CoreError::InvalidBudget(_))
    ));
    assert!(Roster::new("FC Dynamo", 0.0).unwrap().is_empty());
}

#[test]
fn test_new_roster_rejects_multi_line_club_name() {
    assert!(matches!(
        Roster::new("FC\nDynamo", 1000.0),
        Err(CoreError::DomainViolation(DomainError::InvalidClubName(_)))
    ));
}

#[test]
fn test_add_player_assigns_ids_above_floor() {
    let mut roster: Roster = create_test_roster();

    let first: PlayerId = roster.add_player(create_test_contracted("Ana Souza")).unwrap();
    let second: PlayerId = roster.add_player(create_test_goalkeeper("Caio Dias")).unwrap();

    assert_eq!(first, PlayerId::new(ID_FLOOR + 1));
    assert_eq!(second, PlayerId::new(ID_FLOOR + 2));
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.get(first).unwrap().name(), "Ana Souza");
}

#[test]
fn test_add_player_keeps_caller_supplied_id() {
    let mut roster: Roster = create_test_roster();
    let mut profile: PlayerProfile = create_test_profile("Dora Melo");
    profile.assign_id(PlayerId::new(2500)).unwrap();
    let player: Player = Player::Goalkeeper(Goalkeeper::new(profile));

    let id: PlayerId = roster.add_player(player).unwrap();
    let next: PlayerId = roster.add_player(create_test_contracted("Ana Souza")).unwrap();

    assert_eq!(id, PlayerId::new(2500));
    assert_eq!(next, PlayerId::new(2501));
}

#[test]
fn test_add_player_rejects_duplicate_id() {
    let mut roster: Roster = create_populated_roster();
    let mut profile: PlayerProfile = create_test_profile("Impostor");
    profile.assign_id(CONTRACTED_ID).unwrap();

    let result: Result<PlayerId, CoreError> =
        roster.add_player(Player::Goalkeeper(Goalkeeper::new(profile)));

    assert_eq!(result, Err(CoreError::DuplicatePlayerId(CONTRACTED_ID)));
    assert_eq!(roster.len(), 3);
}

#[test]
fn test_remove_player() {
    let mut roster: Roster = create_populated_roster();

    let removed: Player = roster.remove_player(FREE_AGENT_ID).unwrap();

    assert_eq!(removed.name(), "Bruno Lima");
    assert_eq!(roster.len(), 2);
    assert!(roster.get(FREE_AGENT_ID).is_none());
}

#[test]
fn test_remove_missing_player_fails() {
    let mut roster: Roster = create_populated_roster();

    let result: Result<Player, CoreError> = roster.remove_player(PlayerId::new(9999));

    assert!(matches!(result, Err(CoreError::PlayerNotFound(_))));
    assert_eq!(roster.len(), 3);
}

#[test]
fn test_ids_are_not_reused_after_removal_of_lower_id() {
    let mut roster: Roster = create_populated_roster();
    roster.remove_player(CONTRACTED_ID).unwrap();

    let id: PlayerId = roster.add_player(create_test_contracted("Eva Rocha")).unwrap();

    assert_eq!(id, PlayerId::new(1004));
}

#[test]
fn test_search_by_name_is_case_insensitive_substring() {
    let roster: Roster = create_populated_roster();

    let hits: Vec<&Player> = roster.search_by_name("LIM");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id(), FREE_AGENT_ID);

    let hits: Vec<&Player> = roster.search_by_name("s");
    let ids: Vec<PlayerId> = hits.iter().map(|player| player.id()).collect();
    assert_eq!(ids, vec![CONTRACTED_ID, GOALKEEPER_ID]);

    assert!(roster.search_by_name("zzz").is_empty());
}

#[test]
fn test_filter_by_status() {
    let mut roster: Roster = create_populated_roster();
    roster
        .get_mut(CONTRACTED_ID)
        .unwrap()
        .profile_mut()
        .report_injury("Knee", 20)
        .unwrap();

    let injured: Vec<&Player> = roster.filter_by_status("injured");
    let free_agents: Vec<&Player> = roster.filter_by_status("FREE AGENT");
    let keepers: Vec<&Player> = roster.filter_by_status("goalkeeper");

    assert_eq!(injured.len(), 1);
    assert_eq!(injured[0].id(), CONTRACTED_ID);
    assert_eq!(free_agents.len(), 1);
    assert_eq!(keepers.len(), 1);
}

#[test]
fn test_sort_by_performance_rating_is_descending_and_stable() {
    let mut roster: Roster = create_test_roster();
    let low: PlayerId = roster.add_player(create_test_contracted("Low")).unwrap();
    let tie_a: PlayerId = roster.add_player(create_test_goalkeeper("Tie A")).unwrap();
    let tie_b: PlayerId = roster.add_player(create_test_goalkeeper("Tie B")).unwrap();
    let high: PlayerId = roster.add_player(create_test_goalkeeper("High")).unwrap();

    for id in [tie_a, tie_b] {
        let keeper = roster.get_mut(id).unwrap().as_goalkeeper_mut().unwrap();
        keeper.update_match_stats(1, 1).unwrap();
    }
    roster
        .get_mut(high)
        .unwrap()
        .as_goalkeeper_mut()
        .unwrap()
        .update_match_stats(0, 4)
        .unwrap();

    roster.sort_by_performance_rating();

    let order: Vec<PlayerId> = roster.players().iter().map(Player::id).collect();
    assert_eq!(order, vec![high, tie_a, tie_b, low]);
}

#[test]
fn test_set_transfer_budget_rejects_negative() {
    let mut roster: Roster = create_test_roster();

    assert!(roster.set_transfer_budget(-5.0).is_err());
    assert!(roster.set_transfer_budget(f64::NAN).is_err());
    roster.set_transfer_budget(250.0).unwrap();

    assert!((roster.transfer_budget() - 250.0).abs() < f64::EPSILON);
}
