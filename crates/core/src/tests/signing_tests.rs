// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    CONTRACTED_ID, FREE_AGENT_ID, GOALKEEPER_ID, assert_close, create_populated_roster,
    create_test_free_agent, create_test_roster,
};
use crate::{CoreError, Roster};
use club_roster_domain::{
    ContractedPlayer, DomainError, Player, PlayerId, PlayerKind, PlayerProfile, PlayerRole,
};

#[test]
fn test_signing_over_budget_fails_and_changes_nothing() {
    let mut roster: Roster = create_populated_roster();
    let before: Roster = roster.clone();

    let result: Result<PlayerId, CoreError> =
        roster.sign_free_agent(FREE_AGENT_ID, 2_000_000.0, "2026-01-01");

    assert!(matches!(
        result,
        Err(CoreError::InsufficientBudget { .. })
    ));
    assert_eq!(roster, before);
    assert!(
        roster
            .get(FREE_AGENT_ID)
            .unwrap()
            .as_free_agent()
            .unwrap()
            .is_available_for_negotiation()
    );
}

#[test]
fn test_signing_debits_exactly_the_offer() {
    let mut roster: Roster = create_populated_roster();

    roster
        .sign_free_agent(FREE_AGENT_ID, 60_000.0, "2027-06-30")
        .unwrap();

    assert_close(roster.transfer_budget(), 940_000.0);
}

#[test]
fn test_signing_replaces_agent_in_place_with_contracted_player() {
    let mut roster: Roster = create_populated_roster();
    let before_profile: PlayerProfile = roster.get(FREE_AGENT_ID).unwrap().profile().clone();

    let id: PlayerId = roster
        .sign_free_agent(FREE_AGENT_ID, 60_000.0, "2027-06-30")
        .unwrap();

    assert_eq!(id, FREE_AGENT_ID);
    assert_eq!(roster.len(), 3);
    let order: Vec<PlayerId> = roster.players().iter().map(Player::id).collect();
    assert_eq!(order, vec![CONTRACTED_ID, FREE_AGENT_ID, GOALKEEPER_ID]);

    let signed: &Player = roster.get(FREE_AGENT_ID).unwrap();
    assert_eq!(signed.kind(), PlayerKind::Contracted);
    assert_eq!(*signed.profile(), before_profile);
    let contracted: &ContractedPlayer = signed.as_contracted().unwrap();
    assert_eq!(contracted.contract().club_name(), "FC Dynamo");
    assert_close(contracted.contract().salary(), 60_000.0);
    assert_eq!(contracted.contract().contract_until(), "2027-06-30");
    assert_eq!(signed.status(), "Active");
}

#[test]
fn test_signing_with_low_offer_is_rejected_without_change() {
    let mut roster: Roster = create_populated_roster();
    let before: Roster = roster.clone();

    let result: Result<PlayerId, CoreError> =
        roster.sign_free_agent(FREE_AGENT_ID, 40_000.0, "2027-06-30");

    assert!(matches!(result, Err(CoreError::OfferRejected { .. })));
    assert_eq!(roster, before);
}

#[test]
fn test_signing_closed_agent_fails() {
    let mut roster: Roster = create_populated_roster();
    roster
        .get_mut(FREE_AGENT_ID)
        .unwrap()
        .as_free_agent_mut()
        .unwrap()
        .set_availability(false)
        .unwrap();

    let result: Result<PlayerId, CoreError> =
        roster.sign_free_agent(FREE_AGENT_ID, 60_000.0, "2027-06-30");

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::NegotiationClosed { .. }))
    ));
    assert_close(roster.transfer_budget(), 1_000_000.0);
}

#[test]
fn test_signing_rejects_bad_contract_date() {
    let mut roster: Roster = create_populated_roster();

    let result: Result<PlayerId, CoreError> =
        roster.sign_free_agent(FREE_AGENT_ID, 60_000.0, "next summer");

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidDate { .. }))
    ));
    assert_eq!(
        roster.get(FREE_AGENT_ID).unwrap().kind(),
        PlayerKind::FreeAgent
    );
}

#[test]
fn test_signing_non_free_agent_fails() {
    let mut roster: Roster = create_populated_roster();

    let result: Result<PlayerId, CoreError> =
        roster.sign_free_agent(GOALKEEPER_ID, 60_000.0, "2027-06-30");

    assert!(matches!(
        result,
        Err(CoreError::WrongVariant {
            actual: PlayerKind::Goalkeeper,
            ..
        })
    ));
}

#[test]
fn test_signing_missing_player_fails() {
    let mut roster: Roster = create_test_roster();

    let result: Result<PlayerId, CoreError> =
        roster.sign_free_agent(PlayerId::new(4242), 10.0, "2027-06-30");

    assert_eq!(result, Err(CoreError::PlayerNotFound(PlayerId::new(4242))));
}

#[test]
fn test_offer_equal_to_budget_is_allowed() {
    let mut roster: Roster = Roster::new("FC Dynamo", 50_000.0).unwrap();
    let id: PlayerId = roster
        .add_player(create_test_free_agent("Gil Nunes", 50_000.0))
        .unwrap();

    roster.sign_free_agent(id, 50_000.0, "2027-06-30").unwrap();

    assert!(roster.transfer_budget().abs() < f64::EPSILON);
}
