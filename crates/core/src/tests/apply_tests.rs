// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    CONTRACTED_ID, FREE_AGENT_ID, GOALKEEPER_ID, assert_close, create_populated_roster,
    create_test_goalkeeper,
};
use crate::{Command, CoreError, ProfileUpdate, Roster, TransitionResult, apply};
use club_roster_domain::{DomainError, Player, PlayerId, PlayerKind, PlayerRole, Position};

#[test]
fn test_apply_returns_new_roster_and_leaves_original_untouched() {
    let roster: Roster = create_populated_roster();
    let command: Command = Command::UpdateMarketValue {
        id: CONTRACTED_ID,
        percentage: 10.0,
    };

    let result: TransitionResult = apply(&roster, command).unwrap();

    assert_close(
        result
            .new_roster
            .get(CONTRACTED_ID)
            .unwrap()
            .profile()
            .market_value(),
        3_300_000.0,
    );
    assert_close(
        roster.get(CONTRACTED_ID).unwrap().profile().market_value(),
        3_000_000.0,
    );
    assert_eq!(result.action, "UpdateMarketValue");
    assert!(result.details.contains("'Ana Souza' (1001)"));
}

#[test]
fn test_failed_command_returns_error_without_side_effects() {
    let roster: Roster = create_populated_roster();
    let before: Roster = roster.clone();

    let result: Result<TransitionResult, CoreError> = apply(
        &roster,
        Command::TransferToClub {
            id: CONTRACTED_ID,
            new_club: String::from("Harbour City"),
            fee: 5_000_000.0,
        },
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::NotListedForTransfer { .. }
        ))
    ));
    assert_eq!(roster, before);
}

#[test]
fn test_add_player_assigns_next_id() {
    let roster: Roster = create_populated_roster();

    let result: TransitionResult = apply(
        &roster,
        Command::AddPlayer {
            player: Box::new(create_test_goalkeeper("Davi Reis")),
        },
    )
    .unwrap();

    assert_eq!(result.new_roster.len(), 4);
    assert_eq!(
        result.new_roster.get(PlayerId::new(1004)).unwrap().name(),
        "Davi Reis"
    );
    assert_eq!(roster.len(), 3);
}

#[test]
fn test_update_profile_validates_input() {
    let roster: Roster = create_populated_roster();

    let renamed: TransitionResult = apply(
        &roster,
        Command::UpdateProfile {
            id: GOALKEEPER_ID,
            update: ProfileUpdate::Name(String::from("Caio Dias Jr")),
        },
    )
    .unwrap();
    assert_eq!(
        renamed.new_roster.get(GOALKEEPER_ID).unwrap().name(),
        "Caio Dias Jr"
    );

    let result: Result<TransitionResult, CoreError> = apply(
        &roster,
        Command::UpdateProfile {
            id: GOALKEEPER_ID,
            update: ProfileUpdate::Age(0),
        },
    );
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidAge { .. }))
    ));
}

#[test]
fn test_keeper_command_on_field_player_is_wrong_variant() {
    let roster: Roster = create_populated_roster();

    let result: Result<TransitionResult, CoreError> = apply(
        &roster,
        Command::RecordGoalkeeperMatch {
            id: CONTRACTED_ID,
            goals_against: 0,
            saves: 3,
        },
    );

    assert!(matches!(
        result,
        Err(CoreError::WrongVariant {
            actual: PlayerKind::Contracted,
            ..
        })
    ));
}

#[test]
fn test_field_command_on_goalkeeper_is_wrong_variant() {
    let roster: Roster = create_populated_roster();

    let result: Result<TransitionResult, CoreError> =
        apply(&roster, Command::RegisterKeyPass { id: GOALKEEPER_ID });

    assert!(matches!(
        result,
        Err(CoreError::WrongVariant {
            actual: PlayerKind::Goalkeeper,
            ..
        })
    ));
}

#[test]
fn test_change_position_keeps_season_stats() {
    let roster: Roster = create_populated_roster();
    let roster: Roster = apply(
        &roster,
        Command::RecordDefensiveStats {
            id: CONTRACTED_ID,
            tackles: 4,
        },
    )
    .unwrap()
    .new_roster;

    let result: TransitionResult = apply(
        &roster,
        Command::ChangePosition {
            id: CONTRACTED_ID,
            position: Position::Defender,
        },
    )
    .unwrap();

    let player: &Player = result.new_roster.get(CONTRACTED_ID).unwrap();
    assert_eq!(player.field_player().unwrap().position(), Position::Defender);
    assert_eq!(player.field_player().unwrap().stats().tackles, 4);
    assert_eq!(result.action, "ChangePosition");
    assert!(result.details.contains("now plays as Defender"));
}

#[test]
fn test_change_position_on_goalkeeper_is_wrong_variant() {
    let roster: Roster = create_populated_roster();

    let result: Result<TransitionResult, CoreError> = apply(
        &roster,
        Command::ChangePosition {
            id: GOALKEEPER_ID,
            position: Position::Forward,
        },
    );

    assert!(matches!(
        result,
        Err(CoreError::WrongVariant {
            actual: PlayerKind::Goalkeeper,
            ..
        })
    ));
}

#[test]
fn test_field_commands_apply_to_free_agents() {
    let roster: Roster = create_populated_roster();

    let result: TransitionResult = apply(
        &roster,
        Command::RecordAttackingStats {
            id: FREE_AGENT_ID,
            goals: 2,
            assists: 1,
            shots: 5,
        },
    )
    .unwrap();

    let agent = result
        .new_roster
        .get(FREE_AGENT_ID)
        .unwrap()
        .as_free_agent()
        .unwrap();
    assert_eq!(agent.field().stats().goals, 2);
    assert_eq!(agent.field().stats().shots, 5);
}

#[test]
fn test_command_on_missing_player_fails() {
    let roster: Roster = create_populated_roster();

    let result: Result<TransitionResult, CoreError> = apply(
        &roster,
        Command::ReturnToFitness {
            id: PlayerId::new(7777),
        },
    );

    assert_eq!(
        result,
        Err(CoreError::PlayerNotFound(PlayerId::new(7777)))
    );
}

#[test]
fn test_negotiate_offer_rejected_then_accepted() {
    let roster: Roster = create_populated_roster();

    let low: Result<TransitionResult, CoreError> = apply(
        &roster,
        Command::NegotiateOffer {
            id: FREE_AGENT_ID,
            offer: 10_000.0,
        },
    );
    assert!(matches!(low, Err(CoreError::OfferRejected { .. })));

    let accepted: TransitionResult = apply(
        &roster,
        Command::NegotiateOffer {
            id: FREE_AGENT_ID,
            offer: 50_000.0,
        },
    )
    .unwrap();
    let agent = accepted
        .new_roster
        .get(FREE_AGENT_ID)
        .unwrap()
        .as_free_agent()
        .unwrap();
    assert!(!agent.is_available_for_negotiation());

    let again: Result<TransitionResult, CoreError> = apply(
        &accepted.new_roster,
        Command::NegotiateOffer {
            id: FREE_AGENT_ID,
            offer: 90_000.0,
        },
    );
    assert!(matches!(
        again,
        Err(CoreError::DomainViolation(
            DomainError::NegotiationClosed { .. }
        ))
    ));
}

#[test]
fn test_sign_free_agent_through_apply() {
    let roster: Roster = create_populated_roster();

    let result: TransitionResult = apply(
        &roster,
        Command::SignFreeAgent {
            id: FREE_AGENT_ID,
            salary_offer: 75_000.0,
            contract_until: String::from("2028-06-30"),
        },
    )
    .unwrap();

    assert_eq!(result.action, "SignFreeAgent");
    assert_eq!(
        result.new_roster.get(FREE_AGENT_ID).unwrap().kind(),
        PlayerKind::Contracted
    );
    assert_close(result.new_roster.transfer_budget(), 925_000.0);
    assert_close(roster.transfer_budget(), 1_000_000.0);
}

#[test]
fn test_reset_all_season_stats() {
    let mut roster: Roster = create_populated_roster();
    roster = apply(
        &roster,
        Command::RecordDefensiveStats {
            id: CONTRACTED_ID,
            tackles: 4,
        },
    )
    .unwrap()
    .new_roster;
    roster = apply(
        &roster,
        Command::RecordGoalkeeperMatch {
            id: GOALKEEPER_ID,
            goals_against: 0,
            saves: 6,
        },
    )
    .unwrap()
    .new_roster;

    let result: TransitionResult = apply(&roster, Command::ResetAllSeasonStats).unwrap();

    let contracted = result
        .new_roster
        .get(CONTRACTED_ID)
        .unwrap()
        .as_contracted()
        .unwrap();
    assert_eq!(contracted.field().stats().tackles, 0);
    let keeper = result
        .new_roster
        .get(GOALKEEPER_ID)
        .unwrap()
        .as_goalkeeper()
        .unwrap();
    assert_eq!(keeper.stats().matches_played, 0);
    assert!(result.details.contains("3 player(s)"));
}

#[test]
fn test_contract_lifecycle_through_commands() {
    let mut roster: Roster = create_populated_roster();
    roster = apply(
        &roster,
        Command::SendOnLoan {
            id: CONTRACTED_ID,
            club: String::from("Lakeside"),
            end_date: String::from("2027-01-31"),
        },
    )
    .unwrap()
    .new_roster;
    assert_eq!(roster.get(CONTRACTED_ID).unwrap().status(), "On Loan");

    roster = apply(
        &roster,
        Command::ListForTransfer {
            id: CONTRACTED_ID,
            fee: 4_000_000.0,
            conditions: String::from("Sell-on clause"),
        },
    )
    .unwrap()
    .new_roster;
    roster = apply(
        &roster,
        Command::TransferToClub {
            id: CONTRACTED_ID,
            new_club: String::from("Harbour City"),
            fee: 4_500_000.0,
        },
    )
    .unwrap()
    .new_roster;

    let player = roster.get(CONTRACTED_ID).unwrap().as_contracted().unwrap();
    assert_eq!(player.contract().club_name(), "Harbour City");
    assert!(!player.is_listed_for_transfer());
    assert!(!player.contract().is_loaned());
    assert_eq!(roster.get(CONTRACTED_ID).unwrap().status(), "Active");
}

#[test]
fn test_set_transfer_budget_rejects_negative() {
    let roster: Roster = create_populated_roster();

    let result: Result<TransitionResult, CoreError> =
        apply(&roster, Command::SetTransferBudget { budget: -1.0 });

    assert!(matches!(result, Err(CoreError::InvalidBudget(_))));
}

#[test]
fn test_celebrate_birthday_reports_new_age() {
    let roster: Roster = create_populated_roster();

    let result: TransitionResult =
        apply(&roster, Command::CelebrateBirthday { id: GOALKEEPER_ID }).unwrap();

    assert_eq!(
        result.new_roster.get(GOALKEEPER_ID).unwrap().profile().age(),
        27
    );
    assert!(result.details.ends_with("turned 27"));
}
