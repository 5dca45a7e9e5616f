// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, ProfileUpdate};
use crate::error::CoreError;
use crate::roster::Roster;
use crate::state::TransitionResult;
use club_roster_domain::{
    ContractedPlayer, DomainError, FieldPlayer, FreeAgent, Goalkeeper, Player, PlayerId,
    PlayerKind, PlayerProfile, PlayerRole,
};
use tracing::{debug, info};

/// Applies a command to the current roster, producing a new roster.
///
/// The command runs against a copy, so a failure leaves `roster`
/// untouched and no partial change is observable.
///
/// # Arguments
///
/// * `roster` - The current roster (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new roster and a description
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The addressed player does not exist or is the wrong kind of player
/// - The command violates a domain rule
/// - A signing exceeds the transfer budget or is rejected
pub fn apply(roster: &Roster, command: Command) -> Result<TransitionResult, CoreError> {
    let action: &'static str = command.name();
    let mut new_roster: Roster = roster.clone();

    let details: String = execute(&mut new_roster, command).inspect_err(|err| {
        debug!(action, error = %err, "Command rejected");
    })?;

    info!(action, %details, "Command applied");
    Ok(TransitionResult {
        new_roster,
        action,
        details,
    })
}

#[allow(clippy::too_many_lines)]
fn execute(roster: &mut Roster, command: Command) -> Result<String, CoreError> {
    match command {
        Command::AddPlayer { player } => {
            let kind: PlayerKind = player.kind();
            let id: PlayerId = roster.add_player(*player)?;
            Ok(format!("Added {} {}", kind.label().to_lowercase(), describe(roster, id)))
        }
        Command::RemovePlayer { id } => {
            let removed: Player = roster.remove_player(id)?;
            Ok(format!("Removed '{}' ({id})", removed.name()))
        }
        Command::UpdateProfile { id, update } => {
            let profile: &mut PlayerProfile = player_mut(roster, id)?.profile_mut();
            match update {
                ProfileUpdate::Name(name) => profile.set_name(&name)?,
                ProfileUpdate::Age(age) => profile.set_age(age)?,
                ProfileUpdate::Nationality(nationality) => profile.set_nationality(&nationality)?,
                ProfileUpdate::Origin(origin) => profile.set_origin(&origin)?,
                ProfileUpdate::Height(height) => profile.set_height(height)?,
                ProfileUpdate::Weight(weight) => profile.set_weight(weight)?,
                ProfileUpdate::MarketValue(value) => profile.set_market_value(value)?,
            }
            Ok(format!("Updated profile of {}", describe(roster, id)))
        }
        Command::ReportInjury {
            id,
            injury_type,
            recovery_days,
        } => {
            player_mut(roster, id)?
                .profile_mut()
                .report_injury(&injury_type, recovery_days)?;
            Ok(format!(
                "{} injured: {injury_type} ({recovery_days} days)",
                describe(roster, id)
            ))
        }
        Command::ReturnToFitness { id } => {
            player_mut(roster, id)?.profile_mut().return_to_fitness();
            Ok(format!("{} returned to fitness", describe(roster, id)))
        }
        Command::UpdateMarketValue { id, percentage } => {
            let profile: &mut PlayerProfile = player_mut(roster, id)?.profile_mut();
            profile.update_market_value(percentage)?;
            let value: f64 = profile.market_value();
            Ok(format!(
                "Market value of {} changed by {percentage}% to {value:.2}",
                describe(roster, id)
            ))
        }
        Command::RecordAttackingStats {
            id,
            goals,
            assists,
            shots,
        } => {
            field_player_mut(roster, id)?.update_attacking_stats(goals, assists, shots)?;
            Ok(format!(
                "{}: +{goals} goals, +{assists} assists, +{shots} shots",
                describe(roster, id)
            ))
        }
        Command::RecordDefensiveStats { id, tackles } => {
            field_player_mut(roster, id)?.update_defensive_stats(tackles)?;
            Ok(format!("{}: +{tackles} tackles", describe(roster, id)))
        }
        Command::ChangePosition { id, position } => {
            field_player_mut(roster, id)?.set_position(position);
            Ok(format!("{}: now plays as {position}", describe(roster, id)))
        }
        Command::RegisterKeyPass { id } => {
            field_player_mut(roster, id)?.register_key_pass();
            Ok(format!("{}: key pass registered", describe(roster, id)))
        }
        Command::RegisterMatchPlayed { id } => {
            field_player_mut(roster, id)?.register_match_played();
            Ok(format!("{}: match registered", describe(roster, id)))
        }
        Command::RecordGoalkeeperMatch {
            id,
            goals_against,
            saves,
        } => {
            goalkeeper_mut(roster, id)?.update_match_stats(goals_against, saves)?;
            Ok(format!(
                "{}: match with {goals_against} conceded and {saves} saves",
                describe(roster, id)
            ))
        }
        Command::RegisterCleanSheet { id } => {
            goalkeeper_mut(roster, id)?.register_clean_sheet();
            Ok(format!("{}: clean sheet registered", describe(roster, id)))
        }
        Command::RegisterPenaltySave { id } => {
            goalkeeper_mut(roster, id)?.register_penalty_save();
            Ok(format!("{}: penalty save registered", describe(roster, id)))
        }
        Command::ListForTransfer {
            id,
            fee,
            conditions,
        } => {
            contracted_mut(roster, id)?.list_for_transfer(fee, &conditions)?;
            Ok(format!(
                "{} listed for transfer at {fee:.2}",
                describe(roster, id)
            ))
        }
        Command::RemoveFromTransferList { id } => {
            contracted_mut(roster, id)?.remove_from_transfer_list();
            Ok(format!("{} removed from transfer list", describe(roster, id)))
        }
        Command::TransferToClub { id, new_club, fee } => {
            contracted_mut(roster, id)?.transfer_to_club(&new_club, fee)?;
            Ok(format!(
                "{} transferred to {new_club} for {fee:.2}",
                describe(roster, id)
            ))
        }
        Command::ExtendContract {
            id,
            new_date,
            new_salary,
        } => {
            contracted_mut(roster, id)?.extend_contract(&new_date, new_salary)?;
            Ok(format!(
                "{} extended until {new_date} at {new_salary:.2}",
                describe(roster, id)
            ))
        }
        Command::TerminateContract { id, reason } => {
            contracted_mut(roster, id)?.terminate_contract(&reason);
            Ok(format!(
                "Contract of {} terminated: {reason}",
                describe(roster, id)
            ))
        }
        Command::SendOnLoan { id, club, end_date } => {
            contracted_mut(roster, id)?.send_on_loan(&club, &end_date)?;
            Ok(format!(
                "{} loaned to {club} until {end_date}",
                describe(roster, id)
            ))
        }
        Command::ReturnFromLoan { id } => {
            contracted_mut(roster, id)?.return_from_loan();
            Ok(format!("{} returned from loan", describe(roster, id)))
        }
        Command::NegotiateOffer { id, offer } => {
            let agent: &mut FreeAgent = free_agent_mut(roster, id)?;
            if !agent.is_available_for_negotiation() {
                return Err(DomainError::NegotiationClosed {
                    player: agent.profile().name().to_string(),
                }
                .into());
            }
            if !agent.negotiate_offer(offer) {
                return Err(CoreError::OfferRejected {
                    id,
                    offer,
                    expected: agent.expected_salary(),
                });
            }
            Ok(format!("{} accepted an offer of {offer:.2}", describe(roster, id)))
        }
        Command::IncreaseExpectations { id, percentage } => {
            let agent: &mut FreeAgent = free_agent_mut(roster, id)?;
            agent.increase_expectations(percentage)?;
            let expected: f64 = agent.expected_salary();
            Ok(format!(
                "{} now expects {expected:.2}",
                describe(roster, id)
            ))
        }
        Command::DecreaseExpectations { id, percentage } => {
            let agent: &mut FreeAgent = free_agent_mut(roster, id)?;
            agent.decrease_expectations(percentage);
            let expected: f64 = agent.expected_salary();
            Ok(format!(
                "{} now expects {expected:.2}",
                describe(roster, id)
            ))
        }
        Command::SetAvailability { id, available } => {
            free_agent_mut(roster, id)?.set_availability(available)?;
            let state: &str = if available { "open" } else { "closed" };
            Ok(format!("Negotiations with {} {state}", describe(roster, id)))
        }
        Command::AdvanceMonth { id } => {
            let agent: &mut FreeAgent = free_agent_mut(roster, id)?;
            agent.advance_month();
            let months: u32 = agent.months_without_club();
            Ok(format!(
                "{} has been without a club for {months} month(s)",
                describe(roster, id)
            ))
        }
        Command::SignFreeAgent {
            id,
            salary_offer,
            contract_until,
        } => {
            roster.sign_free_agent(id, salary_offer, &contract_until)?;
            Ok(format!(
                "Signed {} at {salary_offer:.2} until {contract_until}",
                describe(roster, id)
            ))
        }
        Command::CelebrateBirthday { id } => {
            let player: &mut Player = player_mut(roster, id)?;
            player.celebrate_birthday();
            let age: u32 = player.profile().age();
            Ok(format!("{} turned {age}", describe(roster, id)))
        }
        Command::ResetSeasonStats { id } => {
            player_mut(roster, id)?.reset_season_stats();
            Ok(format!("Season statistics of {} reset", describe(roster, id)))
        }
        Command::ResetAllSeasonStats => {
            let ids: Vec<PlayerId> = roster.players().iter().map(Player::id).collect();
            for id in &ids {
                player_mut(roster, *id)?.reset_season_stats();
            }
            Ok(format!("Season statistics reset for {} player(s)", ids.len()))
        }
        Command::SortByPerformanceRating => {
            roster.sort_by_performance_rating();
            Ok(String::from("Roster sorted by performance rating"))
        }
        Command::SetTransferBudget { budget } => {
            roster.set_transfer_budget(budget)?;
            Ok(format!("Transfer budget set to {budget:.2}"))
        }
    }
}

fn describe(roster: &Roster, id: PlayerId) -> String {
    roster.get(id).map_or_else(
        || format!("player {id}"),
        |player| format!("'{}' ({id})", player.name()),
    )
}

fn wrong_variant(id: PlayerId, expected: &'static str, player: &Player) -> CoreError {
    CoreError::WrongVariant {
        id,
        expected,
        actual: player.kind(),
    }
}

fn player_mut(roster: &mut Roster, id: PlayerId) -> Result<&mut Player, CoreError> {
    roster.get_mut(id).ok_or(CoreError::PlayerNotFound(id))
}

fn field_player_mut(roster: &mut Roster, id: PlayerId) -> Result<&mut FieldPlayer, CoreError> {
    match player_mut(roster, id)? {
        Player::Contracted(player) => Ok(player.field_mut()),
        Player::FreeAgent(agent) => Ok(agent.field_mut()),
        other @ Player::Goalkeeper(_) => Err(wrong_variant(id, "Field player", other)),
    }
}

fn goalkeeper_mut(roster: &mut Roster, id: PlayerId) -> Result<&mut Goalkeeper, CoreError> {
    match player_mut(roster, id)? {
        Player::Goalkeeper(keeper) => Ok(keeper),
        other => Err(wrong_variant(id, PlayerKind::Goalkeeper.label(), other)),
    }
}

fn contracted_mut(roster: &mut Roster, id: PlayerId) -> Result<&mut ContractedPlayer, CoreError> {
    match player_mut(roster, id)? {
        Player::Contracted(player) => Ok(player),
        other => Err(wrong_variant(id, PlayerKind::Contracted.label(), other)),
    }
}

fn free_agent_mut(roster: &mut Roster, id: PlayerId) -> Result<&mut FreeAgent, CoreError> {
    match player_mut(roster, id)? {
        Player::FreeAgent(agent) => Ok(agent),
        other => Err(wrong_variant(id, PlayerKind::FreeAgent.label(), other)),
    }
}
