// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use club_roster_domain::{Player, PlayerId, Position};

/// A single change to a player's base record.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileUpdate {
    /// New name.
    Name(String),
    /// New age.
    Age(u32),
    /// New nationality.
    Nationality(String),
    /// New place of origin.
    Origin(String),
    /// New height in metres.
    Height(f64),
    /// New weight in kilograms.
    Weight(f64),
    /// New market value.
    MarketValue(f64),
}

/// A command represents user intent as data only.
///
/// Commands are the only way to request roster changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Add a player; an unassigned player receives a fresh id.
    AddPlayer {
        /// The player to add.
        player: Box<Player>,
    },
    /// Remove a player.
    RemovePlayer {
        /// The player to remove.
        id: PlayerId,
    },
    /// Change one base-record field.
    UpdateProfile {
        /// The player to update.
        id: PlayerId,
        /// The change.
        update: ProfileUpdate,
    },
    /// Record an injury dated today.
    ReportInjury {
        /// The injured player.
        id: PlayerId,
        /// What happened.
        injury_type: String,
        /// Expected recovery in days.
        recovery_days: i32,
    },
    /// Clear a player's injured flag.
    ReturnToFitness {
        /// The player.
        id: PlayerId,
    },
    /// Scale a player's market value by a percentage.
    UpdateMarketValue {
        /// The player.
        id: PlayerId,
        /// Percentage change; negative values lower the value.
        percentage: f64,
    },
    /// Add attacking numbers for a field player.
    RecordAttackingStats {
        /// The player.
        id: PlayerId,
        /// Goals scored.
        goals: i32,
        /// Assists made.
        assists: i32,
        /// Shots taken.
        shots: i32,
    },
    /// Add tackles for a field player.
    RecordDefensiveStats {
        /// The player.
        id: PlayerId,
        /// Tackles won.
        tackles: i32,
    },
    /// Move a field player to another position.
    ChangePosition {
        /// The player.
        id: PlayerId,
        /// The new position.
        position: Position,
    },
    /// Count one key pass for a field player.
    RegisterKeyPass {
        /// The player.
        id: PlayerId,
    },
    /// Count one match for a field player.
    RegisterMatchPlayed {
        /// The player.
        id: PlayerId,
    },
    /// Record one match for a goalkeeper.
    RecordGoalkeeperMatch {
        /// The goalkeeper.
        id: PlayerId,
        /// Goals conceded.
        goals_against: i32,
        /// Saves made.
        saves: i32,
    },
    /// Count one clean sheet for a goalkeeper.
    RegisterCleanSheet {
        /// The goalkeeper.
        id: PlayerId,
    },
    /// Count one saved penalty for a goalkeeper.
    RegisterPenaltySave {
        /// The goalkeeper.
        id: PlayerId,
    },
    /// Put a contracted player on the transfer list.
    ListForTransfer {
        /// The player.
        id: PlayerId,
        /// Minimum fee.
        fee: f64,
        /// Free-text conditions.
        conditions: String,
    },
    /// Take a contracted player off the transfer list.
    RemoveFromTransferList {
        /// The player.
        id: PlayerId,
    },
    /// Sell a listed player.
    TransferToClub {
        /// The player.
        id: PlayerId,
        /// The buying club.
        new_club: String,
        /// The fee offered.
        fee: f64,
    },
    /// Extend a contract with a new end date and salary.
    ExtendContract {
        /// The player.
        id: PlayerId,
        /// Canonical new end date.
        new_date: String,
        /// New salary.
        new_salary: f64,
    },
    /// Terminate a contract.
    TerminateContract {
        /// The player.
        id: PlayerId,
        /// Why the contract ends.
        reason: String,
    },
    /// Send a contracted player on loan.
    SendOnLoan {
        /// The player.
        id: PlayerId,
        /// The receiving club.
        club: String,
        /// Canonical loan end date.
        end_date: String,
    },
    /// End a loan spell.
    ReturnFromLoan {
        /// The player.
        id: PlayerId,
    },
    /// Make a salary offer to a free agent without signing.
    NegotiateOffer {
        /// The free agent.
        id: PlayerId,
        /// Salary offered.
        offer: f64,
    },
    /// Raise a free agent's salary expectation.
    IncreaseExpectations {
        /// The free agent.
        id: PlayerId,
        /// Percentage increase.
        percentage: f64,
    },
    /// Lower a free agent's salary expectation.
    DecreaseExpectations {
        /// The free agent.
        id: PlayerId,
        /// Percentage decrease.
        percentage: f64,
    },
    /// Open or close negotiations with a free agent.
    SetAvailability {
        /// The free agent.
        id: PlayerId,
        /// Whether offers are accepted.
        available: bool,
    },
    /// Count another month a free agent spends without a club.
    AdvanceMonth {
        /// The free agent.
        id: PlayerId,
    },
    /// Sign a free agent to the roster's club.
    SignFreeAgent {
        /// The free agent.
        id: PlayerId,
        /// Salary offered and debited from the budget.
        salary_offer: f64,
        /// Canonical contract end date.
        contract_until: String,
    },
    /// Celebrate one player's birthday.
    CelebrateBirthday {
        /// The player.
        id: PlayerId,
    },
    /// Zero one player's season statistics.
    ResetSeasonStats {
        /// The player.
        id: PlayerId,
    },
    /// Zero every player's season statistics.
    ResetAllSeasonStats,
    /// Reorder the roster by performance rating, best first.
    SortByPerformanceRating,
    /// Replace the transfer budget.
    SetTransferBudget {
        /// The new budget.
        budget: f64,
    },
}

impl Command {
    /// The command's name, as recorded in transition results.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddPlayer { .. } => "AddPlayer",
            Self::RemovePlayer { .. } => "RemovePlayer",
            Self::UpdateProfile { .. } => "UpdateProfile",
            Self::ReportInjury { .. } => "ReportInjury",
            Self::ReturnToFitness { .. } => "ReturnToFitness",
            Self::UpdateMarketValue { .. } => "UpdateMarketValue",
            Self::RecordAttackingStats { .. } => "RecordAttackingStats",
            Self::RecordDefensiveStats { .. } => "RecordDefensiveStats",
            Self::ChangePosition { .. } => "ChangePosition",
            Self::RegisterKeyPass { .. } => "RegisterKeyPass",
            Self::RegisterMatchPlayed { .. } => "RegisterMatchPlayed",
            Self::RecordGoalkeeperMatch { .. } => "RecordGoalkeeperMatch",
            Self::RegisterCleanSheet { .. } => "RegisterCleanSheet",
            Self::RegisterPenaltySave { .. } => "RegisterPenaltySave",
            Self::ListForTransfer { .. } => "ListForTransfer",
            Self::RemoveFromTransferList { .. } => "RemoveFromTransferList",
            Self::TransferToClub { .. } => "TransferToClub",
            Self::ExtendContract { .. } => "ExtendContract",
            Self::TerminateContract { .. } => "TerminateContract",
            Self::SendOnLoan { .. } => "SendOnLoan",
            Self::ReturnFromLoan { .. } => "ReturnFromLoan",
            Self::NegotiateOffer { .. } => "NegotiateOffer",
            Self::IncreaseExpectations { .. } => "IncreaseExpectations",
            Self::DecreaseExpectations { .. } => "DecreaseExpectations",
            Self::SetAvailability { .. } => "SetAvailability",
            Self::AdvanceMonth { .. } => "AdvanceMonth",
            Self::SignFreeAgent { .. } => "SignFreeAgent",
            Self::CelebrateBirthday { .. } => "CelebrateBirthday",
            Self::ResetSeasonStats { .. } => "ResetSeasonStats",
            Self::ResetAllSeasonStats => "ResetAllSeasonStats",
            Self::SortByPerformanceRating => "SortByPerformanceRating",
            Self::SetTransferBudget { .. } => "SetTransferBudget",
        }
    }
}
