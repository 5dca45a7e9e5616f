// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Free agents: salary expectations, negotiation state and signing.

use crate::error::DomainError;
use crate::field_player::{FieldPlayer, Position};
use crate::player::{PlayerKind, PlayerProfile, PlayerRole, describe_profile};
use crate::validation::{validate_club_name, validate_non_negative};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Fraction of market value lost per month without a club.
pub const MONTHLY_VALUE_DECAY: f64 = 0.05;
/// Value never decays below this fraction of market value.
pub const VALUE_DECAY_FLOOR: f64 = 0.5;
/// Rating of a free agent who just left a club.
pub const BASE_FREE_AGENT_RATING: f64 = 70.0;
/// Rating points lost per month without a club.
pub const MONTHLY_RATING_DECAY: f64 = 1.2;
/// Rating floor.
pub const MIN_FREE_AGENT_RATING: f64 = 40.0;
/// Value must exceed expected salary by this factor to be a bargain.
pub const BARGAIN_VALUE_RATIO: f64 = 1.3;
/// Oldest age that still counts as a bargain.
pub const BARGAIN_MAX_AGE: u32 = 30;
/// Expectation increase applied on each birthday.
pub const BIRTHDAY_EXPECTATION_RAISE_PCT: f64 = 3.0;

/// Where a free agent stands in contract talks.
///
/// `Available` and `Closed` toggle freely; `Signed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NegotiationState {
    /// Open to offers.
    #[default]
    Available,
    /// Not currently negotiating.
    Closed,
    /// Has accepted a contract.
    Signed,
}

impl NegotiationState {
    /// Returns the display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Closed => "Closed",
            Self::Signed => "Signed",
        }
    }
}

impl std::fmt::Display for NegotiationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A field player without a club.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeAgent {
    field: FieldPlayer,
    expected_salary: f64,
    last_club: String,
    months_without_club: u32,
    state: NegotiationState,
}

impl FreeAgent {
    /// Creates a free agent open to negotiation.
    ///
    /// # Arguments
    ///
    /// * `profile` - Base record
    /// * `position` - Playing position
    /// * `expected_salary` - Salary expectation, not negative
    /// * `last_club` - Most recent club, may be empty
    ///
    /// # Errors
    ///
    /// Returns `InvalidMeasurement` if the expected salary is negative or not finite.
    pub fn new(
        profile: PlayerProfile,
        position: Position,
        expected_salary: f64,
        last_club: &str,
    ) -> Result<Self, DomainError> {
        validate_non_negative("expected salary", expected_salary)?;
        Ok(Self {
            field: FieldPlayer::new(profile, position),
            expected_salary,
            last_club: last_club.to_string(),
            months_without_club: 0,
            state: NegotiationState::Available,
        })
    }

    pub(crate) fn from_parts(
        field: FieldPlayer,
        expected_salary: f64,
        last_club: String,
        months_without_club: u32,
        state: NegotiationState,
    ) -> Result<Self, DomainError> {
        validate_non_negative("expected salary", expected_salary)?;
        Ok(Self {
            field,
            expected_salary,
            last_club,
            months_without_club,
            state,
        })
    }

    pub(crate) fn into_field_player(self) -> FieldPlayer {
        self.field
    }

    /// Borrows the outfield part.
    #[must_use]
    pub const fn field(&self) -> &FieldPlayer {
        &self.field
    }

    /// Mutably borrows the outfield part.
    pub const fn field_mut(&mut self) -> &mut FieldPlayer {
        &mut self.field
    }

    /// Returns the salary expectation.
    #[must_use]
    pub const fn expected_salary(&self) -> f64 {
        self.expected_salary
    }

    /// Returns the most recent club.
    #[must_use]
    pub fn last_club(&self) -> &str {
        &self.last_club
    }

    /// Returns the months spent without a club.
    #[must_use]
    pub const fn months_without_club(&self) -> u32 {
        self.months_without_club
    }

    /// Returns the negotiation state.
    #[must_use]
    pub const fn negotiation_state(&self) -> NegotiationState {
        self.state
    }

    /// Returns true while open to offers.
    #[must_use]
    pub const fn is_available_for_negotiation(&self) -> bool {
        matches!(self.state, NegotiationState::Available)
    }

    /// Returns true once a contract has been accepted.
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        matches!(self.state, NegotiationState::Signed)
    }

    /// Considers a salary offer.
    ///
    /// An offer at or above the expectation is accepted and closes
    /// negotiations. A lower offer, or any offer while not available, is
    /// rejected without changing anything.
    ///
    /// # Returns
    ///
    /// True if the offer was accepted.
    pub fn negotiate_offer(&mut self, offer: f64) -> bool {
        if !self.is_available_for_negotiation() {
            warn!(
                player = %self.name(),
                state = %self.state,
                "Offer ignored: not available for negotiation"
            );
            return false;
        }
        if offer >= self.expected_salary {
            self.state = NegotiationState::Closed;
            info!(player = %self.name(), offer, "Offer accepted");
            true
        } else {
            info!(
                player = %self.name(),
                offer,
                expected = self.expected_salary,
                "Offer rejected"
            );
            false
        }
    }

    /// Raises the salary expectation by `percentage`. Non-positive values are ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMeasurement`, leaving the expectation unchanged, if
    /// the raised salary would not be finite.
    pub fn increase_expectations(&mut self, percentage: f64) -> Result<(), DomainError> {
        if !percentage.is_finite() || percentage <= 0.0 {
            return Ok(());
        }
        let raised: f64 = self.expected_salary * (1.0 + percentage / 100.0);
        if !raised.is_finite() {
            return Err(DomainError::InvalidMeasurement {
                field: "expected salary",
                value: raised,
            });
        }
        self.expected_salary = raised;
        debug!(player = %self.name(), expected = self.expected_salary, "Expectations raised");
        Ok(())
    }

    /// Lowers the salary expectation by `percentage`, flooring at zero.
    /// Non-positive values are ignored.
    pub fn decrease_expectations(&mut self, percentage: f64) {
        if !percentage.is_finite() || percentage <= 0.0 {
            return;
        }
        self.expected_salary = (self.expected_salary * (1.0 - percentage / 100.0)).max(0.0);
        debug!(player = %self.name(), expected = self.expected_salary, "Expectations lowered");
    }

    /// Opens or closes negotiations.
    ///
    /// # Errors
    ///
    /// Returns `AlreadySigned` once a contract has been accepted.
    pub fn set_availability(&mut self, available: bool) -> Result<(), DomainError> {
        if self.is_signed() {
            return Err(DomainError::AlreadySigned {
                player: self.name().to_string(),
            });
        }
        self.state = if available {
            NegotiationState::Available
        } else {
            NegotiationState::Closed
        };
        info!(player = %self.name(), available, "Availability changed");
        Ok(())
    }

    /// Signs with `club`, ending negotiations for good.
    ///
    /// # Errors
    ///
    /// Returns `InvalidClubName` for an empty club or `AlreadySigned` if
    /// the agent has already signed.
    pub fn accept_contract(&mut self, club: &str) -> Result<(), DomainError> {
        validate_club_name(club)?;
        if self.is_signed() {
            return Err(DomainError::AlreadySigned {
                player: self.name().to_string(),
            });
        }
        self.state = NegotiationState::Signed;
        self.last_club = club.to_string();
        self.months_without_club = 0;
        info!(player = %self.name(), club, "Contract accepted");
        Ok(())
    }

    /// Counts one more month without a club.
    pub const fn advance_month(&mut self) {
        self.months_without_club = self.months_without_club.saturating_add(1);
    }

    /// True when the computed value comfortably exceeds the salary
    /// expectation and the player is young enough.
    #[must_use]
    pub fn is_bargain(&self) -> bool {
        self.calculate_value() > self.expected_salary * BARGAIN_VALUE_RATIO
            && self.profile().age() <= BARGAIN_MAX_AGE
    }

    fn name(&self) -> &str {
        self.field.profile().name()
    }
}

impl PlayerRole for FreeAgent {
    fn profile(&self) -> &PlayerProfile {
        self.field.profile()
    }

    fn profile_mut(&mut self) -> &mut PlayerProfile {
        self.field.profile_mut()
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::FreeAgent
    }

    fn calculate_value(&self) -> f64 {
        let months: f64 = f64::from(self.months_without_club);
        let factor: f64 = (1.0 - months * MONTHLY_VALUE_DECAY).max(VALUE_DECAY_FLOOR);
        self.profile().market_value() * factor
    }

    fn calculate_performance_rating(&self) -> f64 {
        let months: f64 = f64::from(self.months_without_club);
        (BASE_FREE_AGENT_RATING - months * MONTHLY_RATING_DECAY).max(MIN_FREE_AGENT_RATING)
    }

    fn status(&self) -> String {
        let label: &str = match self.state {
            NegotiationState::Signed => "Free Agent (Signed)",
            NegotiationState::Closed => "Free Agent (Negotiations Closed)",
            NegotiationState::Available if self.profile().is_injured() => "Free Agent (Injured)",
            NegotiationState::Available => "Free Agent (Available)",
        };
        label.to_string()
    }

    fn celebrate_birthday(&mut self) {
        self.field.profile_mut().age_one_year();
        self.advance_month();
        if let Err(err) = self.increase_expectations(BIRTHDAY_EXPECTATION_RAISE_PCT) {
            warn!(player = %self.name(), error = %err, "Expectations left unchanged");
        }
        info!(
            player = %self.name(),
            age = self.profile().age(),
            months = self.months_without_club,
            "Birthday celebrated"
        );
    }

    fn describe(&self) -> String {
        use std::fmt::Write as _;

        let mut out: String = String::new();
        describe_profile(&mut out, self);
        self.field.describe_stats(&mut out);
        let last_club: &str = if self.last_club.is_empty() {
            "none"
        } else {
            &self.last_club
        };
        let _ = writeln!(
            out,
            "Expected salary: {:.2} | Last club: {} | Months without club: {}",
            self.expected_salary, last_club, self.months_without_club
        );
        let _ = writeln!(
            out,
            "Negotiation: {}{}",
            self.state,
            if self.is_bargain() { " | Bargain" } else { "" }
        );
        out
    }
}
