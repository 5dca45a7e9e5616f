// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The base record shared by every player variant.

use crate::error::DomainError;
use crate::validation::{
    format_date, validate_age, validate_name, validate_nationality, validate_non_negative,
    validate_origin, validate_positive,
};
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::{debug, info};

/// A roster-wide player identifier.
///
/// `PlayerId(0)` means "not yet assigned"; the roster hands out real ids
/// on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(u32);

impl PlayerId {
    /// The "unassigned" sentinel.
    pub const UNASSIGNED: Self = Self(0);

    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns true unless this is the unassigned sentinel.
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry in a player's injury history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Injury {
    /// What happened (e.g. "Hamstring strain").
    pub injury_type: String,
    /// Canonical `YYYY-MM-DD` date the injury was reported.
    pub date_occurred: String,
    /// Expected recovery time in days.
    pub recovery_days: u32,
}

/// Identity, biometrics, market value and injury tracking.
///
/// Every variant embeds exactly one profile. Construction and every
/// setter validate their inputs first, so `age`, `height` and `weight`
/// are always positive and `market_value` is never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    id: PlayerId,
    name: String,
    age: u32,
    nationality: String,
    origin: String,
    height: f64,
    weight: f64,
    market_value: f64,
    injured: bool,
    injury_history: Vec<Injury>,
}

impl PlayerProfile {
    /// Creates a new, unassigned, uninjured profile.
    ///
    /// # Arguments
    ///
    /// * `name` - Full name
    /// * `age` - Age in years
    /// * `nationality` - Citizenship
    /// * `origin` - Place of origin
    /// * `height` - Height in metres
    /// * `weight` - Weight in kilograms
    /// * `market_value` - Starting market value
    ///
    /// # Errors
    ///
    /// Returns an error if any text field is empty, the age is zero, the
    /// height or weight is not positive, or the market value is negative.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        age: u32,
        nationality: &str,
        origin: &str,
        height: f64,
        weight: f64,
        market_value: f64,
    ) -> Result<Self, DomainError> {
        validate_name(name)?;
        validate_age(age)?;
        validate_nationality(nationality)?;
        validate_origin(origin)?;
        validate_positive("height", height)?;
        validate_positive("weight", weight)?;
        validate_non_negative("market value", market_value)?;

        Ok(Self {
            id: PlayerId::UNASSIGNED,
            name: name.to_string(),
            age,
            nationality: nationality.to_string(),
            origin: origin.to_string(),
            height,
            weight,
            market_value,
            injured: false,
            injury_history: Vec::new(),
        })
    }

    /// Re-checks every invariant on a profile read back from storage.
    ///
    /// Deserialization bypasses the constructor, so decoded profiles must
    /// pass through here before they are handed out.
    ///
    /// # Errors
    ///
    /// Returns an error if any persisted field violates a profile invariant.
    pub(crate) fn validate_restored(&self) -> Result<(), DomainError> {
        validate_name(&self.name)?;
        validate_age(self.age)?;
        validate_nationality(&self.nationality)?;
        validate_origin(&self.origin)?;
        validate_positive("height", self.height)?;
        validate_positive("weight", self.weight)?;
        validate_non_negative("market value", self.market_value)?;
        for injury in &self.injury_history {
            if injury.injury_type.trim().is_empty() || injury.recovery_days == 0 {
                return Err(DomainError::InvalidInjury(format!(
                    "Malformed injury history entry '{}'",
                    injury.injury_type
                )));
            }
            crate::validation::validate_date("injury date", &injury.date_occurred)?;
        }
        Ok(())
    }

    /// Returns the player's identifier.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Assigns the player's identifier.
    ///
    /// Identifiers are write-once: an assigned id cannot be replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is the unassigned sentinel or the profile
    /// already has an id.
    pub fn assign_id(&mut self, id: PlayerId) -> Result<(), DomainError> {
        if !id.is_assigned() {
            return Err(DomainError::InvalidPlayerId(String::from(
                "Player id must be positive",
            )));
        }
        if self.id.is_assigned() {
            return Err(DomainError::PlayerIdAlreadyAssigned {
                current: self.id.value(),
            });
        }
        self.id = id;
        Ok(())
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's age.
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Returns the player's nationality.
    #[must_use]
    pub fn nationality(&self) -> &str {
        &self.nationality
    }

    /// Returns the player's origin.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Returns the player's height in metres.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Returns the player's weight in kilograms.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the raw market value.
    #[must_use]
    pub const fn market_value(&self) -> f64 {
        self.market_value
    }

    /// Returns whether the player is currently injured.
    #[must_use]
    pub const fn is_injured(&self) -> bool {
        self.injured
    }

    /// Returns the full injury history, oldest first.
    #[must_use]
    pub fn injury_history(&self) -> &[Injury] {
        &self.injury_history
    }

    /// Sets the player's name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn set_name(&mut self, name: &str) -> Result<(), DomainError> {
        validate_name(name)?;
        self.name = name.to_string();
        Ok(())
    }

    /// Sets the player's age.
    ///
    /// # Errors
    ///
    /// Returns an error if the age is zero.
    pub fn set_age(&mut self, age: u32) -> Result<(), DomainError> {
        validate_age(age)?;
        self.age = age;
        Ok(())
    }

    /// Sets the player's nationality.
    ///
    /// # Errors
    ///
    /// Returns an error if the nationality is empty.
    pub fn set_nationality(&mut self, nationality: &str) -> Result<(), DomainError> {
        validate_nationality(nationality)?;
        self.nationality = nationality.to_string();
        Ok(())
    }

    /// Sets the player's origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the origin is empty.
    pub fn set_origin(&mut self, origin: &str) -> Result<(), DomainError> {
        validate_origin(origin)?;
        self.origin = origin.to_string();
        Ok(())
    }

    /// Sets the player's height.
    ///
    /// # Errors
    ///
    /// Returns an error if the height is not positive.
    pub fn set_height(&mut self, height: f64) -> Result<(), DomainError> {
        validate_positive("height", height)?;
        self.height = height;
        Ok(())
    }

    /// Sets the player's weight.
    ///
    /// # Errors
    ///
    /// Returns an error if the weight is not positive.
    pub fn set_weight(&mut self, weight: f64) -> Result<(), DomainError> {
        validate_positive("weight", weight)?;
        self.weight = weight;
        Ok(())
    }

    /// Sets the market value outright.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not positive.
    pub fn set_market_value(&mut self, market_value: f64) -> Result<(), DomainError> {
        validate_positive("market value", market_value)?;
        self.market_value = market_value;
        Ok(())
    }

    /// Increments the player's age by one year.
    pub(crate) const fn age_one_year(&mut self) {
        self.age = self.age.saturating_add(1);
    }

    /// Records an injury dated today (UTC).
    ///
    /// # Errors
    ///
    /// Returns an error if the injury type is empty or `recovery_days` is not positive.
    pub fn report_injury(&mut self, injury_type: &str, recovery_days: i32) -> Result<(), DomainError> {
        let today: Date = time::OffsetDateTime::now_utc().date();
        self.report_injury_on(injury_type, recovery_days, today)
    }

    /// Records an injury that occurred on `date`.
    ///
    /// Marks the player injured and appends to the history.
    ///
    /// # Errors
    ///
    /// Returns an error if the injury type is empty or `recovery_days` is not positive.
    pub fn report_injury_on(
        &mut self,
        injury_type: &str,
        recovery_days: i32,
        date: Date,
    ) -> Result<(), DomainError> {
        if injury_type.trim().is_empty() {
            return Err(DomainError::InvalidInjury(String::from(
                "Injury type cannot be empty",
            )));
        }
        let recovery_days: u32 = match u32::try_from(recovery_days) {
            Ok(days) if days > 0 => days,
            _ => {
                return Err(DomainError::InvalidInjury(format!(
                    "Recovery days must be greater than 0 (got {recovery_days})"
                )));
            }
        };

        self.injured = true;
        self.injury_history.push(Injury {
            injury_type: injury_type.to_string(),
            date_occurred: format_date(date),
            recovery_days,
        });
        info!(
            player = %self.name,
            injury = injury_type,
            recovery_days,
            "Injury reported"
        );
        Ok(())
    }

    /// Clears the injured flag. History is kept.
    pub fn return_to_fitness(&mut self) {
        self.injured = false;
        info!(player = %self.name, "Returned to fitness");
    }

    /// Scales the market value by `(1 + pct / 100)`, flooring at zero.
    ///
    /// Negative percentages are allowed and model a drop in value.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the value unchanged, if `percentage_change`
    /// or the resulting market value is not finite.
    pub fn update_market_value(&mut self, percentage_change: f64) -> Result<(), DomainError> {
        if !percentage_change.is_finite() {
            return Err(DomainError::InvalidMeasurement {
                field: "percentage change",
                value: percentage_change,
            });
        }
        let factor: f64 = 1.0 + percentage_change / 100.0;
        let updated: f64 = (self.market_value * factor).max(0.0);
        if !updated.is_finite() {
            return Err(DomainError::InvalidMeasurement {
                field: "market value",
                value: updated,
            });
        }
        self.market_value = updated;
        debug!(
            player = %self.name,
            percentage_change,
            market_value = self.market_value,
            "Market value updated"
        );
        Ok(())
    }
}

/// The closed set of player variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// A goalkeeper with keeper-specific statistics.
    Goalkeeper,
    /// A field player under contract with a club.
    Contracted,
    /// A field player without a club.
    FreeAgent,
}

impl PlayerKind {
    /// The leading tag written at the start of each persisted record.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "GK",
            Self::Contracted => "CP",
            Self::FreeAgent => "FA",
        }
    }

    /// Resolves a record tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "GK" => Some(Self::Goalkeeper),
            "CP" => Some(Self::Contracted),
            "FA" => Some(Self::FreeAgent),
            _ => None,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "Goalkeeper",
            Self::Contracted => "Contracted player",
            Self::FreeAgent => "Free agent",
        }
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Behaviour every player variant provides.
///
/// Valuation, rating and status differ per variant; the profile is shared.
pub trait PlayerRole {
    /// Borrows the shared base record.
    fn profile(&self) -> &PlayerProfile;

    /// Mutably borrows the shared base record.
    fn profile_mut(&mut self) -> &mut PlayerProfile;

    /// Which variant this is.
    fn kind(&self) -> PlayerKind;

    /// Estimated worth, combining market value with variant-specific factors.
    fn calculate_value(&self) -> f64;

    /// Performance score; higher is better.
    fn calculate_performance_rating(&self) -> f64;

    /// Short status label used for display and filtering.
    fn status(&self) -> String;

    /// Adds a year of age and applies any variant-specific side effects.
    fn celebrate_birthday(&mut self);

    /// Multi-line description of the player.
    fn describe(&self) -> String;
}

/// Writes the profile block that opens every `describe` output.
pub(crate) fn describe_profile(out: &mut String, role: &dyn PlayerRole) {
    use std::fmt::Write as _;

    let profile: &PlayerProfile = role.profile();
    let _ = writeln!(
        out,
        "--- {} (ID: {}) ---",
        role.kind().label().to_uppercase(),
        profile.id()
    );
    let _ = writeln!(
        out,
        "Name: {} | Age: {} | Status: {}",
        profile.name(),
        profile.age(),
        role.status()
    );
    let _ = writeln!(
        out,
        "Nationality: {} | Origin: {} | Height: {:.2} m | Weight: {:.1} kg",
        profile.nationality(),
        profile.origin(),
        profile.height(),
        profile.weight()
    );
    let _ = writeln!(
        out,
        "Market value: {:.0} | Estimated value: {:.0} | Rating: {:.2}",
        profile.market_value(),
        role.calculate_value(),
        role.calculate_performance_rating()
    );
    if !profile.injury_history().is_empty() {
        let _ = writeln!(out, "Injuries: {}", profile.injury_history().len());
    }
}
