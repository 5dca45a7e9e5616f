// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Outfield players: position, match statistics and conversion math.

use crate::error::DomainError;
use crate::player::PlayerProfile;
use crate::validation::validate_count;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{info, warn};

/// Rating points per goal, per game.
const GOAL_WEIGHT: f64 = 4.0;
/// Rating points per assist, per game.
const ASSIST_WEIGHT: f64 = 3.0;
/// Rating points per key pass, per game.
const KEY_PASS_WEIGHT: f64 = 1.0;
/// Rating points per tackle, per game.
const TACKLE_WEIGHT: f64 = 0.5;
/// Scale applied to the per-game contribution.
const PER_GAME_SCALE: f64 = 10.0;

/// Playing position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Position {
    /// Accepted for field players but semantically odd; keepers are their own variant.
    Goalkeeper,
    /// Defender.
    Defender,
    /// Midfielder.
    Midfielder,
    /// Forward.
    #[default]
    Forward,
}

impl Position {
    /// All positions in code order.
    pub const ALL: [Self; 4] = [
        Self::Goalkeeper,
        Self::Defender,
        Self::Midfielder,
        Self::Forward,
    ];

    /// Stable numeric code (0 = goalkeeper .. 3 = forward).
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Goalkeeper => 0,
            Self::Defender => 1,
            Self::Midfielder => 2,
            Self::Forward => 3,
        }
    }

    /// Resolves a numeric code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPosition` for codes above 3.
    pub fn from_code(code: u8) -> Result<Self, DomainError> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or_else(|| DomainError::InvalidPosition(format!("Unknown position code {code}")))
    }

    /// Returns the display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "Goalkeeper",
            Self::Defender => "Defender",
            Self::Midfielder => "Midfielder",
            Self::Forward => "Forward",
        }
    }
}

impl FromStr for Position {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|position| position.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::InvalidPosition(format!("Unknown position '{s}'")))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Running season totals for an outfield player.
///
/// Counters only grow through the update operations and only return to
/// zero together, through `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldStats {
    /// Matches played.
    pub games: u32,
    /// Goals scored.
    pub goals: u32,
    /// Assists provided.
    pub assists: u32,
    /// Shots taken.
    pub shots: u32,
    /// Tackles won.
    pub tackles: u32,
    /// Key passes made.
    pub key_passes: u32,
}

impl FieldStats {
    /// Goals per shot as a percentage; 0 when no shots were taken.
    #[must_use]
    pub fn conversion_rate(&self) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        f64::from(self.goals) / f64::from(self.shots) * 100.0
    }

    /// Zeroes all six counters.
    pub const fn reset(&mut self) {
        *self = Self {
            games: 0,
            goals: 0,
            assists: 0,
            shots: 0,
            tackles: 0,
            key_passes: 0,
        };
    }

    /// Outfield performance score.
    ///
    /// 0 before the first match. Otherwise the weighted per-game
    /// contribution (goals, assists, key passes, tackles) scaled by ten,
    /// plus a tenth of the conversion rate, floored at 0.
    #[must_use]
    pub fn performance_rating(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let contribution: f64 = f64::from(self.goals) * GOAL_WEIGHT
            + f64::from(self.assists) * ASSIST_WEIGHT
            + f64::from(self.key_passes) * KEY_PASS_WEIGHT
            + f64::from(self.tackles) * TACKLE_WEIGHT;
        let rating: f64 =
            contribution / f64::from(self.games) * PER_GAME_SCALE + self.conversion_rate() / 10.0;
        rating.max(0.0)
    }
}

/// The outfield part shared by contracted players and free agents.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPlayer {
    pub(crate) profile: PlayerProfile,
    position: Position,
    stats: FieldStats,
}

impl FieldPlayer {
    /// Creates an outfield player with zeroed statistics.
    #[must_use]
    pub fn new(profile: PlayerProfile, position: Position) -> Self {
        if position == Position::Goalkeeper {
            warn!(
                player = %profile.name(),
                "Field player registered with the goalkeeper position"
            );
        }
        Self {
            profile,
            position,
            stats: FieldStats::default(),
        }
    }

    /// Reassembles an outfield player from persisted parts.
    pub(crate) fn from_parts(
        profile: PlayerProfile,
        position: Position,
        stats: FieldStats,
    ) -> Self {
        Self {
            profile,
            position,
            stats,
        }
    }

    /// Borrows the profile.
    #[must_use]
    pub const fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    /// Mutably borrows the profile.
    pub const fn profile_mut(&mut self) -> &mut PlayerProfile {
        &mut self.profile
    }

    /// Returns the playing position.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Changes the playing position. Statistics carry over unchanged.
    pub const fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Returns the season statistics.
    #[must_use]
    pub const fn stats(&self) -> &FieldStats {
        &self.stats
    }

    /// Adds goals, assists and shots to the season totals.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NegativeStatistic` if any argument is negative;
    /// no counter is changed in that case.
    pub fn update_attacking_stats(
        &mut self,
        goals: i32,
        assists: i32,
        shots: i32,
    ) -> Result<(), DomainError> {
        let goals: u32 = validate_count("goals", goals)?;
        let assists: u32 = validate_count("assists", assists)?;
        let shots: u32 = validate_count("shots", shots)?;

        self.stats.goals = self.stats.goals.saturating_add(goals);
        self.stats.assists = self.stats.assists.saturating_add(assists);
        self.stats.shots = self.stats.shots.saturating_add(shots);
        Ok(())
    }

    /// Adds tackles to the season total.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NegativeStatistic` if `tackles` is negative.
    pub fn update_defensive_stats(&mut self, tackles: i32) -> Result<(), DomainError> {
        let tackles: u32 = validate_count("tackles", tackles)?;
        self.stats.tackles = self.stats.tackles.saturating_add(tackles);
        Ok(())
    }

    /// Counts one key pass.
    pub const fn register_key_pass(&mut self) {
        self.stats.key_passes = self.stats.key_passes.saturating_add(1);
    }

    /// Counts one match played.
    pub const fn register_match_played(&mut self) {
        self.stats.games = self.stats.games.saturating_add(1);
    }

    /// Goals per shot as a percentage; 0 when no shots were taken.
    #[must_use]
    pub fn calculate_conversion_rate(&self) -> f64 {
        self.stats.conversion_rate()
    }

    /// Zeroes every season counter at once.
    pub fn reset_season_stats(&mut self) {
        self.stats.reset();
        info!(player = %self.profile.name(), "Season statistics reset");
    }

    /// Outfield performance rating.
    #[must_use]
    pub fn performance_rating(&self) -> f64 {
        self.stats.performance_rating()
    }

    /// Writes the statistics block of `describe` output.
    pub(crate) fn describe_stats(&self, out: &mut String) {
        use std::fmt::Write as _;

        let _ = writeln!(
            out,
            "Position: {} | Matches: {} | Goals: {} | Assists: {}",
            self.position, self.stats.games, self.stats.goals, self.stats.assists
        );
        let _ = writeln!(
            out,
            "Shots: {} | Tackles: {} | Key passes: {} | Conversion: {:.2}%",
            self.stats.shots,
            self.stats.tackles,
            self.stats.key_passes,
            self.calculate_conversion_rate()
        );
    }
}
