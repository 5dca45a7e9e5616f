// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Goalkeepers: keeper statistics and their own rating formula.

use crate::error::DomainError;
use crate::player::{PlayerKind, PlayerProfile, PlayerRole, describe_profile};
use crate::validation::validate_count;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Age from which a goalkeeper counts as a veteran.
pub const VETERAN_AGE: u32 = 35;
/// Value added per rating point.
pub const KEEPER_RATING_VALUE: f64 = 100_000.0;
/// Value added per clean sheet.
pub const CLEAN_SHEET_VALUE: f64 = 300_000.0;

/// Running season totals for a goalkeeper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GoalkeeperStats {
    /// Matches played.
    pub matches_played: u32,
    /// Matches without conceding.
    pub clean_sheets: u32,
    /// Saves made.
    pub saves_total: u32,
    /// Goals conceded.
    pub goals_conceded: u32,
    /// Penalties saved.
    pub penalties_saved: u32,
}

impl GoalkeeperStats {
    /// Zeroes all five counters.
    pub const fn reset(&mut self) {
        *self = Self {
            matches_played: 0,
            clean_sheets: 0,
            saves_total: 0,
            goals_conceded: 0,
            penalties_saved: 0,
        };
    }
}

/// A goalkeeper. Sibling of the field players, not one of them.
#[derive(Debug, Clone, PartialEq)]
pub struct Goalkeeper {
    profile: PlayerProfile,
    stats: GoalkeeperStats,
}

impl Goalkeeper {
    /// Creates a goalkeeper with zeroed statistics.
    #[must_use]
    pub const fn new(profile: PlayerProfile) -> Self {
        Self {
            profile,
            stats: GoalkeeperStats {
                matches_played: 0,
                clean_sheets: 0,
                saves_total: 0,
                goals_conceded: 0,
                penalties_saved: 0,
            },
        }
    }

    pub(crate) const fn from_parts(profile: PlayerProfile, stats: GoalkeeperStats) -> Self {
        Self { profile, stats }
    }

    /// Returns the season statistics.
    #[must_use]
    pub const fn stats(&self) -> &GoalkeeperStats {
        &self.stats
    }

    /// Records one match.
    ///
    /// Conceding nothing also registers a clean sheet.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NegativeStatistic` if either argument is negative;
    /// nothing is recorded in that case.
    pub fn update_match_stats(&mut self, goals_against: i32, saves: i32) -> Result<(), DomainError> {
        let goals_against: u32 = validate_count("goals against", goals_against)?;
        let saves: u32 = validate_count("saves", saves)?;

        self.stats.matches_played = self.stats.matches_played.saturating_add(1);
        self.stats.goals_conceded = self.stats.goals_conceded.saturating_add(goals_against);
        self.stats.saves_total = self.stats.saves_total.saturating_add(saves);

        if goals_against == 0 {
            self.register_clean_sheet();
        }
        Ok(())
    }

    /// Counts one clean sheet.
    pub const fn register_clean_sheet(&mut self) {
        self.stats.clean_sheets = self.stats.clean_sheets.saturating_add(1);
    }

    /// Counts one saved penalty.
    pub const fn register_penalty_save(&mut self) {
        self.stats.penalties_saved = self.stats.penalties_saved.saturating_add(1);
    }

    /// Saves over shots faced, as a percentage; 0 before any shot is faced.
    #[must_use]
    pub fn calculate_save_percentage(&self) -> f64 {
        let shots_faced: u64 =
            u64::from(self.stats.saves_total) + u64::from(self.stats.goals_conceded);
        if shots_faced == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let shots_faced: f64 = shots_faced as f64;
        f64::from(self.stats.saves_total) / shots_faced * 100.0
    }

    /// Returns true from `VETERAN_AGE` onwards.
    #[must_use]
    pub const fn is_veteran(&self) -> bool {
        self.profile.age() >= VETERAN_AGE
    }

    /// Zeroes every season counter at once.
    pub fn reset_season_stats(&mut self) {
        self.stats.reset();
        info!(player = %self.profile.name(), "Goalkeeper statistics reset");
    }
}

impl PlayerRole for Goalkeeper {
    fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut PlayerProfile {
        &mut self.profile
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Goalkeeper
    }

    fn calculate_value(&self) -> f64 {
        self.profile.market_value()
            + self.calculate_performance_rating() * KEEPER_RATING_VALUE
            + f64::from(self.stats.clean_sheets) * CLEAN_SHEET_VALUE
    }

    /// `clean_sheets×4 + penalties_saved×3 + save%/10 − conceded_per_match×2`,
    /// floored at 0; 0 before the first match.
    fn calculate_performance_rating(&self) -> f64 {
        if self.stats.matches_played == 0 {
            return 0.0;
        }
        let conceded_per_match: f64 =
            f64::from(self.stats.goals_conceded) / f64::from(self.stats.matches_played);
        let rating: f64 = f64::from(self.stats.clean_sheets) * 4.0
            + f64::from(self.stats.penalties_saved) * 3.0
            + self.calculate_save_percentage() / 10.0
            - conceded_per_match * 2.0;
        rating.max(0.0)
    }

    fn status(&self) -> String {
        if self.profile.is_injured() {
            String::from("Goalkeeper (Injured)")
        } else {
            String::from("Goalkeeper (Active)")
        }
    }

    fn celebrate_birthday(&mut self) {
        self.profile.age_one_year();
        info!(
            player = %self.profile.name(),
            age = self.profile.age(),
            veteran = self.is_veteran(),
            "Birthday celebrated"
        );
    }

    fn describe(&self) -> String {
        use std::fmt::Write as _;

        let mut out: String = String::new();
        describe_profile(&mut out, self);
        let _ = writeln!(
            out,
            "Matches: {} | Clean sheets: {} | Saves: {} | Conceded: {} | Penalties saved: {}",
            self.stats.matches_played,
            self.stats.clean_sheets,
            self.stats.saves_total,
            self.stats.goals_conceded,
            self.stats.penalties_saved
        );
        let _ = writeln!(
            out,
            "Save percentage: {:.2}%{}",
            self.calculate_save_percentage(),
            if self.is_veteran() { " | Veteran" } else { "" }
        );
        out
    }
}
