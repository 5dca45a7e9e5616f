// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use club_roster_domain::{Player, PlayerRole};
use serde::{Deserialize, Serialize};

use crate::auth::{Role, UserAccount};

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    /// The username.
    pub username: String,
    /// The plaintext password.
    pub password: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The username logged in.
    pub username: String,
    /// The role's display name.
    pub role: String,
    /// A greeting for the menu header.
    pub message: String,
}

/// API request to register a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUserRequest {
    /// The new username.
    pub username: String,
    /// The plaintext password.
    pub password: String,
    /// The new account's role.
    pub role: Role,
}

/// API request to change the caller's own password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangePasswordRequest {
    /// The current password.
    pub current_password: String,
    /// The replacement password.
    pub new_password: String,
}

/// API response describing a user account, without its hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// The username.
    pub username: String,
    /// The role's display name.
    pub role: String,
}

impl From<&UserAccount> for UserSummary {
    fn from(user: &UserAccount) -> Self {
        Self {
            username: user.username().to_string(),
            role: user.role().to_string(),
        }
    }
}

/// API response for a command applied to the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    /// The command's name.
    pub action: String,
    /// What changed.
    pub message: String,
}

/// One row of a roster listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    /// The player's roster id.
    pub id: u32,
    /// The player's name.
    pub name: String,
    /// The kind of player.
    pub kind: String,
    /// Age in years.
    pub age: u32,
    /// Status line.
    pub status: String,
    /// Base market value.
    pub market_value: f64,
    /// Computed overall value.
    pub value: f64,
    /// Computed performance rating.
    pub performance_rating: f64,
}

impl From<&Player> for PlayerSummary {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id().value(),
            name: player.name().to_string(),
            kind: player.kind().label().to_string(),
            age: player.profile().age(),
            status: player.status(),
            market_value: player.profile().market_value(),
            value: player.calculate_value(),
            performance_rating: player.calculate_performance_rating(),
        }
    }
}

/// Full details of one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerDetails {
    /// The listing row.
    pub summary: PlayerSummary,
    /// The multi-line description block.
    pub description: String,
}

/// API response for a roster listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPlayersResponse {
    /// The club's name.
    pub club_name: String,
    /// The remaining transfer budget.
    pub transfer_budget: f64,
    /// The matching players, in roster order.
    pub players: Vec<PlayerSummary>,
}
