// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The closed set of player variants a roster can hold.

use crate::contract::ContractedPlayer;
use crate::field_player::FieldPlayer;
use crate::free_agent::FreeAgent;
use crate::goalkeeper::Goalkeeper;
use crate::player::{PlayerId, PlayerKind, PlayerProfile, PlayerRole};

/// Any player held by a roster.
#[derive(Debug, Clone, PartialEq)]
pub enum Player {
    /// A goalkeeper.
    Goalkeeper(Goalkeeper),
    /// A field player under contract.
    Contracted(ContractedPlayer),
    /// A field player without a club.
    FreeAgent(FreeAgent),
}

impl Player {
    /// Returns the player's identifier.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.profile().id()
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.profile().name()
    }

    /// Borrows the goalkeeper, if this is one.
    #[must_use]
    pub const fn as_goalkeeper(&self) -> Option<&Goalkeeper> {
        match self {
            Self::Goalkeeper(keeper) => Some(keeper),
            _ => None,
        }
    }

    /// Mutably borrows the goalkeeper, if this is one.
    pub const fn as_goalkeeper_mut(&mut self) -> Option<&mut Goalkeeper> {
        match self {
            Self::Goalkeeper(keeper) => Some(keeper),
            _ => None,
        }
    }

    /// Borrows the contracted player, if this is one.
    #[must_use]
    pub const fn as_contracted(&self) -> Option<&ContractedPlayer> {
        match self {
            Self::Contracted(player) => Some(player),
            _ => None,
        }
    }

    /// Mutably borrows the contracted player, if this is one.
    pub const fn as_contracted_mut(&mut self) -> Option<&mut ContractedPlayer> {
        match self {
            Self::Contracted(player) => Some(player),
            _ => None,
        }
    }

    /// Borrows the free agent, if this is one.
    #[must_use]
    pub const fn as_free_agent(&self) -> Option<&FreeAgent> {
        match self {
            Self::FreeAgent(agent) => Some(agent),
            _ => None,
        }
    }

    /// Mutably borrows the free agent, if this is one.
    pub const fn as_free_agent_mut(&mut self) -> Option<&mut FreeAgent> {
        match self {
            Self::FreeAgent(agent) => Some(agent),
            _ => None,
        }
    }

    /// Borrows the outfield part of contracted players and free agents.
    #[must_use]
    pub const fn field_player(&self) -> Option<&FieldPlayer> {
        match self {
            Self::Goalkeeper(_) => None,
            Self::Contracted(player) => Some(player.field()),
            Self::FreeAgent(agent) => Some(agent.field()),
        }
    }

    /// Mutably borrows the outfield part of contracted players and free agents.
    pub const fn field_player_mut(&mut self) -> Option<&mut FieldPlayer> {
        match self {
            Self::Goalkeeper(_) => None,
            Self::Contracted(player) => Some(player.field_mut()),
            Self::FreeAgent(agent) => Some(agent.field_mut()),
        }
    }

    /// Zeroes the season counters of whichever statistics this player keeps.
    pub fn reset_season_stats(&mut self) {
        match self {
            Self::Goalkeeper(keeper) => keeper.reset_season_stats(),
            Self::Contracted(player) => player.field_mut().reset_season_stats(),
            Self::FreeAgent(agent) => agent.field_mut().reset_season_stats(),
        }
    }

    fn role(&self) -> &dyn PlayerRole {
        match self {
            Self::Goalkeeper(keeper) => keeper,
            Self::Contracted(player) => player,
            Self::FreeAgent(agent) => agent,
        }
    }

    fn role_mut(&mut self) -> &mut dyn PlayerRole {
        match self {
            Self::Goalkeeper(keeper) => keeper,
            Self::Contracted(player) => player,
            Self::FreeAgent(agent) => agent,
        }
    }
}

impl PlayerRole for Player {
    fn profile(&self) -> &PlayerProfile {
        self.role().profile()
    }

    fn profile_mut(&mut self) -> &mut PlayerProfile {
        self.role_mut().profile_mut()
    }

    fn kind(&self) -> PlayerKind {
        self.role().kind()
    }

    fn calculate_value(&self) -> f64 {
        self.role().calculate_value()
    }

    fn calculate_performance_rating(&self) -> f64 {
        self.role().calculate_performance_rating()
    }

    fn status(&self) -> String {
        self.role().status()
    }

    fn celebrate_birthday(&mut self) {
        self.role_mut().celebrate_birthday();
    }

    fn describe(&self) -> String {
        self.role().describe()
    }
}

impl From<Goalkeeper> for Player {
    fn from(keeper: Goalkeeper) -> Self {
        Self::Goalkeeper(keeper)
    }
}

impl From<ContractedPlayer> for Player {
    fn from(player: ContractedPlayer) -> Self {
        Self::Contracted(player)
    }
}

impl From<FreeAgent> for Player {
    fn from(agent: FreeAgent) -> Self {
        Self::FreeAgent(agent)
    }
}
