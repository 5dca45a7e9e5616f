// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::state::{LoadFailure, LoadReport};
use club_roster_domain::{
    ContractDetails, ContractedPlayer, DomainError, FreeAgent, Player, PlayerId, PlayerKind,
    PlayerRole, decode_player, encode_player, validate_club_name,
};
use tracing::{info, warn};

/// Ids handed out by the roster start above this value.
pub const ID_FLOOR: u32 = 1000;

/// Separator between club name and budget in the header line.
pub const HEADER_SEPARATOR: char = ',';

/// The players of one club, plus its name and transfer budget.
///
/// The roster is the only owner of its players. Every id it holds is
/// assigned and unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    club_name: String,
    transfer_budget: f64,
    players: Vec<Player>,
}

impl Roster {
    /// Creates an empty roster.
    ///
    /// # Arguments
    ///
    /// * `club_name` - The club's name
    /// * `transfer_budget` - Money available for signings
    ///
    /// # Errors
    ///
    /// Returns an error if the club name is empty or the budget is negative
    /// or not finite.
    pub fn new(club_name: &str, transfer_budget: f64) -> Result<Self, CoreError> {
        validate_club_name(club_name)?;
        validate_budget(transfer_budget)?;
        Ok(Self {
            club_name: club_name.to_string(),
            transfer_budget,
            players: Vec::new(),
        })
    }

    /// Returns the club's name.
    #[must_use]
    pub fn club_name(&self) -> &str {
        &self.club_name
    }

    /// Returns the remaining transfer budget.
    #[must_use]
    pub const fn transfer_budget(&self) -> f64 {
        self.transfer_budget
    }

    /// Replaces the transfer budget.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidBudget` for negative or non-finite values.
    pub fn set_transfer_budget(&mut self, budget: f64) -> Result<(), CoreError> {
        validate_budget(budget)?;
        self.transfer_budget = budget;
        Ok(())
    }

    /// All players in storage order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns true if the roster has no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Looks up a player by id.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == id)
    }

    /// Looks up a player by id for mutation.
    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.id() == id)
    }

    fn position_of(&self, id: PlayerId) -> Result<usize, CoreError> {
        self.players
            .iter()
            .position(|player| player.id() == id)
            .ok_or(CoreError::PlayerNotFound(id))
    }

    /// The id the next unassigned player will receive.
    #[must_use]
    pub fn next_id(&self) -> PlayerId {
        let highest: u32 = self
            .players
            .iter()
            .map(|player| player.id().value())
            .max()
            .unwrap_or(0)
            .max(ID_FLOOR);
        PlayerId::new(highest.saturating_add(1))
    }

    /// Adds a player, assigning an id if it has none.
    ///
    /// # Returns
    ///
    /// The player's id on the roster.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicatePlayerId` if the player carries an id
    /// already in use.
    pub fn add_player(&mut self, mut player: Player) -> Result<PlayerId, CoreError> {
        let current: PlayerId = player.id();
        let id: PlayerId = if current.is_assigned() {
            if self.get(current).is_some() {
                return Err(CoreError::DuplicatePlayerId(current));
            }
            current
        } else {
            let id: PlayerId = self.next_id();
            player.profile_mut().assign_id(id)?;
            id
        };

        info!(id = %id, name = %player.name(), kind = %player.kind(), "Player added");
        self.players.push(player);
        Ok(id)
    }

    /// Removes a player.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::PlayerNotFound` if no player has this id.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, CoreError> {
        let index: usize = self.position_of(id)?;
        let removed: Player = self.players.remove(index);
        info!(id = %id, name = %removed.name(), "Player removed");
        Ok(removed)
    }

    /// Orders players by performance rating, best first.
    ///
    /// Players with equal ratings keep their relative order.
    pub fn sort_by_performance_rating(&mut self) {
        self.players.sort_by(|a, b| {
            b.calculate_performance_rating()
                .total_cmp(&a.calculate_performance_rating())
        });
    }

    /// Players whose name contains `query`, ignoring case, in storage order.
    #[must_use]
    pub fn search_by_name(&self, query: &str) -> Vec<&Player> {
        let needle: String = query.to_lowercase();
        self.players
            .iter()
            .filter(|player| player.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Players whose status contains `query`, ignoring case, in storage order.
    #[must_use]
    pub fn filter_by_status(&self, query: &str) -> Vec<&Player> {
        let needle: String = query.to_lowercase();
        self.players
            .iter()
            .filter(|player| player.status().to_lowercase().contains(&needle))
            .collect()
    }

    /// Signs a free agent to this club.
    ///
    /// The offer must fit the transfer budget and meet the agent's
    /// expectation. On success the budget is debited by exactly the offer
    /// and the free agent is replaced, at the same position and with the
    /// same id, by a contracted player at this club.
    ///
    /// # Arguments
    ///
    /// * `agent_id` - The free agent to sign
    /// * `salary_offer` - Salary offered, also the amount debited
    /// * `contract_until` - Canonical contract end date
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the roster unchanged, if the player does
    /// not exist or is not a free agent, the agent has signed or is closed
    /// to negotiation, the contract terms are invalid, the offer exceeds the
    /// budget, or the agent rejects the offer.
    pub fn sign_free_agent(
        &mut self,
        agent_id: PlayerId,
        salary_offer: f64,
        contract_until: &str,
    ) -> Result<PlayerId, CoreError> {
        let index: usize = self.position_of(agent_id)?;
        let Player::FreeAgent(agent) = &self.players[index] else {
            return Err(CoreError::WrongVariant {
                id: agent_id,
                expected: PlayerKind::FreeAgent.label(),
                actual: self.players[index].kind(),
            });
        };
        if agent.is_signed() {
            return Err(DomainError::AlreadySigned {
                player: agent.profile().name().to_string(),
            }
            .into());
        }
        let contract: ContractDetails =
            ContractDetails::new(&self.club_name, salary_offer, contract_until)?;
        if salary_offer > self.transfer_budget {
            warn!(
                id = %agent_id,
                offer = salary_offer,
                budget = self.transfer_budget,
                "Signing rejected: insufficient budget"
            );
            return Err(CoreError::InsufficientBudget {
                offer: salary_offer,
                budget: self.transfer_budget,
            });
        }

        let mut signed: FreeAgent = agent.clone();
        if !signed.is_available_for_negotiation() {
            return Err(DomainError::NegotiationClosed {
                player: signed.profile().name().to_string(),
            }
            .into());
        }
        if !signed.negotiate_offer(salary_offer) {
            return Err(CoreError::OfferRejected {
                id: agent_id,
                offer: salary_offer,
                expected: signed.expected_salary(),
            });
        }
        signed.accept_contract(&self.club_name)?;

        let contracted: ContractedPlayer = ContractedPlayer::from_free_agent(signed, contract);
        self.players[index] = Player::Contracted(contracted);
        self.transfer_budget -= salary_offer;
        info!(
            id = %agent_id,
            club = %self.club_name,
            salary = salary_offer,
            budget = self.transfer_budget,
            "Free agent signed"
        );
        Ok(agent_id)
    }

    /// Encodes the roster: a `club,budget` header line followed by one
    /// record per player. Every line ends with a newline.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Codec` if a player cannot be encoded.
    pub fn serialize(&self) -> Result<String, CoreError> {
        let mut out: String = format!(
            "{}{HEADER_SEPARATOR}{}\n",
            self.club_name, self.transfer_budget
        );
        for player in &self.players {
            out.push_str(&encode_player(player)?);
            out.push('\n');
        }
        Ok(out)
    }

    /// Replaces the players with those decoded from `lines`.
    ///
    /// The first non-blank line is the header. A malformed header is
    /// reported and the current name and budget are kept. Each remaining
    /// line that fails to decode, or repeats an id already loaded, is
    /// skipped and reported; the rest still load.
    pub fn load_records<I, S>(&mut self, lines: I) -> LoadReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report: LoadReport = LoadReport::default();
        let mut records = lines
            .into_iter()
            .enumerate()
            .filter(|(_, line)| !line.as_ref().trim().is_empty());

        if let Some((number, header)) = records.next() {
            match parse_header(header.as_ref()) {
                Ok((club_name, budget)) => {
                    self.club_name = club_name;
                    self.transfer_budget = budget;
                }
                Err(reason) => {
                    warn!(line = number + 1, %reason, "Roster header skipped");
                    report.failures.push(LoadFailure {
                        line: number + 1,
                        reason,
                    });
                }
            }
        }

        let mut staged: Self = Self {
            club_name: self.club_name.clone(),
            transfer_budget: self.transfer_budget,
            players: Vec::new(),
        };
        for (number, line) in records {
            let outcome: Result<PlayerId, String> = decode_player(line.as_ref())
                .map_err(|e| e.to_string())
                .and_then(|player| staged.add_player(player).map_err(|e| e.to_string()));
            match outcome {
                Ok(_) => report.loaded += 1,
                Err(reason) => {
                    warn!(line = number + 1, %reason, "Player record skipped");
                    report.skipped += 1;
                    report.failures.push(LoadFailure {
                        line: number + 1,
                        reason,
                    });
                }
            }
        }

        self.players = staged.players;
        info!(
            club = %self.club_name,
            loaded = report.loaded,
            skipped = report.skipped,
            "Roster loaded"
        );
        report
    }
}

fn validate_budget(budget: f64) -> Result<(), CoreError> {
    if !budget.is_finite() || budget < 0.0 {
        return Err(CoreError::InvalidBudget(budget));
    }
    Ok(())
}

fn parse_header(line: &str) -> Result<(String, f64), String> {
    let (club_name, budget) = line
        .trim_end_matches(['\r', '\n'])
        .rsplit_once(HEADER_SEPARATOR)
        .ok_or_else(|| String::from("Header must be 'club,budget'"))?;
    validate_club_name(club_name).map_err(|e| e.to_string())?;
    let budget: f64 = budget
        .trim()
        .parse()
        .map_err(|_| format!("Invalid transfer budget '{budget}'"))?;
    validate_budget(budget).map_err(|e| e.to_string())?;
    Ok((club_name.to_string(), budget))
}
