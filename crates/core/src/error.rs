// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use club_roster_domain::{CodecError, DomainError, PlayerId, PlayerKind};

/// Errors that can occur during roster operations and transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// No player with this id is on the roster.
    PlayerNotFound(PlayerId),
    /// A player with this id is already on the roster.
    DuplicatePlayerId(PlayerId),
    /// The operation needs a different kind of player.
    WrongVariant {
        /// The player addressed.
        id: PlayerId,
        /// What the operation needs.
        expected: &'static str,
        /// What the player is.
        actual: PlayerKind,
    },
    /// The transfer budget cannot cover the offer.
    InsufficientBudget {
        /// The salary offered.
        offer: f64,
        /// The budget available.
        budget: f64,
    },
    /// The budget value itself is invalid.
    InvalidBudget(f64),
    /// A free agent turned down the offer.
    OfferRejected {
        /// The player addressed.
        id: PlayerId,
        /// The salary offered.
        offer: f64,
        /// The player's expectation.
        expected: f64,
    },
    /// A player record could not be encoded.
    Codec(CodecError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::PlayerNotFound(id) => write!(f, "No player with id {id}"),
            Self::DuplicatePlayerId(id) => write!(f, "A player with id {id} already exists"),
            Self::WrongVariant {
                id,
                expected,
                actual,
            } => write!(f, "Player {id} is a {actual}, expected: {expected}"),
            Self::InsufficientBudget { offer, budget } => write!(
                f,
                "Insufficient transfer budget: offer {offer:.2} exceeds {budget:.2}"
            ),
            Self::InvalidBudget(value) => {
                write!(f, "Invalid transfer budget: {value}. Must be 0 or more")
            }
            Self::OfferRejected {
                id,
                offer,
                expected,
            } => write!(
                f,
                "Player {id} rejected the offer of {offer:.2} (expects {expected:.2})"
            ),
            Self::Codec(err) => write!(f, "Record encoding failed: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<CodecError> for CoreError {
    fn from(err: CodecError) -> Self {
        Self::Codec(err)
    }
}
