// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Broad classification of a domain error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A constructor or mutator argument violated an invariant.
    /// Nothing was changed.
    Validation,
    /// The operation is not permitted in the entity's current state.
    /// The call was a no-op.
    StateConflict,
}

/// Errors that can occur while constructing or mutating players.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Player name is empty or invalid.
    InvalidName(String),
    /// Nationality is empty or invalid.
    InvalidNationality(String),
    /// Origin is empty or invalid.
    InvalidOrigin(String),
    /// Age must be greater than zero.
    InvalidAge {
        /// The rejected age.
        age: u32,
    },
    /// A physical measurement or monetary amount is out of range.
    InvalidMeasurement {
        /// The field being set (e.g. "height").
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Player identifier is invalid.
    InvalidPlayerId(String),
    /// The player already carries an identifier and ids are immutable.
    PlayerIdAlreadyAssigned {
        /// The id already assigned.
        current: u32,
    },
    /// Injury report is invalid.
    InvalidInjury(String),
    /// A statistics update carried a negative count.
    NegativeStatistic {
        /// The statistic being updated.
        field: &'static str,
        /// The rejected value.
        value: i64,
    },
    /// A date did not match the canonical `YYYY-MM-DD` form.
    InvalidDate {
        /// The date field being set.
        field: &'static str,
        /// The rejected input.
        value: String,
    },
    /// Club name is empty or invalid.
    InvalidClubName(String),
    /// Salary must be positive.
    InvalidSalary {
        /// The rejected salary.
        value: f64,
    },
    /// Transfer fee must be positive.
    InvalidTransferFee {
        /// The rejected fee.
        fee: f64,
    },
    /// Position code or name is not recognised.
    InvalidPosition(String),
    /// Salary cannot be adjusted from a zero or negative base.
    SalaryNotAdjustable {
        /// The current salary.
        salary: f64,
    },
    /// The player is not on the transfer list.
    NotListedForTransfer {
        /// The player's name.
        player: String,
    },
    /// The offered fee is below the listed asking price.
    FeeBelowAskingPrice {
        /// The fee offered.
        offered: f64,
        /// The minimum fee set when listing.
        asking: f64,
    },
    /// The player's contract has been terminated.
    ContractTerminated {
        /// The player's name.
        player: String,
    },
    /// The free agent is not open to negotiation.
    NegotiationClosed {
        /// The player's name.
        player: String,
    },
    /// The free agent has already signed a contract.
    AlreadySigned {
        /// The player's name.
        player: String,
    },
}

impl DomainError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::SalaryNotAdjustable { .. }
            | Self::NotListedForTransfer { .. }
            | Self::FeeBelowAskingPrice { .. }
            | Self::ContractTerminated { .. }
            | Self::NegotiationClosed { .. }
            | Self::AlreadySigned { .. } => ErrorKind::StateConflict,
            _ => ErrorKind::Validation,
        }
    }

    /// Returns true if this error reports an invalid state rather than bad input.
    #[must_use]
    pub const fn is_state_conflict(&self) -> bool {
        matches!(self.kind(), ErrorKind::StateConflict)
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidNationality(msg) => write!(f, "Invalid nationality: {msg}"),
            Self::InvalidOrigin(msg) => write!(f, "Invalid origin: {msg}"),
            Self::InvalidAge { age } => {
                write!(f, "Invalid age: {age}. Must be greater than 0")
            }
            Self::InvalidMeasurement { field, value } => {
                write!(f, "Invalid {field}: {value}")
            }
            Self::InvalidPlayerId(msg) => write!(f, "Invalid player id: {msg}"),
            Self::PlayerIdAlreadyAssigned { current } => {
                write!(f, "Player already has id {current}; ids cannot be changed")
            }
            Self::InvalidInjury(msg) => write!(f, "Invalid injury report: {msg}"),
            Self::NegativeStatistic { field, value } => {
                write!(f, "Statistic '{field}' cannot be negative (got {value})")
            }
            Self::InvalidDate { field, value } => {
                write!(f, "Invalid {field} '{value}': expected YYYY-MM-DD")
            }
            Self::InvalidClubName(msg) => write!(f, "Invalid club name: {msg}"),
            Self::InvalidSalary { value } => {
                write!(f, "Invalid salary: {value}. Must be greater than 0")
            }
            Self::InvalidTransferFee { fee } => {
                write!(f, "Invalid transfer fee: {fee}. Must be greater than 0")
            }
            Self::InvalidPosition(msg) => write!(f, "Invalid position: {msg}"),
            Self::SalaryNotAdjustable { salary } => {
                write!(
                    f,
                    "Cannot adjust salary: current salary {salary} is zero or negative"
                )
            }
            Self::NotListedForTransfer { player } => {
                write!(f, "{player} is not listed for transfer")
            }
            Self::FeeBelowAskingPrice { offered, asking } => {
                write!(
                    f,
                    "Offered fee {offered:.2} is below the asking price {asking:.2}"
                )
            }
            Self::ContractTerminated { player } => {
                write!(f, "The contract of {player} has been terminated")
            }
            Self::NegotiationClosed { player } => {
                write!(f, "{player} is not open to negotiation")
            }
            Self::AlreadySigned { player } => {
                write!(f, "{player} has already signed a contract")
            }
        }
    }
}

impl std::error::Error for DomainError {}
