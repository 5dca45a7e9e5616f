// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod codec;
mod contract;
mod error;
mod field_player;
mod free_agent;
mod goalkeeper;
mod player;
mod validation;
mod variant;

#[cfg(test)]
mod tests;

pub use codec::{CodecError, SECTION_SEPARATOR, decode_player, encode_player};
pub use contract::{
    CONTRACT_AGE_DECLINE_PCT, CONTRACT_DECLINE_AGE, CONTRACT_RATING_WEIGHT, ContractDetails,
    ContractedPlayer, LoanSpell, SALARY_VALUE_DIVISOR, TERMINATED_CLUB, TransferListing,
};
pub use error::{DomainError, ErrorKind};
pub use field_player::{FieldPlayer, FieldStats, Position};
pub use free_agent::{
    BARGAIN_MAX_AGE, BARGAIN_VALUE_RATIO, BIRTHDAY_EXPECTATION_RAISE_PCT, FreeAgent,
    NegotiationState,
};
pub use goalkeeper::{Goalkeeper, GoalkeeperStats, VETERAN_AGE};
pub use player::{Injury, PlayerId, PlayerKind, PlayerProfile, PlayerRole};
pub use validation::{
    CANONICAL_DATE_LEN, format_date, parse_date, validate_club_name, validate_date,
};
pub use variant::Player;
