// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Text codec for persisted player records.
//!
//! Each player is one line made of three tab-separated sections:
//!
//! ```text
//! TAG <TAB> BASE <TAB> TAIL
//! ```
//!
//! `TAG` names the variant (`GK`, `CP`, `FA`). `BASE` is the JSON object
//! of the shared profile. `TAIL` is a JSON array of positional values:
//! field-player variants start with the position code and the six
//! counters, goalkeepers with their five counters, and the contracted
//! and free-agent variants append their own fields after that.
//!
//! JSON escapes control characters inside strings, so a raw tab only
//! ever appears as a separator.

use crate::contract::{ContractDetails, ContractedPlayer, LoanSpell, TransferListing};
use crate::error::DomainError;
use crate::field_player::{FieldPlayer, FieldStats, Position};
use crate::free_agent::{FreeAgent, NegotiationState};
use crate::goalkeeper::{Goalkeeper, GoalkeeperStats};
use crate::player::{PlayerKind, PlayerProfile, PlayerRole};
use crate::variant::Player;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Section separator within a record.
pub const SECTION_SEPARATOR: char = '\t';

/// Errors raised while encoding or decoding a player record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// A section of the record is absent.
    #[error("Record is missing its {0} section")]
    MissingSection(&'static str),
    /// The variant tag is not recognised.
    #[error("Unknown record tag '{0}'")]
    UnknownTag(String),
    /// A section is not valid JSON of the expected shape.
    #[error("Malformed {section} section: {message}")]
    Json {
        /// Which section failed.
        section: &'static str,
        /// Parser message.
        message: String,
    },
    /// The tail ended before a required value.
    #[error("Missing tail value {index} ({field})")]
    MissingField {
        /// Position in the tail.
        index: usize,
        /// The field expected there.
        field: &'static str,
    },
    /// A tail value has the wrong JSON type or is out of range.
    #[error("Tail value {index} ({field}) has the wrong type or range")]
    WrongType {
        /// Position in the tail.
        index: usize,
        /// The field expected there.
        field: &'static str,
    },
    /// The tail carries more values than the variant defines.
    #[error("Record has {extra} unexpected trailing value(s)")]
    TrailingValues {
        /// How many values were left over.
        extra: usize,
    },
    /// A numeric value cannot be written as a JSON number.
    #[error("Value for {0} is not a finite number")]
    NonFinite(&'static str),
    /// The decoded values violate a player invariant.
    #[error("Record violates a player rule: {0}")]
    Invalid(#[from] DomainError),
}

/// Encodes one player as a single record line (without the newline).
///
/// # Errors
///
/// Returns `CodecError::NonFinite` if a numeric field holds an infinity or
/// NaN, or `CodecError::Json` if the base record cannot be serialized.
pub fn encode_player(player: &Player) -> Result<String, CodecError> {
    let profile: &PlayerProfile = player.profile();
    ensure_finite("height", profile.height())?;
    ensure_finite("weight", profile.weight())?;
    ensure_finite("market value", profile.market_value())?;
    let base: String = serde_json::to_string(player.profile()).map_err(|e| CodecError::Json {
        section: "base",
        message: e.to_string(),
    })?;

    let mut tail: TailWriter = TailWriter::default();
    match player {
        Player::Goalkeeper(keeper) => write_keeper_stats(&mut tail, keeper.stats()),
        Player::Contracted(contracted) => {
            write_field(&mut tail, contracted.field());
            let contract: &ContractDetails = contracted.contract();
            tail.string(contract.club_name());
            tail.number("salary", contract.salary())?;
            tail.string(contract.contract_until());
            tail.optional_string(contract.loan().map(|spell| spell.club.as_str()));
            tail.optional_string(contract.loan_end_date());
            tail.bool(contracted.is_listed_for_transfer());
            tail.number("transfer fee", contracted.transfer_fee())?;
            tail.string(contracted.transfer_conditions());
        }
        Player::FreeAgent(agent) => {
            write_field(&mut tail, agent.field());
            tail.number("expected salary", agent.expected_salary())?;
            tail.string(agent.last_club());
            tail.count(agent.months_without_club());
            tail.string(agent.negotiation_state().as_str());
        }
    }

    Ok(format!(
        "{}{SECTION_SEPARATOR}{base}{SECTION_SEPARATOR}{}",
        player.kind().tag(),
        tail.finish()
    ))
}

/// Decodes one record line.
///
/// The tag is resolved first; the base record and tail are then decoded
/// for that variant and every player invariant is checked again.
///
/// # Errors
///
/// Returns a `CodecError` describing the first problem found.
pub fn decode_player(line: &str) -> Result<Player, CodecError> {
    let line: &str = line.trim_end_matches(['\r', '\n']);
    let mut sections = line.splitn(3, SECTION_SEPARATOR);

    let tag: &str = sections
        .next()
        .filter(|tag| !tag.is_empty())
        .ok_or(CodecError::MissingSection("tag"))?;
    let base: &str = sections.next().ok_or(CodecError::MissingSection("base"))?;
    let tail: &str = sections.next().ok_or(CodecError::MissingSection("tail"))?;

    let kind: PlayerKind =
        PlayerKind::from_tag(tag).ok_or_else(|| CodecError::UnknownTag(tag.to_string()))?;

    let profile: PlayerProfile = serde_json::from_str(base).map_err(|e| CodecError::Json {
        section: "base",
        message: e.to_string(),
    })?;
    profile.validate_restored()?;

    let values: Vec<Value> = serde_json::from_str(tail).map_err(|e| CodecError::Json {
        section: "tail",
        message: e.to_string(),
    })?;
    let mut reader: TailReader = TailReader::new(values);

    let player: Player = match kind {
        PlayerKind::Goalkeeper => {
            let stats: GoalkeeperStats = read_keeper_stats(&mut reader)?;
            Player::Goalkeeper(Goalkeeper::from_parts(profile, stats))
        }
        PlayerKind::Contracted => {
            let field: FieldPlayer = read_field(&mut reader, profile)?;
            Player::Contracted(read_contract_tail(&mut reader, field)?)
        }
        PlayerKind::FreeAgent => {
            let field: FieldPlayer = read_field(&mut reader, profile)?;
            let expected_salary: f64 = reader.number("expected salary")?;
            let last_club: String = reader.string("last club")?;
            let months: u32 = reader.count("months without club")?;
            let state: NegotiationState = match reader.string("negotiation state")?.as_str() {
                "Available" => NegotiationState::Available,
                "Closed" => NegotiationState::Closed,
                "Signed" => NegotiationState::Signed,
                _ => {
                    return Err(CodecError::WrongType {
                        index: reader.index - 1,
                        field: "negotiation state",
                    });
                }
            };
            Player::FreeAgent(FreeAgent::from_parts(
                field,
                expected_salary,
                last_club,
                months,
                state,
            )?)
        }
    };
    reader.finish()?;

    debug!(tag, id = %player.id(), "Player record decoded");
    Ok(player)
}

fn write_field(tail: &mut TailWriter, field: &FieldPlayer) {
    let stats: &FieldStats = field.stats();
    tail.count(u32::from(field.position().code()));
    tail.count(stats.games);
    tail.count(stats.goals);
    tail.count(stats.assists);
    tail.count(stats.shots);
    tail.count(stats.tackles);
    tail.count(stats.key_passes);
}

fn write_keeper_stats(tail: &mut TailWriter, stats: &GoalkeeperStats) {
    tail.count(stats.matches_played);
    tail.count(stats.clean_sheets);
    tail.count(stats.saves_total);
    tail.count(stats.goals_conceded);
    tail.count(stats.penalties_saved);
}

fn read_field(reader: &mut TailReader, profile: PlayerProfile) -> Result<FieldPlayer, CodecError> {
    let code: u32 = reader.count("position")?;
    let position: Position = u8::try_from(code)
        .ok()
        .and_then(|code| Position::from_code(code).ok())
        .ok_or(CodecError::WrongType {
            index: reader.index - 1,
            field: "position",
        })?;
    let stats: FieldStats = FieldStats {
        games: reader.count("games")?,
        goals: reader.count("goals")?,
        assists: reader.count("assists")?,
        shots: reader.count("shots")?,
        tackles: reader.count("tackles")?,
        key_passes: reader.count("key passes")?,
    };
    Ok(FieldPlayer::from_parts(profile, position, stats))
}

fn read_keeper_stats(reader: &mut TailReader) -> Result<GoalkeeperStats, CodecError> {
    Ok(GoalkeeperStats {
        matches_played: reader.count("matches played")?,
        clean_sheets: reader.count("clean sheets")?,
        saves_total: reader.count("saves")?,
        goals_conceded: reader.count("goals conceded")?,
        penalties_saved: reader.count("penalties saved")?,
    })
}

fn read_contract_tail(
    reader: &mut TailReader,
    field: FieldPlayer,
) -> Result<ContractedPlayer, CodecError> {
    let club: String = reader.string("club")?;
    let salary: f64 = reader.number("salary")?;
    let contract_until: String = reader.string("contract until")?;
    let loan_index: usize = reader.index;
    let loan_club: Option<String> = reader.optional_string("loan club")?;
    let loan_end: Option<String> = reader.optional_string("loan end date")?;
    let listed: bool = reader.bool("listed")?;
    let fee: f64 = reader.number("transfer fee")?;
    let conditions: String = reader.string("transfer conditions")?;

    let loan: Option<LoanSpell> = match (loan_club, loan_end) {
        (Some(club), Some(end_date)) => Some(LoanSpell { club, end_date }),
        (None, None) => None,
        _ => {
            return Err(CodecError::WrongType {
                index: loan_index,
                field: "loan",
            });
        }
    };
    let contract: ContractDetails = ContractDetails::restore(club, salary, contract_until, loan)?;

    let listing: Option<TransferListing> = if listed {
        if !fee.is_finite() || fee <= 0.0 {
            return Err(CodecError::Invalid(DomainError::InvalidTransferFee { fee }));
        }
        Some(TransferListing { fee, conditions })
    } else {
        None
    };

    Ok(ContractedPlayer::from_parts(field, contract, listing))
}

/// `serde_json` writes infinities and NaN as `null`, which would not read back.
const fn ensure_finite(field: &'static str, value: f64) -> Result<f64, CodecError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CodecError::NonFinite(field))
    }
}

/// Appends positional values to a record tail.
#[derive(Default)]
struct TailWriter {
    values: Vec<Value>,
}

impl TailWriter {
    fn count(&mut self, value: u32) {
        self.values.push(Value::from(value));
    }

    fn number(&mut self, field: &'static str, value: f64) -> Result<(), CodecError> {
        self.values.push(Value::from(ensure_finite(field, value)?));
        Ok(())
    }

    fn string(&mut self, value: &str) {
        self.values.push(Value::from(value));
    }

    fn optional_string(&mut self, value: Option<&str>) {
        self.values.push(value.map_or(Value::Null, Value::from));
    }

    fn bool(&mut self, value: bool) {
        self.values.push(Value::Bool(value));
    }

    fn finish(self) -> String {
        Value::Array(self.values).to_string()
    }
}

/// Reads positional values from a record tail in order.
struct TailReader {
    values: std::vec::IntoIter<Value>,
    index: usize,
}

impl TailReader {
    fn new(values: Vec<Value>) -> Self {
        Self {
            values: values.into_iter(),
            index: 0,
        }
    }

    fn next(&mut self, field: &'static str) -> Result<(usize, Value), CodecError> {
        let index: usize = self.index;
        let value: Value = self
            .values
            .next()
            .ok_or(CodecError::MissingField { index, field })?;
        self.index += 1;
        Ok((index, value))
    }

    fn count(&mut self, field: &'static str) -> Result<u32, CodecError> {
        let (index, value) = self.next(field)?;
        value
            .as_u64()
            .and_then(|raw| u32::try_from(raw).ok())
            .ok_or(CodecError::WrongType { index, field })
    }

    fn number(&mut self, field: &'static str) -> Result<f64, CodecError> {
        let (index, value) = self.next(field)?;
        value.as_f64().ok_or(CodecError::WrongType { index, field })
    }

    fn string(&mut self, field: &'static str) -> Result<String, CodecError> {
        match self.next(field)? {
            (_, Value::String(text)) => Ok(text),
            (index, _) => Err(CodecError::WrongType { index, field }),
        }
    }

    fn optional_string(&mut self, field: &'static str) -> Result<Option<String>, CodecError> {
        match self.next(field)? {
            (_, Value::String(text)) => Ok(Some(text)),
            (_, Value::Null) => Ok(None),
            (index, _) => Err(CodecError::WrongType { index, field }),
        }
    }

    fn bool(&mut self, field: &'static str) -> Result<bool, CodecError> {
        match self.next(field)? {
            (_, Value::Bool(flag)) => Ok(flag),
            (index, _) => Err(CodecError::WrongType { index, field }),
        }
    }

    fn finish(self) -> Result<(), CodecError> {
        let extra: usize = self.values.len();
        if extra > 0 {
            return Err(CodecError::TrailingValues { extra });
        }
        Ok(())
    }
}
