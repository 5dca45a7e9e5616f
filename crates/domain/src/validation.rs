// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-level validation rules shared by every player variant.
//!
//! Every rule here is pure: it inspects its input and either accepts it
//! or returns the `DomainError` describing the violation. Callers run all
//! relevant rules before touching any state.

use crate::error::DomainError;
use time::Date;

/// Canonical on-disk and on-screen date layout.
const DATE_FORMAT: &[time::format_description::FormatItem<'_>] =
    time::macros::format_description!("[year]-[month]-[day]");

/// Length of a canonical date string.
pub const CANONICAL_DATE_LEN: usize = 10;

/// Validates a player's name.
///
/// # Errors
///
/// Returns `DomainError::InvalidName` if the name is empty or whitespace.
pub fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates a nationality.
///
/// # Errors
///
/// Returns `DomainError::InvalidNationality` if the value is empty or whitespace.
pub fn validate_nationality(nationality: &str) -> Result<(), DomainError> {
    if nationality.trim().is_empty() {
        return Err(DomainError::InvalidNationality(String::from(
            "Nationality cannot be empty",
        )));
    }
    Ok(())
}

/// Validates a place of origin.
///
/// # Errors
///
/// Returns `DomainError::InvalidOrigin` if the value is empty or whitespace.
pub fn validate_origin(origin: &str) -> Result<(), DomainError> {
    if origin.trim().is_empty() {
        return Err(DomainError::InvalidOrigin(String::from(
            "Origin cannot be empty",
        )));
    }
    Ok(())
}

/// Validates a club name.
///
/// # Errors
///
/// Returns `DomainError::InvalidClubName` if the value is empty, whitespace,
/// or contains a line break.
pub fn validate_club_name(club: &str) -> Result<(), DomainError> {
    if club.trim().is_empty() {
        return Err(DomainError::InvalidClubName(String::from(
            "Club name cannot be empty",
        )));
    }
    if club.contains(['\n', '\r']) {
        return Err(DomainError::InvalidClubName(String::from(
            "Club name must fit on one line",
        )));
    }
    Ok(())
}

/// Validates an age.
///
/// # Errors
///
/// Returns `DomainError::InvalidAge` if the age is zero.
pub const fn validate_age(age: u32) -> Result<(), DomainError> {
    if age == 0 {
        return Err(DomainError::InvalidAge { age });
    }
    Ok(())
}

/// Validates that a measurement is finite and strictly positive.
///
/// # Errors
///
/// Returns `DomainError::InvalidMeasurement` naming `field` otherwise.
pub fn validate_positive(field: &'static str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DomainError::InvalidMeasurement { field, value });
    }
    Ok(())
}

/// Validates that an amount is finite and not negative.
///
/// # Errors
///
/// Returns `DomainError::InvalidMeasurement` naming `field` otherwise.
pub fn validate_non_negative(field: &'static str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::InvalidMeasurement { field, value });
    }
    Ok(())
}

/// Converts a signed statistics delta into a counter increment.
///
/// # Errors
///
/// Returns `DomainError::NegativeStatistic` if `value` is negative.
pub fn validate_count(field: &'static str, value: i32) -> Result<u32, DomainError> {
    u32::try_from(value).map_err(|_| DomainError::NegativeStatistic {
        field,
        value: i64::from(value),
    })
}

/// Validates that a date string is in the canonical `YYYY-MM-DD` form.
///
/// Both the length and the calendar value are checked, so `2026-02-30`
/// is rejected.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` naming `field` otherwise.
pub fn validate_date(field: &'static str, value: &str) -> Result<(), DomainError> {
    parse_date(field, value).map(|_| ())
}

/// Parses a canonical date string.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` naming `field` if the value is not canonical.
pub fn parse_date(field: &'static str, value: &str) -> Result<Date, DomainError> {
    let invalid = || DomainError::InvalidDate {
        field,
        value: value.to_string(),
    };
    if value.len() != CANONICAL_DATE_LEN {
        return Err(invalid());
    }
    Date::parse(value, DATE_FORMAT).map_err(|_| invalid())
}

/// Formats a date in canonical form.
#[must_use]
pub fn format_date(date: Date) -> String {
    // The format only uses calendar components, which every `Date` has.
    date.format(DATE_FORMAT).unwrap_or_else(|_| {
        format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            u8::from(date.month()),
            date.day()
        )
    })
}
