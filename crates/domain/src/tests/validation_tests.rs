// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_date;
use crate::{DomainError, ErrorKind, format_date, parse_date, validate_club_name, validate_date};
use time::Month;

#[test]
fn test_validate_date_accepts_canonical_date() {
    assert!(validate_date("contract end date", "2028-06-30").is_ok());
}

#[test]
fn test_validate_date_rejects_short_form() {
    let result: Result<(), DomainError> = validate_date("contract end date", "2028-6-30");
    assert!(matches!(
        result,
        Err(DomainError::InvalidDate {
            field: "contract end date",
            ..
        })
    ));
}

#[test]
fn test_validate_date_rejects_impossible_calendar_date() {
    assert!(validate_date("loan end date", "2026-02-30").is_err());
}

#[test]
fn test_validate_date_rejects_other_separators() {
    assert!(validate_date("loan end date", "2026/02/20").is_err());
    assert!(validate_date("loan end date", "20-02-2026").is_err());
}

#[test]
fn test_parse_and_format_date_agree() {
    let date = parse_date("date", "2026-01-05").unwrap();
    assert_eq!(date, create_test_date(2026, Month::January, 5));
    assert_eq!(format_date(date), "2026-01-05");
}

#[test]
fn test_validate_club_name_rejects_whitespace() {
    assert!(matches!(
        validate_club_name("   "),
        Err(DomainError::InvalidClubName(_))
    ));
}

#[test]
fn test_validate_club_name_rejects_line_breaks() {
    for name in ["FC\nDynamo", "FC\rDynamo", "FC Dynamo\r\n"] {
        assert!(matches!(
            validate_club_name(name),
            Err(DomainError::InvalidClubName(_))
        ));
    }
    assert!(validate_club_name("FC Dynamo Kyiv").is_ok());
}

#[test]
fn test_error_kind_classification() {
    let validation: DomainError = DomainError::InvalidAge { age: 0 };
    let conflict: DomainError = DomainError::NotListedForTransfer {
        player: String::from("Lena Vogt"),
    };

    assert_eq!(validation.kind(), ErrorKind::Validation);
    assert!(!validation.is_state_conflict());
    assert_eq!(conflict.kind(), ErrorKind::StateConflict);
    assert!(conflict.is_state_conflict());
}

#[test]
fn test_error_display_names_the_field() {
    let error: DomainError = DomainError::InvalidMeasurement {
        field: "height",
        value: -1.0,
    };
    assert_eq!(error.to_string(), "Invalid height: -1");
}
