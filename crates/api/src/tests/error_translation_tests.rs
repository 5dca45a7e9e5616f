// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use club_roster::CoreError;
use club_roster_domain::{DomainError, PlayerId, PlayerKind};

use crate::{ApiError, AuthError, PasswordPolicyError, translate_core_error, translate_domain_error};

#[test]
fn test_validation_errors_name_the_field() {
    let err: ApiError = translate_domain_error(DomainError::InvalidMeasurement {
        field: "height",
        value: -1.0,
    });

    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "height"));
}

#[test]
fn test_state_conflicts_name_the_rule() {
    let err: ApiError = translate_domain_error(DomainError::FeeBelowAskingPrice {
        offered: 10.0,
        asking: 20.0,
    });

    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "minimum_transfer_fee"
    ));
}

#[test]
fn test_core_errors_translate() {
    assert!(matches!(
        translate_core_error(CoreError::PlayerNotFound(PlayerId::new(1))),
        ApiError::ResourceNotFound { .. }
    ));
    assert!(matches!(
        translate_core_error(CoreError::InsufficientBudget {
            offer: 2.0,
            budget: 1.0
        }),
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "transfer_budget"
    ));
    assert!(matches!(
        translate_core_error(CoreError::WrongVariant {
            id: PlayerId::new(1001),
            expected: "Goalkeeper",
            actual: PlayerKind::Contracted,
        }),
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "player_kind"
    ));
    assert!(matches!(
        translate_core_error(CoreError::DomainViolation(DomainError::InvalidAge { age: 0 })),
        ApiError::InvalidInput { ref field, .. } if field == "age"
    ));
}

#[test]
fn test_auth_errors_translate() {
    let api: ApiError = ApiError::from(AuthError::PasswordPolicy(PasswordPolicyError::Blank));
    assert_eq!(
        api,
        ApiError::PasswordPolicyViolation {
            message: String::from("Password must not be blank")
        }
    );

    let api: ApiError = ApiError::from(AuthError::UserNotFound {
        username: String::from("ghost"),
    });
    assert!(matches!(api, ApiError::ResourceNotFound { .. }));
}
