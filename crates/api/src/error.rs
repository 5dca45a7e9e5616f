// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::password_policy::PasswordPolicyError;
use club_roster::CoreError;
use club_roster_domain::{DomainError, ErrorKind};

/// Authentication, authorization and account errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// The username is malformed.
    InvalidUsername {
        /// Why the username was rejected.
        reason: String,
    },
    /// An account with this username already exists.
    DuplicateUser {
        /// The username.
        username: String,
    },
    /// No account with this username exists.
    UserNotFound {
        /// The username.
        username: String,
    },
    /// The acting user tried to delete or re-role their own account.
    SelfModification {
        /// The action that was attempted.
        action: String,
    },
    /// The new password does not meet the policy.
    PasswordPolicy(PasswordPolicyError),
    /// The password could not be hashed or verified.
    Hashing {
        /// The underlying failure.
        message: String,
    },
    /// A stored user record could not be read.
    InvalidUserRecord {
        /// Why the record was rejected.
        reason: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::InvalidUsername { reason } => write!(f, "Invalid username: {reason}"),
            Self::DuplicateUser { username } => {
                write!(f, "Username '{username}' already exists")
            }
            Self::UserNotFound { username } => write!(f, "User '{username}' not found"),
            Self::SelfModification { action } => {
                write!(f, "Cannot {action} your own account")
            }
            Self::PasswordPolicy(err) => write!(f, "{err}"),
            Self::Hashing { message } => write!(f, "Password hashing failed: {message}"),
            Self::InvalidUserRecord { reason } => write!(f, "Invalid user record: {reason}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<PasswordPolicyError> for AuthError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::PasswordPolicy(err)
    }
}

impl From<bcrypt::BcryptError> for AuthError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::Hashing {
            message: err.to_string(),
        }
    }
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
    /// Password policy violation.
    PasswordPolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
            Self::PasswordPolicyViolation { message } => {
                write!(f, "Password policy violation: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
            AuthError::InvalidUsername { reason } => Self::InvalidInput {
                field: String::from("username"),
                message: reason,
            },
            AuthError::DuplicateUser { username } => Self::DomainRuleViolation {
                rule: String::from("unique_username"),
                message: format!("Username '{username}' already exists"),
            },
            AuthError::UserNotFound { username } => Self::ResourceNotFound {
                resource_type: String::from("User"),
                message: format!("User '{username}' does not exist"),
            },
            AuthError::SelfModification { action } => Self::DomainRuleViolation {
                rule: String::from("no_self_modification"),
                message: format!("Cannot {action} your own account"),
            },
            AuthError::PasswordPolicy(err) => Self::from(err),
            AuthError::Hashing { message } => Self::Internal {
                message: format!("Password hashing failed: {message}"),
            },
            AuthError::InvalidUserRecord { reason } => Self::Internal {
                message: format!("Invalid user record: {reason}"),
            },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::PasswordPolicyViolation {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// Validation failures name the offending field; state conflicts name the
/// rule that blocked the operation.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    if err.kind() == ErrorKind::StateConflict {
        let rule: &str = match &err {
            DomainError::SalaryNotAdjustable { .. } => "adjustable_salary",
            DomainError::NotListedForTransfer { .. } => "listed_for_transfer",
            DomainError::FeeBelowAskingPrice { .. } => "minimum_transfer_fee",
            DomainError::ContractTerminated { .. } => "active_contract",
            DomainError::NegotiationClosed { .. } => "open_negotiation",
            _ => "unsigned_free_agent",
        };
        return ApiError::DomainRuleViolation {
            rule: rule.to_string(),
            message,
        };
    }

    let field: &str = match &err {
        DomainError::InvalidName(_) => "name",
        DomainError::InvalidNationality(_) => "nationality",
        DomainError::InvalidOrigin(_) => "origin",
        DomainError::InvalidAge { .. } => "age",
        DomainError::InvalidMeasurement { field, .. }
        | DomainError::NegativeStatistic { field, .. }
        | DomainError::InvalidDate { field, .. } => *field,
        DomainError::InvalidPlayerId(_) | DomainError::PlayerIdAlreadyAssigned { .. } => "id",
        DomainError::InvalidInjury(_) => "injury",
        DomainError::InvalidClubName(_) => "club",
        DomainError::InvalidSalary { .. } => "salary",
        DomainError::InvalidTransferFee { .. } => "fee",
        DomainError::InvalidPosition(_) => "position",
        _ => "input",
    };
    ApiError::InvalidInput {
        field: field.to_string(),
        message,
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    let message: String = err.to_string();
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::PlayerNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Player"),
            message,
        },
        CoreError::DuplicatePlayerId(_) => ApiError::DomainRuleViolation {
            rule: String::from("unique_player_id"),
            message,
        },
        CoreError::WrongVariant { .. } => ApiError::DomainRuleViolation {
            rule: String::from("player_kind"),
            message,
        },
        CoreError::InsufficientBudget { .. } => ApiError::DomainRuleViolation {
            rule: String::from("transfer_budget"),
            message,
        },
        CoreError::InvalidBudget(_) => ApiError::InvalidInput {
            field: String::from("budget"),
            message,
        },
        CoreError::OfferRejected { .. } => ApiError::DomainRuleViolation {
            rule: String::from("salary_expectation"),
            message,
        },
        CoreError::Codec(_) => ApiError::Internal { message },
    }
}
