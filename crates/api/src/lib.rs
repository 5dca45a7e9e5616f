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

mod auth;
mod error;
mod handlers;
mod password_policy;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{
    AuthenticatedActor, AuthorizationService, CredentialStore, DEFAULT_ADMIN_PASSWORD,
    DEFAULT_ADMIN_USERNAME, MIN_USERNAME_LENGTH, Role, USER_RECORD_SEPARATOR, UserAccount,
};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use handlers::{
    ApiResult, change_password, change_role, delete_user, execute, filter_players, list_players,
    list_users, login, player_details, register_user, search_players,
};
pub use password_policy::{BCRYPT_MAX_PASSWORD_BYTES, PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    ChangePasswordRequest, CommandResponse, ListPlayersResponse, LoginRequest, LoginResponse,
    PlayerDetails, PlayerSummary, RegisterUserRequest, UserSummary,
};
