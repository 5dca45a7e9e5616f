// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use club_roster::{Command, Roster, TransitionResult, apply};
use club_roster_domain::{Player, PlayerId, PlayerRole};
use tracing::{info, warn};

use crate::auth::{AuthenticatedActor, AuthorizationService, CredentialStore, Role, UserAccount};
use crate::error::{ApiError, translate_core_error};
use crate::request_response::{
    ChangePasswordRequest, CommandResponse, ListPlayersResponse, LoginRequest, LoginResponse,
    PlayerDetails, PlayerSummary, RegisterUserRequest, UserSummary,
};

/// The result of a roster-changing API operation.
///
/// Carries the response alongside the roster it produced. The caller
/// replaces its roster with `new_roster`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The roster after the operation.
    pub new_roster: Roster,
}

/// Authenticates a user.
///
/// # Returns
///
/// The actor to pass to later operations, and the greeting to show.
///
/// # Errors
///
/// Returns `ApiError::AuthenticationFailed` if the credentials do not match.
pub fn login(
    store: &CredentialStore,
    request: &LoginRequest,
) -> Result<(AuthenticatedActor, LoginResponse), ApiError> {
    let actor: AuthenticatedActor = store.authenticate(&request.username, &request.password)?;
    let response: LoginResponse = LoginResponse {
        username: actor.username.clone(),
        role: actor.role.to_string(),
        message: format!("Welcome, {} ({})", actor.username, actor.role),
    };
    Ok((actor, response))
}

/// Applies a roster command on behalf of an actor.
///
/// This function:
/// - Verifies the actor may change the roster (guests may not)
/// - Applies the command to a copy of the roster
/// - Translates any errors to API errors
///
/// # Arguments
///
/// * `roster` - The current roster
/// * `command` - The command to apply
/// * `actor` - The authenticated actor performing this action
///
/// # Errors
///
/// Returns an error if:
/// - The actor is not authorized
/// - The command violates a domain or roster rule
pub fn execute(
    roster: &Roster,
    command: Command,
    actor: &AuthenticatedActor,
) -> Result<ApiResult<CommandResponse>, ApiError> {
    let action: &'static str = command.name();
    AuthorizationService::authorize_roster_mutation(actor, action).inspect_err(|_| {
        warn!(action, username = %actor.username, role = %actor.role, "Command denied");
    })?;

    let transition: TransitionResult = apply(roster, command).map_err(translate_core_error)?;

    info!(action, username = %actor.username, "Command executed");
    Ok(ApiResult {
        response: CommandResponse {
            action: transition.action.to_string(),
            message: transition.details,
        },
        new_roster: transition.new_roster,
    })
}

/// Registers a new account. Admin only.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, or the username or
/// password is rejected.
pub fn register_user(
    store: &mut CredentialStore,
    request: &RegisterUserRequest,
    actor: &AuthenticatedActor,
) -> Result<UserSummary, ApiError> {
    AuthorizationService::authorize_user_management(actor, "register_user")?;
    store.register(&request.username, &request.password, request.role)?;
    Ok(UserSummary {
        username: request.username.clone(),
        role: request.role.to_string(),
    })
}

/// Deletes an account. Admin only; admins cannot delete themselves.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, targets their own
/// account, or the user does not exist.
pub fn delete_user(
    store: &mut CredentialStore,
    username: &str,
    actor: &AuthenticatedActor,
) -> Result<UserSummary, ApiError> {
    let removed: UserAccount = store.delete_user(actor, username)?;
    Ok(UserSummary::from(&removed))
}

/// Changes another account's role. Admin only.
///
/// # Errors
///
/// Returns an error if the actor is not an admin, targets their own
/// account, or the user does not exist.
pub fn change_role(
    store: &mut CredentialStore,
    username: &str,
    role: Role,
    actor: &AuthenticatedActor,
) -> Result<UserSummary, ApiError> {
    store.change_role(actor, username, role)?;
    Ok(UserSummary {
        username: username.to_string(),
        role: role.to_string(),
    })
}

/// Changes the actor's own password.
///
/// # Errors
///
/// Returns an error if the current password is wrong or the new one
/// violates the password policy.
pub fn change_password(
    store: &mut CredentialStore,
    request: &ChangePasswordRequest,
    actor: &AuthenticatedActor,
) -> Result<(), ApiError> {
    store.change_password(
        &actor.username,
        &request.current_password,
        &request.new_password,
    )?;
    Ok(())
}

/// Lists every account. Admin only.
///
/// # Errors
///
/// Returns an error if the actor is not an admin.
pub fn list_users(
    store: &CredentialStore,
    actor: &AuthenticatedActor,
) -> Result<Vec<UserSummary>, ApiError> {
    AuthorizationService::authorize_user_management(actor, "list_users")?;
    Ok(store.users().iter().map(UserSummary::from).collect())
}

/// Lists every player in roster order.
#[must_use]
pub fn list_players(roster: &Roster) -> ListPlayersResponse {
    listing(roster, roster.players().iter())
}

/// Lists players whose name contains `query`, ignoring case.
#[must_use]
pub fn search_players(roster: &Roster, query: &str) -> ListPlayersResponse {
    listing(roster, roster.search_by_name(query).into_iter())
}

/// Lists players whose status contains `query`, ignoring case.
#[must_use]
pub fn filter_players(roster: &Roster, query: &str) -> ListPlayersResponse {
    listing(roster, roster.filter_by_status(query).into_iter())
}

/// Returns the full details of one player.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no player has this id.
pub fn player_details(roster: &Roster, id: PlayerId) -> Result<PlayerDetails, ApiError> {
    let player: &Player = roster.get(id).ok_or_else(|| ApiError::ResourceNotFound {
        resource_type: String::from("Player"),
        message: format!("No player with id {id}"),
    })?;
    Ok(PlayerDetails {
        summary: PlayerSummary::from(player),
        description: player.describe(),
    })
}

fn listing<'a>(roster: &Roster, players: impl Iterator<Item = &'a Player>) -> ListPlayersResponse {
    ListPlayersResponse {
        club_name: roster.club_name().to_string(),
        transfer_budget: roster.transfer_budget(),
        players: players.map(PlayerSummary::from).collect(),
    }
}
