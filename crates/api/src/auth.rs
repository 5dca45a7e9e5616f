// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use tracing::{info, warn};

use crate::error::AuthError;
use crate::password_policy::PasswordPolicy;

/// Separator between the fields of a user record.
pub const USER_RECORD_SEPARATOR: char = ':';

/// Minimum username length in characters.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Username of the account created when no admin exists.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Initial password of the default admin account.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// User roles for authorization.
///
/// Roles are stored in user records as their numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Full access, including user management.
    Admin,
    /// May view and change the roster.
    StandardUser,
    /// Read-only access.
    Guest,
}

impl Role {
    /// All roles in code order.
    pub const ALL: [Self; 3] = [Self::Admin, Self::StandardUser, Self::Guest];

    /// The numeric code written to user records.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Admin => 0,
            Self::StandardUser => 1,
            Self::Guest => 2,
        }
    }

    /// Resolves a numeric record code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Admin),
            1 => Some(Self::StandardUser),
            2 => Some(Self::Guest),
            _ => None,
        }
    }

    /// Returns the display name of this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::StandardUser => "Standard",
            Self::Guest => "Guest",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An authenticated user with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The username this actor logged in with.
    pub username: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `username` - The username this actor logged in with
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(username: String, role: Role) -> Self {
        Self { username, role }
    }

    /// Returns true if this actor holds the Admin role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an actor may change the roster.
    ///
    /// Admin and Standard users may; guests are read-only.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    /// * `action` - The name of the attempted action, for the error
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is a guest.
    pub fn authorize_roster_mutation(
        actor: &AuthenticatedActor,
        action: &str,
    ) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin | Role::StandardUser => Ok(()),
            Role::Guest => Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("Standard"),
            }),
        }
    }

    /// Checks if an actor may manage user accounts.
    ///
    /// Only Admin actors may.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_user_management(
        actor: &AuthenticatedActor,
        action: &str,
    ) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::StandardUser | Role::Guest => Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("Admin"),
            }),
        }
    }
}

/// A stored user account.
///
/// The password is only ever held as a bcrypt hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    username: String,
    password_hash: String,
    role: Role,
}

impl UserAccount {
    /// Creates an account from an already hashed password.
    #[must_use]
    pub const fn new(username: String, password_hash: String, role: Role) -> Self {
        Self {
            username,
            password_hash,
            role,
        }
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the stored bcrypt hash.
    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Returns the role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Checks a plaintext password against the stored hash.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Hashing` if the stored hash is malformed.
    pub fn verify_password(&self, password: &str) -> Result<bool, AuthError> {
        Ok(bcrypt::verify(password, &self.password_hash)?)
    }

    /// Encodes the account as `username:hash:roleCode`.
    #[must_use]
    pub fn encode(&self) -> String {
        format!(
            "{}{USER_RECORD_SEPARATOR}{}{USER_RECORD_SEPARATOR}{}",
            self.username,
            self.password_hash,
            self.role.code()
        )
    }

    /// Decodes a `username:hash:roleCode` record.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidUserRecord` if the record does not have
    /// exactly three fields, the username or hash is empty, or the role
    /// code is unknown.
    pub fn decode(line: &str) -> Result<Self, AuthError> {
        let fields: Vec<&str> = line
            .trim_end_matches(['\r', '\n'])
            .split(USER_RECORD_SEPARATOR)
            .collect();
        let [username, password_hash, role] = fields.as_slice() else {
            return Err(AuthError::InvalidUserRecord {
                reason: format!("expected 3 fields, found {}", fields.len()),
            });
        };
        if username.trim().is_empty() {
            return Err(AuthError::InvalidUserRecord {
                reason: String::from("empty username"),
            });
        }
        if password_hash.is_empty() {
            return Err(AuthError::InvalidUserRecord {
                reason: format!("empty password for '{username}'"),
            });
        }
        let role: Role = role
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(Role::from_code)
            .ok_or_else(|| AuthError::InvalidUserRecord {
                reason: format!("unknown role code '{role}'"),
            })?;
        Ok(Self::new(
            (*username).to_string(),
            (*password_hash).to_string(),
            role,
        ))
    }
}

/// The set of known user accounts.
///
/// Passed explicitly to whoever needs to authenticate or manage users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialStore {
    users: Vec<UserAccount>,
    bcrypt_cost: u32,
    policy: PasswordPolicy,
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl CredentialStore {
    /// Creates an empty store hashing at the given bcrypt cost.
    #[must_use]
    pub fn new(bcrypt_cost: u32) -> Self {
        Self {
            users: Vec::new(),
            bcrypt_cost,
            policy: PasswordPolicy::default(),
        }
    }

    /// All accounts in registration order.
    #[must_use]
    pub fn users(&self) -> &[UserAccount] {
        &self.users
    }

    /// Number of accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns true if no accounts exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Looks up an account by username.
    #[must_use]
    pub fn find(&self, username: &str) -> Option<&UserAccount> {
        self.users.iter().find(|user| user.username == username)
    }

    fn find_mut(&mut self, username: &str) -> Result<&mut UserAccount, AuthError> {
        self.users
            .iter_mut()
            .find(|user| user.username == username)
            .ok_or_else(|| AuthError::UserNotFound {
                username: username.to_string(),
            })
    }

    fn has_admin(&self) -> bool {
        self.users.iter().any(|user| user.role == Role::Admin)
    }

    fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(bcrypt::hash(password, self.bcrypt_cost)?)
    }

    /// Registers a new account.
    ///
    /// # Arguments
    ///
    /// * `username` - At least three characters, no `:`
    /// * `password` - Plaintext, checked against the password policy
    /// * `role` - The account's role
    ///
    /// # Errors
    ///
    /// Returns an error if the username is malformed or taken, the password
    /// violates the policy, or hashing fails.
    pub fn register(&mut self, username: &str, password: &str, role: Role) -> Result<(), AuthError> {
        validate_username(username)?;
        if self.find(username).is_some() {
            warn!(username, "Registration rejected: duplicate username");
            return Err(AuthError::DuplicateUser {
                username: username.to_string(),
            });
        }
        self.policy.validate(password, username)?;

        let password_hash: String = self.hash(password)?;
        self.users
            .push(UserAccount::new(username.to_string(), password_hash, role));
        info!(username, role = %role, "User registered");
        Ok(())
    }

    /// Verifies a username and password.
    ///
    /// Unknown users and wrong passwords produce the same error.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` if the credentials do not
    /// match, or `AuthError::Hashing` if the stored hash is malformed.
    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticatedActor, AuthError> {
        let Some(user) = self.find(username) else {
            warn!(username, "Login failed: unknown user");
            return Err(invalid_credentials());
        };
        if !user.verify_password(password)? {
            warn!(username, "Login failed: incorrect password");
            return Err(invalid_credentials());
        }
        info!(username, role = %user.role, "User logged in");
        Ok(AuthenticatedActor::new(user.username.clone(), user.role))
    }

    /// Changes a user's own password after checking the current one.
    ///
    /// # Errors
    ///
    /// Returns an error if the current password is wrong, the new password
    /// violates the policy, or hashing fails.
    pub fn change_password(
        &mut self,
        username: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let user: &UserAccount = self
            .find(username)
            .ok_or_else(|| AuthError::UserNotFound {
                username: username.to_string(),
            })?;
        if !user.verify_password(current_password)? {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Current password is incorrect"),
            });
        }
        self.policy.validate(new_password, username)?;

        let password_hash: String = self.hash(new_password)?;
        self.find_mut(username)?.password_hash = password_hash;
        info!(username, "Password changed");
        Ok(())
    }

    /// Deletes an account. Admin only; admins cannot delete themselves.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not an admin, targets their own
    /// account, or the user does not exist.
    pub fn delete_user(
        &mut self,
        actor: &AuthenticatedActor,
        username: &str,
    ) -> Result<UserAccount, AuthError> {
        AuthorizationService::authorize_user_management(actor, "delete_user")?;
        if actor.username == username {
            return Err(AuthError::SelfModification {
                action: String::from("delete"),
            });
        }
        let index: usize = self
            .users
            .iter()
            .position(|user| user.username == username)
            .ok_or_else(|| AuthError::UserNotFound {
                username: username.to_string(),
            })?;
        let removed: UserAccount = self.users.remove(index);
        info!(username, by = %actor.username, "User deleted");
        Ok(removed)
    }

    /// Changes another account's role. Admin only.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is not an admin, targets their own
    /// account, or the user does not exist.
    pub fn change_role(
        &mut self,
        actor: &AuthenticatedActor,
        username: &str,
        role: Role,
    ) -> Result<(), AuthError> {
        AuthorizationService::authorize_user_management(actor, "change_role")?;
        if actor.username == username {
            return Err(AuthError::SelfModification {
                action: String::from("change the role of"),
            });
        }
        let user: &mut UserAccount = self.find_mut(username)?;
        let previous: Role = user.role;
        user.role = role;
        info!(username, from = %previous, to = %role, by = %actor.username, "Role changed");
        Ok(())
    }

    /// Makes sure at least one admin account exists.
    ///
    /// When none does, the default admin is created. If that username is
    /// already held by a non-admin account, that account is promoted instead.
    ///
    /// # Returns
    ///
    /// True if an account was created or promoted.
    ///
    /// # Errors
    ///
    /// Returns an error if hashing the default password fails.
    pub fn ensure_default_admin(&mut self) -> Result<bool, AuthError> {
        if self.has_admin() {
            return Ok(false);
        }
        if let Ok(existing) = self.find_mut(DEFAULT_ADMIN_USERNAME) {
            existing.role = Role::Admin;
            warn!(
                username = DEFAULT_ADMIN_USERNAME,
                "No admin found; promoted existing account"
            );
            return Ok(true);
        }
        warn!(
            username = DEFAULT_ADMIN_USERNAME,
            "No admin found; creating default admin account"
        );
        self.register(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD, Role::Admin)?;
        Ok(true)
    }

    /// Encodes every account, one record per line.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut out: String = String::new();
        for user in &self.users {
            out.push_str(&user.encode());
            out.push('\n');
        }
        out
    }

    /// Replaces the accounts with those decoded from `lines`.
    ///
    /// Blank lines are ignored. Malformed records, guest records and
    /// repeated usernames are skipped.
    ///
    /// # Returns
    ///
    /// The number of skipped records.
    pub fn load_records<I, S>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.users.clear();
        let mut skipped: usize = 0;
        for (number, line) in lines.into_iter().enumerate() {
            let line: &str = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            match UserAccount::decode(line) {
                Ok(user) if user.role == Role::Guest => {
                    warn!(line = number + 1, username = %user.username, "Guest record skipped");
                    skipped += 1;
                }
                Ok(user) if self.find(&user.username).is_some() => {
                    warn!(line = number + 1, username = %user.username, "Duplicate user skipped");
                    skipped += 1;
                }
                Ok(user) => self.users.push(user),
                Err(err) => {
                    warn!(line = number + 1, error = %err, "User record skipped");
                    skipped += 1;
                }
            }
        }
        info!(loaded = self.users.len(), skipped, "Users loaded");
        skipped
    }
}

fn invalid_credentials() -> AuthError {
    AuthError::AuthenticationFailed {
        reason: String::from("Invalid username or password"),
    }
}

fn validate_username(username: &str) -> Result<(), AuthError> {
    if username.trim() != username || username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(AuthError::InvalidUsername {
            reason: format!(
                "must be at least {MIN_USERNAME_LENGTH} characters with no surrounding spaces"
            ),
        });
    }
    if username.contains(USER_RECORD_SEPARATOR) || username.chars().any(char::is_control) {
        return Err(AuthError::InvalidUsername {
            reason: format!("must not contain '{USER_RECORD_SEPARATOR}' or control characters"),
        });
    }
    Ok(())
}
