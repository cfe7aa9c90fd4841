//! Authentication primitives: login credentials, registration payloads, and
//! the resolved identity value.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::credential::{Password, PasswordValidationError};
use crate::domain::user::{DisplayName, UserId, UserValidationError, Username};

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials used by the authentication service.
///
/// ## Invariants
/// - `username` is trimmed and must not be empty after trimming.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use bloglist_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("testuser", "testpassword").unwrap();
/// assert_eq!(creds.username(), "testuser");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username string suitable for user lookups.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validation errors raised while assembling a registration payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationValidationError {
    /// Name or username failed the user field rules.
    User(UserValidationError),
    /// Password failed the credential rules.
    Password(PasswordValidationError),
}

impl fmt::Display for RegistrationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User(err) => err.fmt(f),
            Self::Password(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for RegistrationValidationError {}

impl From<UserValidationError> for RegistrationValidationError {
    fn from(value: UserValidationError) -> Self {
        Self::User(value)
    }
}

impl From<PasswordValidationError> for RegistrationValidationError {
    fn from(value: PasswordValidationError) -> Self {
        Self::Password(value)
    }
}

/// Validated registration payload handed to the registration service.
#[derive(Debug)]
pub struct NewUser {
    name: DisplayName,
    username: Username,
    password: Password,
}

impl NewUser {
    /// Construct a registration payload from raw string inputs.
    pub fn try_from_parts(
        name: &str,
        username: &str,
        password: &str,
    ) -> Result<Self, RegistrationValidationError> {
        let name = DisplayName::new(name)?;
        let username = Username::new(username)?;
        let password = Password::new(password)?;
        Ok(Self {
            name,
            username,
            password,
        })
    }

    /// Display name for the new user.
    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    /// Requested login name; uniqueness is enforced on insert.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Validated plaintext password, consumed when deriving the credential.
    pub fn password(&self) -> &Password {
        &self.password
    }
}

/// Proof that a request acts on behalf of a specific registered user.
///
/// Always passed explicitly into protected operations; the domain holds no
/// ambient current-user state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    user_id: UserId,
}

impl Identity {
    /// Bind an identity to a user id.
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    /// The user this identity acts for.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}
