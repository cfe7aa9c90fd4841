//! User data model.
//!
//! Users are created through registration and immutable afterwards. The
//! stored password credential lives in [`crate::domain::credential`] and is
//! never part of the serialised user payload.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// The identifier was not a valid UUID.
    InvalidId,
    /// The display name was blank once trimmed.
    EmptyName,
    /// The username was blank once trimmed.
    EmptyUsername,
    /// The username was shorter than the minimum length.
    UsernameTooShort {
        /// Minimum accepted length in characters.
        min: usize,
    },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::UsernameTooShort { min } => {
                write!(f, "username must be at least {min} characters")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a [`UserId`] from its string form.
    pub fn parse(raw: &str) -> Result<Self, UserValidationError> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = UserValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Minimum allowed length for a username.
pub const USERNAME_MIN: usize = 3;

/// Unique login name.
///
/// ## Invariants
/// - Trimmed of surrounding whitespace.
/// - Non-empty and at least [`USERNAME_MIN`] characters long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(username: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let normalized = username.as_ref().trim();
        if normalized.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        if normalized.chars().count() < USERNAME_MIN {
            return Err(UserValidationError::UsernameTooShort { min: USERNAME_MIN });
        }
        Ok(Self(normalized.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Human readable display name for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and construct a [`DisplayName`].
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Registered application user, sans credential.
///
/// ## Invariants
/// - `username` satisfies the [`Username`] rules and is unique store-wide
///   (enforced by the user repository on insert).
/// - `name` is non-empty once trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: UserId,
    #[schema(value_type = String, example = "testuser")]
    username: Username,
    #[schema(value_type = String, example = "Test User")]
    name: DisplayName,
}

impl User {
    /// Build a new [`User`] from validated components.
    pub fn new(id: UserId, username: Username, name: DisplayName) -> Self {
        Self { id, username, name }
    }

    /// Stable user identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Unique login name.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Display name shown alongside owned blogs.
    pub fn name(&self) -> &DisplayName {
        &self.name
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    id: String,
    username: String,
    name: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User { id, username, name } = value;
        Self {
            id: id.to_string(),
            username: username.into(),
            name: name.into(),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let id = UserId::parse(&value.id)?;
        let username = Username::new(value.username)?;
        let name = DisplayName::new(value.name)?;
        Ok(User::new(id, username, name))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", UserValidationError::EmptyUsername)]
    #[case("   ", UserValidationError::EmptyUsername)]
    #[case("ab", UserValidationError::UsernameTooShort { min: USERNAME_MIN })]
    fn username_rejects_invalid_input(#[case] raw: &str, #[case] expected: UserValidationError) {
        let err = Username::new(raw).expect_err("invalid input must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("  testuser  ", "testuser")]
    #[case("abc", "abc")]
    fn username_trims_whitespace(#[case] raw: &str, #[case] expected: &str) {
        let username = Username::new(raw).expect("valid username");
        assert_eq!(username.as_ref(), expected);
    }

    #[test]
    fn display_name_rejects_blank_input() {
        let err = DisplayName::new("   ").expect_err("blank name must fail");
        assert_eq!(err, UserValidationError::EmptyName);
    }

    #[test]
    fn user_serializes_camel_case_without_credential() {
        let user = User::new(
            UserId::random(),
            Username::new("testuser").expect("valid username"),
            DisplayName::new("Test User").expect("valid name"),
        );
        let value = serde_json::to_value(&user).expect("serialize");
        assert_eq!(value["username"], "testuser");
        assert_eq!(value["name"], "Test User");
        assert!(value.get("password").is_none());
        assert!(value.get("credential").is_none());
    }

    #[test]
    fn user_round_trips_through_dto() {
        let user = User::new(
            UserId::random(),
            Username::new("testuser").expect("valid username"),
            DisplayName::new("Test User").expect("valid name"),
        );
        let json = serde_json::to_string(&user).expect("serialize");
        let back: User = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, user);
    }

    #[test]
    fn user_deserialization_revalidates() {
        let err = serde_json::from_str::<User>(
            r#"{"id":"3fa85f64-5717-4562-b3fc-2c963f66afa6","username":"ab","name":"Test"}"#,
        )
        .expect_err("short username must fail");
        assert!(err.to_string().contains("at least"));
    }
}
