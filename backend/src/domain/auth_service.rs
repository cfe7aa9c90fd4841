//! Authentication domain service.
//!
//! Implements the login and registration driving ports over the user
//! repository. Credential verification happens here so inbound adapters only
//! ever see a resolved [`crate::domain::Identity`] or a typed failure.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::auth::{LoginCredentials, NewUser};
use crate::domain::credential::PasswordHash;
use crate::domain::error::Error;
use crate::domain::ports::{LoginService, RegistrationService, UserRepository, UserStoreError};
use crate::domain::user::{User, UserId};

fn map_store_error(error: UserStoreError) -> Error {
    match error {
        UserStoreError::DuplicateUsername { username } => {
            Error::validation(format!("username {username} is already taken"))
                .with_details(json!({ "field": "username", "code": "duplicate_username" }))
        }
        UserStoreError::Query { message } => {
            Error::internal(format!("user store error: {message}"))
        }
    }
}

/// Login and registration use-cases over a user repository.
#[derive(Clone)]
pub struct AuthService<R> {
    users: Arc<R>,
}

impl<R> AuthService<R> {
    /// Create a new service over the user repository.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R> LoginService for AuthService<R>
where
    R: UserRepository,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let record = self
            .users
            .find_by_username(credentials.username())
            .await
            .map_err(map_store_error)?;

        // Unknown usernames fall through to the same failure as a digest
        // mismatch; the response carries no enumeration signal.
        match record {
            Some((user, credential)) if credential.matches(credentials.password()) => Ok(user),
            _ => Err(Error::invalid_credentials()),
        }
    }
}

#[async_trait]
impl<R> RegistrationService for AuthService<R>
where
    R: UserRepository,
{
    async fn register(&self, new_user: NewUser) -> Result<User, Error> {
        let credential = PasswordHash::derive(new_user.password());
        let user = User::new(
            UserId::random(),
            new_user.username().clone(),
            new_user.name().clone(),
        );

        self.users
            .insert(&user, &credential)
            .await
            .map_err(map_store_error)?;

        tracing::info!(user_id = %user.id(), username = %user.username(), "user registered");
        Ok(user)
    }
}
