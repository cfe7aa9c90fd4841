//! Driven port for user and credential persistence adapters.
//!
//! The user store doubles as the credential store: a record is a user plus
//! the password credential captured at registration. Users are never deleted
//! in-flow; `clear` exists for the development-only reset collaborator.

use async_trait::async_trait;

use crate::domain::credential::PasswordHash;
use crate::domain::user::{User, UserId};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserStoreError {
    /// Another user already holds the requested username.
    #[error("username {username} is already taken")]
    DuplicateUsername {
        /// The contested username.
        username: String,
    },
    /// Query or mutation failed during execution.
    #[error("user store query failed: {message}")]
    Query {
        /// Adapter-provided failure description.
        message: String,
    },
}

impl UserStoreError {
    /// Build a [`UserStoreError::Query`] from any message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port abstraction over user persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user and its credential. Fails with
    /// [`UserStoreError::DuplicateUsername`] when the username is taken; the
    /// uniqueness check and insert are a single atomic step.
    async fn insert(&self, user: &User, credential: &PasswordHash) -> Result<(), UserStoreError>;

    /// Fetch a user and its credential by username.
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<(User, PasswordHash)>, UserStoreError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError>;

    /// Remove every user. Development-only collaborator; never part of the
    /// production contract.
    async fn clear(&self) -> Result<(), UserStoreError>;
}
