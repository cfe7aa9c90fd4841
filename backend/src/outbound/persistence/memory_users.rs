//! In-memory user repository adapter.
//!
//! Reference implementation of the user store port. State lives in a single
//! `RwLock`-guarded map keyed by username, which makes the
//! uniqueness-check-and-insert a single atomic step under the write lock.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::credential::PasswordHash;
use crate::domain::ports::{UserRepository, UserStoreError};
use crate::domain::user::{User, UserId};

struct UserRecord {
    user: User,
    credential: PasswordHash,
}

/// Process-local user store.
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> UserStoreError {
    UserStoreError::query("user store lock poisoned")
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User, credential: &PasswordHash) -> Result<(), UserStoreError> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        let key = user.username().as_ref().to_owned();
        if rows.contains_key(&key) {
            return Err(UserStoreError::DuplicateUsername { username: key });
        }
        rows.insert(
            key,
            UserRecord {
                user: user.clone(),
                credential: credential.clone(),
            },
        );
        Ok(())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<(User, PasswordHash)>, UserStoreError> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows
            .get(username)
            .map(|record| (record.user.clone(), record.credential.clone())))
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        Ok(rows
            .values()
            .find(|record| record.user.id() == *id)
            .map(|record| record.user.clone()))
    }

    async fn clear(&self) -> Result<(), UserStoreError> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        rows.clear();
        Ok(())
    }
}
