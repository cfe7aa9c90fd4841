//! Development-only maintenance service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::ports::{BlogRepository, ResetCommand, UserRepository};

/// Implements the reset collaborator over both stores.
///
/// The two stores are independently lockable; the reset clears them one after
/// the other rather than atomically, which is acceptable for a test harness.
#[derive(Clone)]
pub struct MaintenanceService<U, B> {
    users: Arc<U>,
    blogs: Arc<B>,
}

impl<U, B> MaintenanceService<U, B> {
    /// Create a new maintenance service over both repositories.
    pub fn new(users: Arc<U>, blogs: Arc<B>) -> Self {
        Self { users, blogs }
    }
}

#[async_trait]
impl<U, B> ResetCommand for MaintenanceService<U, B>
where
    U: UserRepository,
    B: BlogRepository,
{
    async fn reset_all(&self) -> Result<(), Error> {
        self.blogs
            .clear()
            .await
            .map_err(|err| Error::internal(format!("blog store error: {err}")))?;
        self.users
            .clear()
            .await
            .map_err(|err| Error::internal(format!("user store error: {err}")))?;
        tracing::warn!("all users and blogs wiped by test reset");
        Ok(())
    }
}
