//! Driving port for the registration use-case.

use async_trait::async_trait;

use crate::domain::auth::NewUser;
use crate::domain::error::Error;
use crate::domain::user::User;

/// Domain use-case port for registering a new user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Persist a validated registration payload and return the created user
    /// (sans credential). A taken username fails with `ValidationError`.
    async fn register(&self, new_user: NewUser) -> Result<User, Error>;
}
