//! Driving port for the login use-case.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! authenticate credentials without knowing (or importing) the backing
//! infrastructure. This makes HTTP handler tests deterministic because they
//! can substitute a test double instead of wiring persistence.

use async_trait::async_trait;

use crate::domain::auth::LoginCredentials;
use crate::domain::error::Error;
use crate::domain::user::User;

/// Domain use-case port for authentication.
///
/// The successful result is the authenticated user; the caller derives an
/// [`crate::domain::Identity`] from it and decides how to carry the proof
/// (this backend issues a private session cookie).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user.
    ///
    /// Unknown usernames and wrong passwords both fail with
    /// `InvalidCredentials` and are indistinguishable to the caller.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error>;
}
