//! Driving port for the development-only full reset.
//!
//! Exists as a testing collaborator for end-to-end suites; the HTTP route
//! that drives it is compiled only under the `test-support` feature and is
//! explicitly outside the production contract.

use async_trait::async_trait;

use crate::domain::error::Error;

/// Domain use-case port wiping both the user and blog stores.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResetCommand: Send + Sync {
    /// Remove every user and every blog.
    async fn reset_all(&self) -> Result<(), Error>;
}
