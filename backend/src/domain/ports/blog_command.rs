//! Driving port for blog mutations: create, like, delete.

use async_trait::async_trait;

use crate::domain::auth::Identity;
use crate::domain::blog::{Blog, BlogDraft, BlogId};
use crate::domain::error::Error;

/// Domain use-case port for mutating blog state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogCommand: Send + Sync {
    /// Create a blog owned by the acting identity. `likes` initialises to 0.
    async fn create(&self, identity: &Identity, draft: BlogDraft) -> Result<Blog, Error>;

    /// Add exactly one like and return the updated blog.
    ///
    /// Deliberately not owner-restricted: any client, authenticated or not,
    /// may like a blog. Fails with `NotFound` when the blog does not exist.
    async fn like(&self, id: &BlogId) -> Result<Blog, Error>;

    /// Delete a blog. Fails with `NotFound` when absent and `Forbidden` when
    /// the identity does not own the blog; a failed check mutates nothing.
    async fn delete(&self, identity: &Identity, id: &BlogId) -> Result<(), Error>;
}
