//! Driven port for blog persistence adapters.

use async_trait::async_trait;

use crate::domain::blog::{Blog, BlogId};

/// Persistence errors raised by blog repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlogStoreError {
    /// Query or mutation failed during execution.
    #[error("blog store query failed: {message}")]
    Query {
        /// Adapter-provided failure description.
        message: String,
    },
}

impl BlogStoreError {
    /// Build a [`BlogStoreError::Query`] from any message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port abstraction over blog persistence.
///
/// Membership in the store and visibility in listings are equivalent: a
/// deleted blog leaves no tombstone behind.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Insert a freshly created blog.
    async fn insert(&self, blog: &Blog) -> Result<(), BlogStoreError>;

    /// Fetch a blog by identifier.
    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, BlogStoreError>;

    /// Every stored blog in creation order, oldest first. Always reflects the
    /// latest committed state; adapters must not cache.
    async fn list_all(&self) -> Result<Vec<Blog>, BlogStoreError>;

    /// Atomically add exactly one like and return the updated blog, or
    /// `Ok(None)` when the blog does not exist. Adapters must serialise
    /// concurrent increments: N concurrent calls yield `likes + N`.
    async fn increment_likes(&self, id: &BlogId) -> Result<Option<Blog>, BlogStoreError>;

    /// Remove a blog permanently. `Ok(true)` when removed, `Ok(false)` when
    /// the blog did not exist.
    async fn delete(&self, id: &BlogId) -> Result<bool, BlogStoreError>;

    /// Remove every blog. Development-only collaborator; never part of the
    /// production contract.
    async fn clear(&self) -> Result<(), BlogStoreError>;
}
