//! Driving port for the blog listing projection.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::blog::{Blog, BlogId};
use crate::domain::error::Error;
use crate::domain::user::{User, UserId};

/// Owner reference embedded in every listed blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerSummary {
    /// Stable user identifier.
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: UserId,
    /// Unique login name.
    #[schema(example = "testuser")]
    pub username: String,
    /// Display name.
    #[schema(example = "Test User")]
    pub name: String,
}

impl From<User> for OwnerSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id(),
            username: user.username().as_ref().to_owned(),
            name: user.name().as_ref().to_owned(),
        }
    }
}

/// Listing row: a blog joined with its owner reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogView {
    /// Stable blog identifier.
    #[schema(value_type = String, example = "7c9e6679-7425-40de-944b-e07fc1f90ae7")]
    pub id: BlogId,
    /// Blog title.
    pub title: String,
    /// Stated author of the linked post.
    pub author: String,
    /// Link to the post.
    pub url: String,
    /// Popularity counter.
    pub likes: u64,
    /// The owning user.
    pub owner: OwnerSummary,
}

impl BlogView {
    /// Join a blog with its resolved owner.
    pub fn new(blog: Blog, owner: OwnerSummary) -> Self {
        Self {
            id: blog.id(),
            title: blog.title().to_owned(),
            author: blog.author().to_owned(),
            url: blog.url().to_owned(),
            likes: blog.likes(),
            owner,
        }
    }
}

/// Domain use-case port for reading the blog listing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogQuery: Send + Sync {
    /// Every blog ordered by likes descending; equal-likes ties break by
    /// creation order, earliest first. The listing always reflects the latest
    /// committed likes and membership.
    async fn list(&self) -> Result<Vec<BlogView>, Error>;
}
