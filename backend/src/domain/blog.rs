//! Blog entry data model.
//!
//! A blog is created by an authenticated user who becomes its owner, collects
//! likes monotonically, and disappears only through an owner-issued delete.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::user::UserId;

/// Validation errors returned by the blog constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlogValidationError {
    /// The identifier was not a valid UUID.
    InvalidId,
    /// The title was blank once trimmed.
    EmptyTitle,
    /// The url was blank once trimmed.
    EmptyUrl,
}

impl fmt::Display for BlogValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "blog id must be a valid UUID"),
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyUrl => write!(f, "url must not be empty"),
        }
    }
}

impl std::error::Error for BlogValidationError {}

/// Stable blog identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlogId(Uuid);

impl BlogId {
    /// Generate a new random [`BlogId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a [`BlogId`] from its string form.
    pub fn parse(raw: &str) -> Result<Self, BlogValidationError> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| BlogValidationError::InvalidId)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for BlogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BlogId {
    type Err = BlogValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Validated creation payload for a blog entry.
///
/// ## Invariants
/// - `title` and `url` are non-blank.
/// - `author` is free text and may be empty; a missing author defaults to the
///   empty string rather than rejecting the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDraft {
    title: String,
    author: String,
    url: String,
}

impl BlogDraft {
    /// Construct a draft from raw string inputs.
    pub fn try_from_parts(
        title: &str,
        author: Option<&str>,
        url: &str,
    ) -> Result<Self, BlogValidationError> {
        if title.trim().is_empty() {
            return Err(BlogValidationError::EmptyTitle);
        }
        if url.trim().is_empty() {
            return Err(BlogValidationError::EmptyUrl);
        }
        Ok(Self {
            title: title.to_owned(),
            author: author.unwrap_or_default().to_owned(),
            url: url.to_owned(),
        })
    }

    /// Blog title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Stated author of the linked post.
    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    /// Link to the post.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }
}

/// Blog entry.
///
/// ## Invariants
/// - Exactly one owner, fixed at creation, never reassigned.
/// - `likes` starts at 0 and only ever grows, one at a time, through
///   [`Blog::record_like`].
/// - `title`, `author`, and `url` are immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
#[serde(try_from = "BlogDto", into = "BlogDto")]
pub struct Blog {
    #[schema(value_type = String, example = "7c9e6679-7425-40de-944b-e07fc1f90ae7")]
    id: BlogId,
    #[schema(example = "On Writing Well")]
    title: String,
    #[schema(example = "William Zinsser")]
    author: String,
    #[schema(example = "https://example.com/on-writing-well")]
    url: String,
    #[schema(example = 0)]
    likes: u64,
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    owner: UserId,
}

impl Blog {
    /// Create a blog from a validated draft; `likes` initialises to 0 and the
    /// creating identity's user becomes the owner.
    pub fn create(id: BlogId, draft: BlogDraft, owner: UserId) -> Self {
        let BlogDraft { title, author, url } = draft;
        Self {
            id,
            title,
            author,
            url,
            likes: 0,
            owner,
        }
    }

    /// Stable blog identifier.
    pub fn id(&self) -> BlogId {
        self.id
    }

    /// Blog title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Stated author of the linked post.
    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    /// Link to the post.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Popularity counter.
    pub fn likes(&self) -> u64 {
        self.likes
    }

    /// Owning user, fixed at creation.
    pub fn owner(&self) -> UserId {
        self.owner
    }

    /// Record one like. The counter is monotonic; there is no decrement.
    pub fn record_like(&mut self) {
        self.likes = self.likes.saturating_add(1);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlogDto {
    id: String,
    title: String,
    author: String,
    url: String,
    likes: u64,
    owner: String,
}

impl From<Blog> for BlogDto {
    fn from(value: Blog) -> Self {
        let Blog {
            id,
            title,
            author,
            url,
            likes,
            owner,
        } = value;
        Self {
            id: id.to_string(),
            title,
            author,
            url,
            likes,
            owner: owner.to_string(),
        }
    }
}

impl TryFrom<BlogDto> for Blog {
    type Error = BlogValidationError;

    fn try_from(value: BlogDto) -> Result<Self, Self::Error> {
        let id = BlogId::parse(&value.id)?;
        let owner = UserId::parse(&value.owner).map_err(|_| BlogValidationError::InvalidId)?;
        if value.title.trim().is_empty() {
            return Err(BlogValidationError::EmptyTitle);
        }
        if value.url.trim().is_empty() {
            return Err(BlogValidationError::EmptyUrl);
        }
        Ok(Self {
            id,
            title: value.title,
            author: value.author,
            url: value.url,
            likes: value.likes,
            owner,
        })
    }
}
