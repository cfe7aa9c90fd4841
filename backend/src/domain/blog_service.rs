//! Blog domain services.
//!
//! [`BlogCommandService`] implements the mutating driving port (create, like,
//! delete) and [`BlogQueryService`] the listing projection, both generic over
//! the repository ports so adapters stay swappable.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::Identity;
use crate::domain::blog::{Blog, BlogDraft, BlogId};
use crate::domain::error::Error;
use crate::domain::ownership::assert_owner;
use crate::domain::ports::{
    BlogCommand, BlogQuery, BlogRepository, BlogStoreError, BlogView, OwnerSummary,
    UserRepository, UserStoreError,
};

fn map_blog_store_error(error: BlogStoreError) -> Error {
    match error {
        BlogStoreError::Query { message } => {
            Error::internal(format!("blog store error: {message}"))
        }
    }
}

fn map_user_store_error(error: UserStoreError) -> Error {
    Error::internal(format!("user store error: {error}"))
}

fn blog_not_found(id: &BlogId) -> Error {
    Error::not_found(format!("blog {id} not found"))
}

/// Mutating blog use-cases over a blog repository.
#[derive(Clone)]
pub struct BlogCommandService<B> {
    blogs: Arc<B>,
}

impl<B> BlogCommandService<B> {
    /// Create a new command service over the blog repository.
    pub fn new(blogs: Arc<B>) -> Self {
        Self { blogs }
    }
}

#[async_trait]
impl<B> BlogCommand for BlogCommandService<B>
where
    B: BlogRepository,
{
    async fn create(&self, identity: &Identity, draft: BlogDraft) -> Result<Blog, Error> {
        let blog = Blog::create(BlogId::random(), draft, identity.user_id());
        self.blogs
            .insert(&blog)
            .await
            .map_err(map_blog_store_error)?;
        tracing::info!(blog_id = %blog.id(), owner = %blog.owner(), "blog created");
        Ok(blog)
    }

    async fn like(&self, id: &BlogId) -> Result<Blog, Error> {
        self.blogs
            .increment_likes(id)
            .await
            .map_err(map_blog_store_error)?
            .ok_or_else(|| blog_not_found(id))
    }

    async fn delete(&self, identity: &Identity, id: &BlogId) -> Result<(), Error> {
        let blog = self
            .blogs
            .find_by_id(id)
            .await
            .map_err(map_blog_store_error)?
            .ok_or_else(|| blog_not_found(id))?;

        assert_owner(identity, &blog)?;

        // A concurrent delete may have won the race since the lookup.
        let removed = self.blogs.delete(id).await.map_err(map_blog_store_error)?;
        if !removed {
            return Err(blog_not_found(id));
        }
        tracing::info!(blog_id = %id, "blog deleted");
        Ok(())
    }
}

/// Listing projection over the blog and user repositories.
#[derive(Clone)]
pub struct BlogQueryService<B, U> {
    blogs: Arc<B>,
    users: Arc<U>,
}

impl<B, U> BlogQueryService<B, U> {
    /// Create a new query service over both repositories.
    pub fn new(blogs: Arc<B>, users: Arc<U>) -> Self {
        Self { blogs, users }
    }
}

#[async_trait]
impl<B, U> BlogQuery for BlogQueryService<B, U>
where
    B: BlogRepository,
    U: UserRepository,
{
    async fn list(&self) -> Result<Vec<BlogView>, Error> {
        // list_all returns creation order; the stable sort keeps that order
        // for equal-likes ties.
        let mut blogs = self.blogs.list_all().await.map_err(map_blog_store_error)?;
        blogs.sort_by(|a, b| b.likes().cmp(&a.likes()));

        let mut views = Vec::with_capacity(blogs.len());
        for blog in blogs {
            let owner = self
                .users
                .find_by_id(&blog.owner())
                .await
                .map_err(map_user_store_error)?
                .map(OwnerSummary::from)
                .ok_or_else(|| {
                    Error::internal(format!("owner {} missing from user store", blog.owner()))
                })?;
            views.push(BlogView::new(blog, owner));
        }
        Ok(views)
    }
}
