//! In-memory blog repository adapter.
//!
//! Reference implementation of the blog store port. All mutation happens
//! under a single write lock, which serialises concurrent like increments:
//! N concurrent increments yield exactly `likes + N`.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::blog::{Blog, BlogId};
use crate::domain::ports::{BlogRepository, BlogStoreError};

struct BlogRow {
    blog: Blog,
    seq: u64,
}

#[derive(Default)]
struct BlogTable {
    next_seq: u64,
    rows: HashMap<BlogId, BlogRow>,
}

/// Process-local blog store.
#[derive(Default)]
pub struct InMemoryBlogRepository {
    table: RwLock<BlogTable>,
}

impl InMemoryBlogRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> BlogStoreError {
    BlogStoreError::query("blog store lock poisoned")
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn insert(&self, blog: &Blog) -> Result<(), BlogStoreError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        let seq = table.next_seq;
        table.next_seq += 1;
        table.rows.insert(
            blog.id(),
            BlogRow {
                blog: blog.clone(),
                seq,
            },
        );
        Ok(())
    }

    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, BlogStoreError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.rows.get(id).map(|row| row.blog.clone()))
    }

    async fn list_all(&self) -> Result<Vec<Blog>, BlogStoreError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        let mut rows: Vec<(u64, Blog)> = table
            .rows
            .values()
            .map(|row| (row.seq, row.blog.clone()))
            .collect();
        rows.sort_by_key(|(seq, _)| *seq);
        Ok(rows.into_iter().map(|(_, blog)| blog).collect())
    }

    async fn increment_likes(&self, id: &BlogId) -> Result<Option<Blog>, BlogStoreError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        Ok(table.rows.get_mut(id).map(|row| {
            row.blog.record_like();
            row.blog.clone()
        }))
    }

    async fn delete(&self, id: &BlogId) -> Result<bool, BlogStoreError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        Ok(table.rows.remove(id).is_some())
    }

    async fn clear(&self) -> Result<(), BlogStoreError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        table.rows.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::sync::Arc;

    use super::*;
    use crate::domain::blog::BlogDraft;
    use crate::domain::user::UserId;
    use futures_util::future::join_all;

    fn blog(title: &str) -> Blog {
        let draft = BlogDraft::try_from_parts(title, Some("A"), "http://u").expect("valid draft");
        Blog::create(BlogId::random(), draft, UserId::random())
    }

    #[tokio::test]
    async fn list_all_preserves_creation_order() {
        let repo = InMemoryBlogRepository::new();
        let first = blog("first");
        let second = blog("second");
        let third = blog("third");
        for entry in [&first, &second, &third] {
            repo.insert(entry).await.expect("insert");
        }

        let listed = repo.list_all().await.expect("list");
        let ids: Vec<BlogId> = listed.iter().map(Blog::id).collect();
        assert_eq!(ids, vec![first.id(), second.id(), third.id()]);
    }

    #[tokio::test]
    async fn increment_returns_updated_blog() {
        let repo = InMemoryBlogRepository::new();
        let entry = blog("T");
        repo.insert(&entry).await.expect("insert");

        let updated = repo
            .increment_likes(&entry.id())
            .await
            .expect("increment")
            .expect("blog present");
        assert_eq!(updated.likes(), 1);
    }

    #[tokio::test]
    async fn increment_of_missing_blog_reports_absence() {
        let repo = InMemoryBlogRepository::new();
        let result = repo
            .increment_likes(&BlogId::random())
            .await
            .expect("increment");
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let repo = InMemoryBlogRepository::new();
        let entry = blog("T");
        repo.insert(&entry).await.expect("insert");

        assert!(repo.delete(&entry.id()).await.expect("delete"));
        assert!(!repo.delete(&entry.id()).await.expect("second delete"));
        assert!(repo
            .find_by_id(&entry.id())
            .await
            .expect("lookup")
            .is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_increments_lose_no_updates() {
        const CONCURRENT_LIKES: u64 = 64;

        let repo = Arc::new(InMemoryBlogRepository::new());
        let entry = blog("T");
        repo.insert(&entry).await.expect("insert");

        let tasks = (0..CONCURRENT_LIKES).map(|_| {
            let repo = repo.clone();
            let id = entry.id();
            tokio::spawn(async move {
                repo.increment_likes(&id)
                    .await
                    .expect("increment")
                    .expect("blog present");
            })
        });
        for result in join_all(tasks).await {
            result.expect("task completes");
        }

        let stored = repo
            .find_by_id(&entry.id())
            .await
            .expect("lookup")
            .expect("blog present");
        assert_eq!(stored.likes(), CONCURRENT_LIKES);
    }
}
