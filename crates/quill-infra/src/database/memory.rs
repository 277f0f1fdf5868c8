//! In-memory blog repository - used as fallback when MongoDB is unavailable.

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{Blog, BlogFields};
use quill_core::error::RepoError;
use quill_core::ports::{BlogPage, BlogRepository};

/// In-memory store backed by a `Vec` behind an async RwLock.
///
/// Insertion order stands in for the document store's natural order, so
/// pagination slices are stable. Note: data is lost on process restart.
pub struct InMemoryBlogRepository {
    store: RwLock<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }

    fn matches(blog: &Blog, needle: &str) -> bool {
        let contains =
            |field: &Option<String>| field.as_deref().unwrap_or("").to_lowercase().contains(needle);
        contains(&blog.title) || contains(&blog.author)
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn list(&self, search: &str, page: u64, limit: u64) -> Result<BlogPage, RepoError> {
        let needle = search.to_lowercase();
        let store = self.store.read().await;

        let matching: Vec<&Blog> = store.iter().filter(|b| Self::matches(b, &needle)).collect();
        let total = matching.len() as u64;

        let skip = page.saturating_sub(1).saturating_mul(limit);
        let items = matching
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect();

        Ok(BlogPage { items, total })
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Blog>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|b| b.id == id).cloned())
    }

    async fn insert(&self, blog: Blog) -> Result<Blog, RepoError> {
        let mut store = self.store.write().await;
        store.push(blog.clone());
        Ok(blog)
    }

    async fn update(&self, id: &str, fields: BlogFields) -> Result<Option<Blog>, RepoError> {
        // Single critical section: lookup and overwrite under one write lock.
        let mut store = self.store.write().await;

        let Some(blog) = store.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };

        blog.title = fields.title;
        blog.author = fields.author;
        blog.publish_date = fields.publish_date;
        blog.body = fields.body;

        Ok(Some(blog.clone()))
    }

    async fn delete(&self, id: &str) -> Result<Option<Blog>, RepoError> {
        let mut store = self.store.write().await;

        match store.iter().position(|b| b.id == id) {
            Some(index) => Ok(Some(store.remove(index))),
            None => Ok(None),
        }
    }
}
