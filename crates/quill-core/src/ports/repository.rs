use async_trait::async_trait;

use crate::domain::{Blog, BlogFields};
use crate::error::RepoError;

/// One page of list results, together with the total match count used for
/// pagination metadata.
#[derive(Debug, Clone)]
pub struct BlogPage {
    pub items: Vec<Blog>,
    pub total: u64,
}

/// Blog repository port.
///
/// Update and delete are single conditional operations keyed by `id`: the
/// store either finds-and-mutates the document atomically or reports `None`.
/// There is no separate existence check, so no race window between checking
/// and writing.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// List blogs whose `title` or `author` contains `search` as a
    /// case-insensitive substring (empty search matches everything), in the
    /// store's natural order, skipping `(page-1)*limit` and returning at
    /// most `limit` documents.
    async fn list(&self, search: &str, page: u64, limit: u64) -> Result<BlogPage, RepoError>;

    /// Find a blog by exact `id`.
    async fn find_by_id(&self, id: &str) -> Result<Option<Blog>, RepoError>;

    /// Persist a new blog. An insert the store does not acknowledge is
    /// reported as [`RepoError::Unacknowledged`], never silently dropped.
    async fn insert(&self, blog: Blog) -> Result<Blog, RepoError>;

    /// Overwrite the four mutable fields of the blog with `id`, atomically.
    /// Returns the updated document, or `None` if no such blog exists.
    async fn update(&self, id: &str, fields: BlogFields) -> Result<Option<Blog>, RepoError>;

    /// Delete the blog with `id`, atomically. Returns the document's last
    /// known data, or `None` if no such blog exists.
    async fn delete(&self, id: &str) -> Result<Option<Blog>, RepoError>;
}
