//! MongoDB repository implementation.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};

use quill_core::domain::{Blog, BlogFields};
use quill_core::error::RepoError;
use quill_core::ports::{BlogPage, BlogRepository};

use super::MongoConfig;

/// MongoDB blog repository.
///
/// Update and delete use the server's find-and-modify primitives, so the
/// existence check and the write are one atomic round trip.
pub struct MongoBlogRepository {
    collection: Collection<Blog>,
}

impl MongoBlogRepository {
    /// Connect to the configured database and verify it answers a ping.
    pub async fn connect(config: &MongoConfig) -> Result<Self, mongodb::error::Error> {
        tracing::info!(database = %config.database, "Connecting to MongoDB...");

        let client = Client::with_uri_str(&config.url).await?;
        let db = client.database(&config.database);

        // The client connects lazily; ping so a bad URL fails here, not on
        // the first request.
        db.run_command(doc! { "ping": 1 }).await?;
        tracing::info!(collection = %config.collection, "MongoDB connected");

        Ok(Self {
            collection: db.collection(&config.collection),
        })
    }

    /// Case-insensitive substring filter over `title` OR `author`. The term
    /// is regex-escaped so metacharacters match literally; an empty term
    /// matches all text.
    fn search_filter(search: &str) -> Document {
        let pattern = regex::escape(search);
        doc! {
            "$or": [
                { "title": { "$regex": &pattern, "$options": "i" } },
                { "author": { "$regex": &pattern, "$options": "i" } },
            ]
        }
    }
}

#[async_trait]
impl BlogRepository for MongoBlogRepository {
    async fn list(&self, search: &str, page: u64, limit: u64) -> Result<BlogPage, RepoError> {
        let filter = Self::search_filter(search);

        let total = self
            .collection
            .count_documents(filter.clone())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        let skip = page.saturating_sub(1).saturating_mul(limit);
        let items = self
            .collection
            .find(filter)
            .skip(skip)
            .limit(limit as i64)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(BlogPage { items, total })
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Blog>, RepoError> {
        self.collection
            .find_one(doc! { "id": id })
            .await
            .map_err(|e| RepoError::Query(e.to_string()))
    }

    async fn insert(&self, blog: Blog) -> Result<Blog, RepoError> {
        let result = self
            .collection
            .insert_one(&blog)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        if matches!(result.inserted_id, Bson::Null) {
            return Err(RepoError::Unacknowledged);
        }

        Ok(blog)
    }

    async fn update(&self, id: &str, fields: BlogFields) -> Result<Option<Blog>, RepoError> {
        // $set is restricted to the four mutable fields; `id` is never part
        // of the update document.
        let update = doc! {
            "$set": {
                "title": fields.title,
                "author": fields.author,
                "publishDate": fields.publish_date,
                "body": fields.body,
            }
        };

        self.collection
            .find_one_and_update(doc! { "id": id }, update)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))
    }

    async fn delete(&self, id: &str) -> Result<Option<Blog>, RepoError> {
        self.collection
            .find_one_and_delete(doc! { "id": id })
            .await
            .map_err(|e| RepoError::Query(e.to_string()))
    }
}
