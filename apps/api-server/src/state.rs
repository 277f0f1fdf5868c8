//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::BlogRepository;
use quill_infra::{InMemoryBlogRepository, MongoConfig};

#[cfg(feature = "mongodb")]
use quill_infra::MongoBlogRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository>,
}

impl AppState {
    /// Build the application state with the appropriate store implementation.
    pub async fn new(db_config: Option<&MongoConfig>) -> Self {
        #[cfg(feature = "mongodb")]
        let blogs: Arc<dyn BlogRepository> = match db_config {
            Some(config) => match MongoBlogRepository::connect(config).await {
                Ok(repo) => Arc::new(repo),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to MongoDB: {}. Using in-memory fallback.",
                        e
                    );
                    Arc::new(InMemoryBlogRepository::new())
                }
            },
            None => {
                tracing::warn!("MONGODB_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryBlogRepository::new())
            }
        };

        #[cfg(not(feature = "mongodb"))]
        let blogs: Arc<dyn BlogRepository> = {
            let _ = db_config;
            tracing::info!("Running without mongodb feature - using in-memory repository");
            Arc::new(InMemoryBlogRepository::new())
        };

        tracing::info!("Application state initialized");

        Self { blogs }
    }

    /// Build state over an explicit repository handle - used in tests.
    pub fn with_repository(blogs: Arc<dyn BlogRepository>) -> Self {
        Self { blogs }
    }
}
