//! Application configuration loaded from environment variables.

use std::env;

use quill_infra::MongoConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<MongoConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("MONGODB_URL").ok().map(|url| MongoConfig {
            url,
            database: env::var("MONGODB_DB").unwrap_or_else(|_| "quill".to_string()),
            collection: env::var("MONGODB_COLLECTION").unwrap_or_else(|_| "blogs".to_string()),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
        }
    }
}
