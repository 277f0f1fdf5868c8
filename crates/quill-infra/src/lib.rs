//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `mongodb` - MongoDB document store support

pub mod database;

// Re-exports - In-Memory
pub use database::InMemoryBlogRepository;

// Re-exports - MongoDB
pub use database::MongoConfig;
#[cfg(feature = "mongodb")]
pub use database::MongoBlogRepository;
