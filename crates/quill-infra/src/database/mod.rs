//! Document store adapters.

mod memory;

#[cfg(feature = "mongodb")]
mod mongo_repo;

pub use memory::InMemoryBlogRepository;

#[cfg(feature = "mongodb")]
pub use mongo_repo::MongoBlogRepository;

/// Configuration for the MongoDB document store.
///
/// Kept outside the `mongodb` feature gate so configuration loading works
/// even when the driver is compiled out.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub url: String,
    pub database: String,
    pub collection: String,
}
