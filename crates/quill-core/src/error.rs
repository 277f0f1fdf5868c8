//! Repository-level error types.

use thiserror::Error;

/// Repository errors - failures reported by a store adapter.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Write was not acknowledged by the store")]
    Unacknowledged,
}
