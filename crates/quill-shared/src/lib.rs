//! # Quill Shared
//!
//! Wire types shared between frontend and backend: the uniform response
//! envelopes and the list query/pagination types.

pub mod dto;
pub mod response;

pub use dto::{ListQuery, Paginated};
pub use response::{ApiResponse, ErrorResponse, ServerErrorResponse};
