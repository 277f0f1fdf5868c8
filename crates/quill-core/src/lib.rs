//! # Quill Core
//!
//! The domain layer of the Quill blog API.
//! This crate contains the blog entity and repository port with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
