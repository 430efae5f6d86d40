//! # Quill Core
//!
//! The domain layer of the Quill blog platform.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! entities, identifier generation, URL path segmenting and the ports that
//! infrastructure must implement.

pub mod domain;
pub mod error;
pub mod path;
pub mod ports;

pub use error::{DomainError, RepoError};
