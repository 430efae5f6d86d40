//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the credential verifier, the session token codec,
//! the resource stores and the HTML renderer.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory store only
//! - `postgres` - PostgreSQL store via SeaORM
//! - `auth` - JWT + Argon2 authentication

pub mod database;
pub mod memory;
pub mod render;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports
pub use database::{DatabaseConfig, DatabaseConnections};
pub use memory::InMemoryStore;
pub use render::TeraRenderer;

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, DEV_SIGNING_KEY, JwtConfig, JwtTokenService};

#[cfg(feature = "postgres")]
pub use database::{PostgresAuthorRepository, PostgresPostRepository};
