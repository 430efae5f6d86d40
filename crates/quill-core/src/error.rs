//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Repository-level errors.
///
/// "No rows" is never an error at this level: lookups return `Option` and
/// owner-qualified mutations report whether a row matched.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// A freshly generated identifier collided with an existing row.
    #[error("Generated identifier already in use")]
    DuplicateId,

    #[error("Could not allocate a unique identifier after {attempts} attempts")]
    IdExhausted { attempts: u32 },
}
