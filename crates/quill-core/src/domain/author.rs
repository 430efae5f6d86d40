use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::AuthorId;
use super::post::Post;
use crate::error::DomainError;

/// Author entity - a registered writer.
///
/// Authors are created by signup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Author {
    /// Create a new author with the given identifier, stamped now.
    pub fn new(id: AuthorId, username: String, password_hash: String) -> Self {
        Self {
            id,
            username,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// An author together with their posts, most recently created first.
#[derive(Debug, Clone)]
pub struct AuthorPosts {
    pub author: Author,
    pub posts: Vec<Post>,
}

/// Username and password as submitted by signup or login forms.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Checks the credentials are acceptable for a new account.
    pub fn validate_for_signup(&self) -> Result<(), DomainError> {
        let username = self.username.trim();

        if username.is_empty() {
            return Err(DomainError::Validation("Username is required".to_string()));
        }
        if username.contains(char::is_whitespace) || username.contains('/') {
            return Err(DomainError::Validation(
                "Username may not contain spaces or slashes".to_string(),
            ));
        }
        if self.password.is_empty() {
            return Err(DomainError::Validation("Password is required".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_validation() {
        assert!(Credentials::new("ada", "secret").validate_for_signup().is_ok());
        assert!(Credentials::new("  ", "secret").validate_for_signup().is_err());
        assert!(Credentials::new("a b", "secret").validate_for_signup().is_err());
        assert!(Credentials::new("ada", "").validate_for_signup().is_err());
    }
}
