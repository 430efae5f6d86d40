//! Authentication and authorization ports.

use crate::domain::AuthorId;

/// Claims carried by a session token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub author_id: AuthorId,
    pub issuer: String,
    pub exp: i64,
}

/// Session token codec.
pub trait TokenService: Send + Sync {
    /// Issue a signed, time-limited token for an author.
    fn issue(&self, author_id: &AuthorId) -> Result<String, AuthError>;

    /// Decode a token, reporting why it was rejected.
    fn decode(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// Resolve a token to the author it was issued for.
    ///
    /// Every failure (missing, malformed, forged, expired) yields `None`:
    /// the caller is treated as anonymous rather than erroring.
    fn validate(&self, token: &str) -> Option<AuthorId> {
        if token.is_empty() {
            return None;
        }

        self.decode(token).ok().map(|claims| claims.author_id)
    }
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password into a self-describing, salted digest.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a digest. Malformed digests never match.
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token signing failed: {0}")]
    Signing(String),

    #[error("Hashing error: {0}")]
    HashingError(String),
}
