//! Caller identity.
//!
//! Identity is optional everywhere: a missing, malformed, forged or expired
//! token simply means the caller is anonymous. Only handlers that mutate
//! posts turn an anonymous caller into a `Forbidden` response.

use actix_web::HttpRequest;
use quill_core::domain::AuthorId;
use quill_core::ports::TokenService;
use quill_shared::TOKEN_HEADER;

/// Name of the cookie set by the website sign-in flow.
pub const TOKEN_COOKIE: &str = "token";

/// Authenticated author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub author_id: AuthorId,
}

impl Identity {
    /// Resolve the caller from the `token` header, falling back to the
    /// `token` cookie.
    pub fn from_request(req: &HttpRequest, tokens: &dyn TokenService) -> Option<Self> {
        let token = match req.headers().get(TOKEN_HEADER) {
            Some(value) => value.to_str().ok()?.to_string(),
            None => req.cookie(TOKEN_COOKIE)?.value().to_string(),
        };

        let author_id = tokens.validate(token.trim());
        if author_id.is_none() {
            tracing::debug!("Ignoring invalid session token");
        }

        author_id.map(|author_id| Self { author_id })
    }
}
