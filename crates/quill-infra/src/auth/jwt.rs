//! JWT session token codec.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use quill_core::domain::AuthorId;
use quill_core::ports::{AuthError, TokenClaims, TokenService};

/// Development-only signing key, used when none is configured.
pub const DEV_SIGNING_KEY: &str = "change-me-in-production";

/// JWT token service configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEV_SIGNING_KEY.to_string(),
            expiration_hours: 24,
            issuer: "quill".to_string(),
        }
    }
}

/// Internal JWT claims structure for serialization.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // author_id
    exp: i64,    // expiration timestamp
    iat: i64,    // issued at
    iss: String, // issuer
}

/// HS256 JWT-based token service.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[&config.issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            encoding_key,
            decoding_key,
            validation,
            config,
        }
    }

    fn issue_at(&self, author_id: &AuthorId, now: DateTime<Utc>) -> Result<String, AuthError> {
        let exp = TimeDelta::try_hours(self.config.expiration_hours)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                AuthError::Signing(format!(
                    "token lifetime of {} hours is out of range",
                    self.config.expiration_hours
                ))
            })?;

        let claims = Claims {
            sub: author_id.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, author_id: &AuthorId) -> Result<String, AuthError> {
        self.issue_at(author_id, Utc::now())
    }

    fn decode(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "Rejected session token");
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    _ => AuthError::InvalidToken(e.to_string()),
                }
            })?;

        if token_data.claims.sub.is_empty() {
            return Err(AuthError::InvalidToken("empty subject".to_string()));
        }

        Ok(TokenClaims {
            author_id: AuthorId::from(token_data.claims.sub),
            issuer: token_data.claims.iss,
            exp: token_data.claims.exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key".to_string(),
            expiration_hours: 24,
            issuer: "test-issuer".to_string(),
        }
    }

    #[test]
    fn test_issue_then_validate() {
        let service = JwtTokenService::new(test_config());
        let author_id = AuthorId::generate();

        let token = service.issue(&author_id).unwrap();

        assert!(!token.is_empty());
        assert_eq!(service.validate(&token), Some(author_id));
    }

    #[test]
    fn test_decode_exposes_claims() {
        let service = JwtTokenService::new(test_config());
        let author_id = AuthorId::from("100000123456789");

        let token = service.issue(&author_id).unwrap();
        let claims = service.decode(&token).unwrap();

        assert_eq!(claims.author_id, author_id);
        assert_eq!(claims.issuer, "test-issuer");
        assert!(claims.exp > Utc::now().timestamp() + 23 * 3600);
    }

    #[test]
    fn test_expired_token_is_anonymous() {
        let service = JwtTokenService::new(test_config());
        let author_id = AuthorId::generate();

        let issued = Utc::now() - TimeDelta::hours(24) - TimeDelta::seconds(5);
        let token = service.issue_at(&author_id, issued).unwrap();

        assert!(matches!(service.decode(&token), Err(AuthError::TokenExpired)));
        assert_eq!(service.validate(&token), None);
    }

    #[test]
    fn test_garbage_and_empty_tokens_are_anonymous() {
        let service = JwtTokenService::new(test_config());

        assert!(matches!(
            service.decode("invalid-token"),
            Err(AuthError::InvalidToken(_))
        ));
        assert_eq!(service.validate("invalid-token"), None);
        assert_eq!(service.validate(""), None);
    }

    #[test]
    fn test_tampered_signature_is_rejected() {
        let service = JwtTokenService::new(test_config());
        let token = service.issue(&AuthorId::generate()).unwrap();

        let at = token.len() - 10;
        let original = &token[at..at + 1];
        let replacement = if original == "A" { "B" } else { "A" };
        let tampered = format!("{}{}{}", &token[..at], replacement, &token[at + 1..]);

        assert_eq!(service.validate(&tampered), None);
    }

    #[test]
    fn test_foreign_key_is_rejected() {
        let ours = JwtTokenService::new(test_config());
        let theirs = JwtTokenService::new(JwtConfig {
            secret: "another-secret".to_string(),
            ..test_config()
        });

        let token = theirs.issue(&AuthorId::generate()).unwrap();
        assert_eq!(ours.validate(&token), None);
    }

    #[test]
    fn test_wrong_issuer_is_rejected() {
        let service1 = JwtTokenService::new(JwtConfig {
            issuer: "issuer1".to_string(),
            ..test_config()
        });
        let service2 = JwtTokenService::new(JwtConfig {
            issuer: "issuer2".to_string(),
            ..test_config()
        });

        let token = service1.issue(&AuthorId::generate()).unwrap();

        assert!(service2.decode(&token).is_err());
    }

    #[test]
    fn test_out_of_range_lifetime_fails_without_panicking() {
        let service = JwtTokenService::new(JwtConfig {
            expiration_hours: 3_000_000_000,
            ..test_config()
        });

        let err = service.issue(&AuthorId::generate()).unwrap_err();
        assert!(matches!(err, AuthError::Signing(_)));
    }
}
