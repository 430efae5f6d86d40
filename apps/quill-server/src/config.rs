//! Application configuration loaded from environment variables.

use std::env;
use std::ops::RangeInclusive;
use std::str::FromStr;

use quill_infra::{DEV_SIGNING_KEY, DatabaseConfig, JwtConfig};

/// Accepted session token lifetimes, in hours (up to one year).
const TOKEN_TTL_HOURS: RangeInclusive<i64> = 1..=8760;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("QUILL_SIGNING_KEY must be set when RUST_ENV=production")]
    MissingSigningKey,

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database = match get("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => Some(DatabaseConfig {
                url,
                max_connections: parse_or(&get, "DB_MAX_CONNECTIONS", 20)?,
                min_connections: parse_or(&get, "DB_MIN_CONNECTIONS", 2)?,
            }),
            None => None,
        };

        let production = get("RUST_ENV").is_some_and(|v| v.eq_ignore_ascii_case("production"));
        let secret = match get("QUILL_SIGNING_KEY").filter(|key| !key.is_empty()) {
            Some(key) => key,
            None if production => return Err(ConfigError::MissingSigningKey),
            None => {
                tracing::warn!("QUILL_SIGNING_KEY not set. Using the development signing key.");
                DEV_SIGNING_KEY.to_string()
            }
        };

        let expiration_hours: i64 = parse_or(&get, "QUILL_TOKEN_TTL_HOURS", 24)?;
        if !TOKEN_TTL_HOURS.contains(&expiration_hours) {
            return Err(ConfigError::Invalid {
                name: "QUILL_TOKEN_TTL_HOURS",
                value: expiration_hours.to_string(),
            });
        }

        let jwt = JwtConfig {
            secret,
            expiration_hours,
            issuer: get("QUILL_TOKEN_ISSUER").unwrap_or_else(|| "quill".to_string()),
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&get, "PORT", 8080)?,
            database,
            jwt,
        })
    }
}

fn parse_or<T: FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match get(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
