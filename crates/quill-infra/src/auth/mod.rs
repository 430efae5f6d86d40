//! Authentication implementations.

mod jwt;
mod password;

pub use jwt::{DEV_SIGNING_KEY, JwtConfig, JwtTokenService};
pub use password::Argon2PasswordService;
