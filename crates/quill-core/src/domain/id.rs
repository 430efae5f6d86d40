//! Randomized entity identifiers.
//!
//! Identifiers are a fixed prefix followed by a random nine digit number.
//! Authors and posts use distinct prefixes so the two id spaces are easy to
//! tell apart. Creation retries with a fresh identifier on collision, up to
//! [`MAX_ID_ATTEMPTS`] times.

use std::fmt;
use std::future::Future;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::RepoError;

/// Prefix of every author identifier.
pub const AUTHOR_ID_PREFIX: &str = "100000";

/// Prefix of every post identifier.
pub const POST_ID_PREFIX: &str = "500000";

/// Upper bound on identifier generation attempts for a single create.
pub const MAX_ID_ATTEMPTS: u32 = 100;

const RANDOM_LOW: u32 = 100_000_000;
const RANDOM_HIGH: u32 = 999_999_999;

fn random_suffix() -> u32 {
    rand::thread_rng().gen_range(RANDOM_LOW..RANDOM_HIGH)
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $prefix:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generates a new random identifier.
            pub fn generate() -> Self {
                Self(format!("{}{}", $prefix, random_suffix()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Opaque author identifier.
    AuthorId,
    AUTHOR_ID_PREFIX
);

string_id!(
    /// Opaque post identifier.
    PostId,
    POST_ID_PREFIX
);

/// Runs `insert` with freshly generated identifiers until it stops reporting
/// [`RepoError::DuplicateId`].
///
/// Any other outcome is returned as is. Running out of attempts yields
/// [`RepoError::IdExhausted`].
pub async fn with_fresh_id<I, T, G, F, Fut>(mut generate: G, mut insert: F) -> Result<T, RepoError>
where
    G: FnMut() -> I,
    F: FnMut(I) -> Fut,
    Fut: Future<Output = Result<T, RepoError>>,
{
    for _ in 0..MAX_ID_ATTEMPTS {
        match insert(generate()).await {
            Err(RepoError::DuplicateId) => continue,
            other => return other,
        }
    }

    Err(RepoError::IdExhausted {
        attempts: MAX_ID_ATTEMPTS,
    })
}
