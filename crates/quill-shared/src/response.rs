//! The uniform JSON envelope returned by every API endpoint.
//!
//! ```json
//! {"status": "success", "content": ...}
//! {"status": "failure", "message": "..."}
//! ```

use serde::{Deserialize, Serialize};

/// Outcome tag of an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Failure,
}

/// Standard API response wrapper.
///
/// `status` is always present. Successful responses carry `content` (or a
/// `message` for operations without a payload); failures carry only `message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(content: T) -> Self {
        Self {
            status: Status::Success,
            content: Some(content),
            message: None,
        }
    }
}

impl ApiResponse<()> {
    /// Success without a payload, e.g. after a deletion.
    pub fn done(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            content: None,
            message: Some(message.into()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: Status::Failure,
            content: None,
            message: Some(message.into()),
        }
    }
}
