//! # Quill Shared
//!
//! Wire types shared by the server and its clients.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, Status};

/// Request header carrying the session token on API calls.
pub const TOKEN_HEADER: &str = "token";
