//! Error rendering - failure envelopes for the API, plain text for pages.

use actix_web::http::{Method, StatusCode, header};
use actix_web::{HttpResponse, ResponseError};
use quill_core::ports::{AuthError, RenderError};
use quill_core::{DomainError, RepoError};
use quill_shared::ApiResponse;
use std::fmt;

use crate::routing::RouteError;

/// Message returned when an owner-qualified mutation matched nothing.
pub const NO_WRITE_ACCESS: &str = "You don't have write access to the post!";

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    NotFound,
    MethodNotAllowed { allowed: Vec<Method> },
    Forbidden,
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound => write!(f, "Not found"),
            AppError::MethodNotAllowed { .. } => write!(f, "Method not allowed"),
            AppError::Forbidden => write!(f, "Forbidden"),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    /// Client-facing message. Internal details are logged, never returned.
    pub fn public_message(&self) -> String {
        match self {
            AppError::NotFound => "URL not found!".to_string(),
            AppError::MethodNotAllowed { .. } => "Method not allowed!".to_string(),
            AppError::Forbidden => "Not logged in!".to_string(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                "Internal server error".to_string()
            }
        }
    }

    fn allow_header(&self) -> Option<String> {
        match self {
            AppError::MethodNotAllowed { allowed } => Some(
                allowed
                    .iter()
                    .map(Method::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            _ => None,
        }
    }

    /// Plain-text rendering used by the website tree.
    pub fn page_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(allow) = self.allow_header() {
            builder.insert_header((header::ALLOW, allow));
        }
        builder
            .content_type("text/plain; charset=utf-8")
            .body(self.public_message())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(allow) = self.allow_header() {
            builder.insert_header((header::ALLOW, allow));
        }
        builder.json(ApiResponse::failure(self.public_message()))
    }
}

impl From<RouteError> for AppError {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::NotFound => AppError::NotFound,
            RouteError::MethodNotAllowed { allowed } => AppError::MethodNotAllowed { allowed },
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, .. } => {
                AppError::BadRequest(format!("{} does not exist!", entity_type))
            }
            DomainError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Constraint(msg) => {
                tracing::debug!("Constraint violation: {}", msg);
                AppError::BadRequest("Request conflicts with existing data".to_string())
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
