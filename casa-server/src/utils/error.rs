//! Unified error handling
//!
//! [`AppError`] is returned by handlers and repositories and rendered as a
//! [`shared::ErrorBody`].
//!
//! # Error codes
//!
//! | Code | Status | Meaning |
//! |------|--------|---------|
//! | E0002 | 400 | validation failed |
//! | E0003 | 404 | resource not found |
//! | E0004 | 409 | conflict / stale snapshot |
//! | E0005 | 422 | business rule (ticket capacity, duplicate session) |
//! | E0006 | 400 | invalid request |
//! | E9001 | 500 | internal error (details only logged) |
//!
//! # Usage
//!
//! ```ignore
//! Err(AppError::not_found(format!("Event {}", id)))
//! ```

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use shared::{ErrorBody, ErrorCode, TicketError};
use tracing::error;

use crate::db::repository::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Business errors (4xx) ==========
    #[error("{0} not found")]
    /// Resource missing (404)
    NotFound(String),

    #[error("{0}")]
    /// Resource conflict (409)
    Conflict(String),

    #[error("{0}")]
    /// Validation failed (400)
    Validation(String),

    #[error("{0}")]
    /// Business rule violation (422)
    BusinessRule(String),

    #[error("Invalid request: {0}")]
    /// Invalid request (400)
    Invalid(String),

    // ========== System errors (5xx) ==========
    #[error("Internal server error: {0}")]
    /// Internal error (500)
    Internal(String),
}

impl AppError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn business_rule(msg: impl Into<String>) -> Self {
        Self::BusinessRule(msg.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::Conflict(_) => ErrorCode::Conflict,
            AppError::Validation(_) => ErrorCode::Validation,
            AppError::BusinessRule(_) => ErrorCode::BusinessRule,
            AppError::Invalid(_) => ErrorCode::Invalid,
            AppError::Internal(_) => ErrorCode::Internal,
        }
    }
}

impl From<TicketError> for AppError {
    fn from(e: TicketError) -> Self {
        AppError::BusinessRule(e.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Stale(msg) => AppError::Conflict(msg),
            RepoError::Ticket(e) => e.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let message = match &self {
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                code.default_message().to_string()
            }
            other => other.to_string(),
        };

        (code.status_code(), Json(ErrorBody::new(code, message))).into_response()
    }
}
