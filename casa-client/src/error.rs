//! Client error types

use shared::TicketError;
use thiserror::Error;

/// Client error type
///
/// `Display` is the inline message a screen shows; nothing is retried.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// 400 from the server
    #[error("Validation error: {0}")]
    Validation(String),

    /// 409: our snapshot is stale, refetch and retry by hand
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 422: a business rule refused the request
    #[error("{0}")]
    BusinessRule(String),

    /// Refused locally before any request was sent
    #[error("{0}")]
    Rejected(#[from] TicketError),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
