//! Error codes and the JSON error body
//!
//! The server renders every failure as an [`ErrorBody`]; the client parses
//! the same body back to surface `message` as an inline banner.

use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Standard API error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Success
    #[serde(rename = "E0000")]
    Success,
    /// Validation error (400)
    #[serde(rename = "E0002")]
    Validation,
    /// Resource not found (404)
    #[serde(rename = "E0003")]
    NotFound,
    /// Resource already exists or stale snapshot (409)
    #[serde(rename = "E0004")]
    Conflict,
    /// Business rule violation (422)
    #[serde(rename = "E0005")]
    BusinessRule,
    /// Invalid request (400)
    #[serde(rename = "E0006")]
    Invalid,
    /// Internal server error (500)
    #[serde(rename = "E9001")]
    Internal,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::BusinessRule => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Invalid => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the default message for this error
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Validation => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::Conflict => "Resource already exists",
            Self::BusinessRule => "Business rule violation",
            Self::Invalid => "Invalid request",
            Self::Internal => "Internal server error",
        }
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Success => "E0000",
            Self::Validation => "E0002",
            Self::NotFound => "E0003",
            Self::Conflict => "E0004",
            Self::BusinessRule => "E0005",
            Self::Invalid => "E0006",
            Self::Internal => "E9001",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error response body
///
/// ```json
/// { "code": "E0005", "message": "Member already has a session for Reyki today" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

impl ErrorBody {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
