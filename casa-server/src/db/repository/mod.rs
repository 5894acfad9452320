//! Repository Module
//!
//! CRUD over the in-memory tables, one module per entity. Functions take the
//! [`DbService`](super::DbService) handle and lock it themselves.

pub mod event;
pub mod member;
pub mod monthly_payment;
pub mod therapy;
pub mod therapy_session;
pub mod transaction;

use shared::TicketError;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Client snapshot no longer matches the stored state
    #[error("Stale snapshot: {0}")]
    Stale(String),

    #[error(transparent)]
    Ticket(#[from] TicketError),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
