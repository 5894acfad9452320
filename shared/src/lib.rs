//! Shared types for the Casa workspace
//!
//! Entity models, wire types and the pure domain rules used by both the
//! server and the client:
//!
//! - [`models`] - entities and request payloads
//! - [`access`] - privilege evaluation
//! - [`screen`] - protected screens and their required levels
//! - [`tickets`] - daily ticket book rules
//! - [`reports`] - aggregation reducers
//! - [`error`] - error codes and the JSON error body

pub mod access;
pub mod error;
pub mod models;
pub mod reports;
pub mod screen;
pub mod tickets;

// Re-exports
pub use error::{ErrorBody, ErrorCode};
pub use screen::Screen;
pub use tickets::TicketError;

/// Default business time zone
pub const DEFAULT_TIMEZONE: chrono_tz::Tz = chrono_tz::America::Sao_Paulo;
