//! Utilities
//!
//! - [`AppError`] - application error type
//! - [`AppResult`] - handler/repository result alias
//! - logging, time zone and validation helpers

pub mod error;
pub mod logger;
pub mod result;
pub mod time;
pub mod validation;

pub use error::AppError;
pub use result::AppResult;
