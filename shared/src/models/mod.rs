//! Data models
//!
//! Shared between casa-server and casa-client (via API).
//! Wire format is camelCase JSON; all IDs are opaque strings.

pub mod event;
pub mod member;
pub mod payment;
pub mod privilege;
pub mod therapy;
pub mod transaction;

// Re-exports
pub use event::*;
pub use member::*;
pub use payment::*;
pub use privilege::*;
pub use therapy::*;
pub use transaction::*;
