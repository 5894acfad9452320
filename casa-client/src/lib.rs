//! Casa Client - client core for the casa screens
//!
//! Typed HTTP calls to the casa server plus the screen-side logic that
//! sits on top: identity and route guard, therapy scheduling, the ticket
//! caller and its call board.

pub mod backend;
pub mod birthdays;
pub mod board;
pub mod caller;
pub mod clock;
pub mod config;
pub mod error;
pub mod guard;
pub mod http;
pub mod identity;
pub mod poller;
pub mod scheduling;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

pub use backend::TherapyBackend;
pub use board::{BoardView, CallBoard, CallEntry};
pub use caller::{Advance, Cue, SilentCue, TicketCaller};
pub use clock::{Clock, ManualClock, SystemClock};
pub use guard::{GuardOutcome, GuardState, RouteGuard};
pub use identity::{FileIdentity, Identity, IdentityError, IdentityProvider, MemoryIdentity};
pub use poller::Poller;
pub use scheduling::{Scheduled, TherapyHistory, TherapyScheduler};
