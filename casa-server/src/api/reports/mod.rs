//! Reports API
//!
//! Server-side aggregation over the same reducers the client uses.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/reports", get(handler::summary))
}
