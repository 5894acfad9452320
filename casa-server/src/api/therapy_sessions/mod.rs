//! Therapy session API
//!
//! `/{member_id}` lists one member's sessions; `/{id}/call` marks a session
//! called. Both share the first path segment.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/therapy-sessions", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/today", get(handler::today))
        .route("/{id}", get(handler::by_member))
        .route("/{id}/call", post(handler::call))
}
