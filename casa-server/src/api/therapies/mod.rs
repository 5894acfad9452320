//! Therapy API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/therapies | GET | catalog with today's ticket books |
//! | /api/therapies/today | GET | catalog with remaining tickets for today |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/therapies", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/today", get(handler::today))
}
