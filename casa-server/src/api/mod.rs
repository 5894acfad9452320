//! API routes
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`members`] - member registration
//! - [`events`] - events and participants
//! - [`therapies`] - therapy catalog with ticket books
//! - [`therapy_sessions`] - ticket issuance and calling
//! - [`monthly_payments`] - monthly dues
//! - [`transactions`] - income and expenses
//! - [`reports`] - aggregated statistics

pub mod health;

pub mod events;
pub mod members;
pub mod monthly_payments;
pub mod reports;
pub mod therapies;
pub mod therapy_sessions;
pub mod transactions;

use axum::{Router, middleware};
use tower_http::{compression::CompressionLayer, cors::CorsLayer};

use crate::core::ServerState;

pub use crate::utils::AppResult;

/// Access log: one line per request under the `http_access` target
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());
    response
}

/// Resource routers, without state
pub fn routes() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(members::router())
        .merge(events::router())
        .merge(therapies::router())
        .merge(therapy_sessions::router())
        .merge(monthly_payments::router())
        .merge(transactions::router())
        .merge(reports::router())
}

/// Full application with state and layers applied
pub fn build_app(state: ServerState) -> Router {
    routes()
        .layer(middleware::from_fn(log_request))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
