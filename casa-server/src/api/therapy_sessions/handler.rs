//! Therapy session API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use shared::models::{TherapySession, TherapySessionCreate};

use crate::core::ServerState;
use crate::db::repository::therapy_session;
use crate::utils::AppResult;

/// GET /api/therapy-sessions - every session
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<TherapySession>>> {
    Ok(Json(therapy_session::find_all(&state.db)))
}

/// GET /api/therapy-sessions/today - sessions of the current business day
pub async fn today(State(state): State<ServerState>) -> AppResult<Json<Vec<TherapySession>>> {
    Ok(Json(therapy_session::find_today(&state.db, state.tz())))
}

/// GET /api/therapy-sessions/{memberId} - one member's history, newest first
pub async fn by_member(
    State(state): State<ServerState>,
    Path(member_id): Path<String>,
) -> AppResult<Json<Vec<TherapySession>>> {
    Ok(Json(therapy_session::find_by_member(&state.db, &member_id)))
}

/// POST /api/therapy-sessions - issue the next ticket
///
/// 422 when the book is full or the member already holds a ticket of this
/// therapy today; 409 when `ticketNumber` no longer matches.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TherapySessionCreate>,
) -> AppResult<Json<TherapySession>> {
    let session = therapy_session::issue(&state.db, payload, Utc::now(), state.tz())?;
    Ok(Json(session))
}

/// POST /api/therapy-sessions/{id}/call - mark called
pub async fn call(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<TherapySession>> {
    let session = therapy_session::mark_called(&state.db, &id)?;
    tracing::info!(
        therapy = %session.therapy_id,
        ticket = session.ticket_number,
        "Ticket called"
    );
    Ok(Json(session))
}
