//! Event API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{Event, EventCreate, EventPatch};

use crate::core::ServerState;
use crate::db::repository::event;
use crate::utils::time::parse_date;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_max_len, validate_optional_text, validate_required_text,
};
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub date: Option<String>,
}

/// GET /api/events?date=YYYY-MM-DD - list events, optionally of one day
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Event>>> {
    let date = query.date.as_deref().map(parse_date).transpose()?;
    Ok(Json(event::find_all(&state.db, date)))
}

/// POST /api/events - create an event without participants
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EventCreate>,
) -> AppResult<Json<Event>> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_max_len(&payload.description, "description", MAX_NOTE_LEN)?;
    Ok(Json(event::create(&state.db, payload)))
}

/// PATCH /api/events/{id} - partial update (participants toggle included)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EventPatch>,
) -> AppResult<Json<Event>> {
    if let Some(title) = &payload.title {
        validate_required_text(title, "title", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    Ok(Json(event::update(&state.db, &id, payload)?))
}

/// DELETE /api/events/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    event::delete(&state.db, &id)?;
    Ok(Json(true))
}
