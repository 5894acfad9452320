//! Member API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{Member, MemberCreate, MemberType};

use crate::core::ServerState;
use crate::db::repository::member;
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "type")]
    pub member_type: Option<MemberType>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub term: String,
}

/// GET /api/members?type= - list members, optionally of one type
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Member>>> {
    Ok(Json(member::find_all(&state.db, query.member_type)))
}

/// GET /api/members/search?term= - search by name or phone
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Member>>> {
    Ok(Json(member::search(&state.db, &query.term)))
}

/// POST /api/members - register a member
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MemberCreate>,
) -> AppResult<Json<Member>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    if payload.birth_date > crate::utils::time::today(state.tz()) {
        return Err(AppError::validation("birthDate must not be in the future"));
    }

    let created = member::create(&state.db, payload);
    tracing::info!(id = %created.id, kind = created.member_type.as_str(), "Member registered");
    Ok(Json(created))
}

/// DELETE /api/members/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    member::delete(&state.db, &id)?;
    tracing::info!(id = %id, "Member deleted");
    Ok(Json(true))
}
