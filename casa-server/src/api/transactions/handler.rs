//! Financial transaction API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use shared::models::{FinancialTransaction, TransactionCreate};

use crate::core::ServerState;
use crate::db::repository::transaction;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_amount, validate_optional_text, validate_required_text,
};

/// GET /api/transactions - newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<FinancialTransaction>>> {
    Ok(Json(transaction::find_all(&state.db)))
}

/// POST /api/transactions
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TransactionCreate>,
) -> AppResult<Json<FinancialTransaction>> {
    validate_required_text(&payload.description, "description", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.category, "category", MAX_NAME_LEN)?;
    validate_amount(payload.amount, "amount")?;
    Ok(Json(transaction::create(&state.db, payload, Utc::now())))
}

/// DELETE /api/transactions/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    transaction::delete(&state.db, &id)?;
    Ok(Json(true))
}
