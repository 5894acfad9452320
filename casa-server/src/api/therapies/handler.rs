//! Therapy API Handlers

use axum::{Json, extract::State};
use chrono::NaiveDate;
use serde::Serialize;
use shared::models::Therapy;

use crate::core::ServerState;
use crate::db::repository::therapy;
use crate::utils::{AppResult, time};

/// Therapy with the availability of today's book
///
/// Flattened, so clients that only know [`Therapy`] can still decode it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapyToday {
    #[serde(flatten)]
    pub therapy: Therapy,
    pub remaining_tickets: u32,
    pub day: NaiveDate,
}

/// GET /api/therapies - therapy catalog
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Therapy>>> {
    let today = time::today(state.tz());
    Ok(Json(therapy::find_all(&state.db, today)))
}

/// GET /api/therapies/today - catalog with remaining tickets
pub async fn today(State(state): State<ServerState>) -> AppResult<Json<Vec<TherapyToday>>> {
    let day = time::today(state.tz());
    let list = therapy::find_all(&state.db, day)
        .into_iter()
        .map(|therapy| TherapyToday {
            remaining_tickets: therapy.remaining_tickets(),
            therapy,
            day,
        })
        .collect();
    Ok(Json(list))
}
