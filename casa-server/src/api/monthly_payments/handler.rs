//! Monthly dues API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Utc;
use serde::Deserialize;
use shared::models::{MonthlyPayment, MonthlyPaymentUpsert};

use crate::core::ServerState;
use crate::db::repository::monthly_payment;
use crate::utils::time::parse_month;
use crate::utils::validation::validate_amount;
use crate::utils::AppResult;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub month: Option<String>,
}

/// GET /api/monthly-payments?month=YYYY-MM
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<MonthlyPayment>>> {
    if let Some(month) = &query.month {
        parse_month(month)?;
    }
    Ok(Json(monthly_payment::find_all(&state.db, query.month.as_deref())))
}

/// POST /api/monthly-payments - create or update (member, month)
pub async fn upsert(
    State(state): State<ServerState>,
    Json(payload): Json<MonthlyPaymentUpsert>,
) -> AppResult<Json<MonthlyPayment>> {
    parse_month(&payload.month)?;
    validate_amount(payload.amount, "amount")?;
    let payment = monthly_payment::upsert(&state.db, payload, Utc::now())?;
    tracing::info!(member = %payment.member_id, month = %payment.month, paid = payment.paid, "Monthly dues updated");
    Ok(Json(payment))
}
