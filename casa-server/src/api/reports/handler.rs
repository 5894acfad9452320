//! Reports API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use shared::models::Member;
use shared::reports::{self, DateRange, ReportSummary};

use crate::core::ServerState;
use crate::utils::time::{self, parse_date};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    #[serde(flatten)]
    pub summary: ReportSummary,
    pub range: DateRange,
    pub birthdays_this_month: Vec<Member>,
    pub birthdays_today: Vec<Member>,
}

/// GET /api/reports?start=YYYY-MM-DD&end=YYYY-MM-DD
pub async fn summary(
    State(state): State<ServerState>,
    Query(query): Query<RangeQuery>,
) -> AppResult<Json<ReportResponse>> {
    let range = DateRange {
        start: query.start.as_deref().map(parse_date).transpose()?,
        end: query.end.as_deref().map(parse_date).transpose()?,
    };
    if let (Some(start), Some(end)) = (range.start, range.end)
        && start > end
    {
        return Err(AppError::validation(format!(
            "start ({start}) must not be after end ({end})"
        )));
    }

    let today = time::today(state.tz());
    let tables = state.db.read();
    let summary = reports::summarize(
        &tables.members,
        &tables.events,
        &tables.transactions,
        &tables.monthly_payments,
        range,
        today.year(),
    );
    let birthdays = reports::birthdays(&tables.members, today);

    Ok(Json(ReportResponse {
        summary,
        range,
        birthdays_this_month: birthdays.month.into_iter().cloned().collect(),
        birthdays_today: birthdays.today.into_iter().cloned().collect(),
    }))
}
