//! Business time zone helpers
//!
//! Handlers parse query dates here; "today" is always taken in the
//! configured zone, never in UTC.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Parse a month key (YYYY-MM)
pub fn parse_month(month: &str) -> AppResult<NaiveDate> {
    shared::models::parse_month(month)
        .ok_or_else(|| AppError::validation(format!("Invalid month format: {}", month)))
}

/// Today in the business zone
pub fn today(tz: Tz) -> NaiveDate {
    shared::tickets::today(tz)
}

/// Time left until the next local midnight in `tz`
///
/// DST gap fallback: if local midnight does not exist, fall back to UTC
/// midnight of the same date.
pub fn duration_until_next_midnight(now: DateTime<Utc>, tz: Tz) -> std::time::Duration {
    let local_today = now.with_timezone(&tz).date_naive();
    let next_day = local_today.succ_opt().unwrap_or(local_today);
    let naive = next_day.and_time(chrono::NaiveTime::MIN);
    let next_midnight = naive
        .and_local_timezone(tz)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc());

    (next_midnight - now)
        .to_std()
        .unwrap_or(std::time::Duration::from_secs(60))
}
