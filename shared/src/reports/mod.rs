//! Aggregation over fetched collections
//!
//! Every reducer is pure and recomputed on demand; nothing here caches.
//!
//! - [`finance`] - balance, totals, monthly cash flow
//! - [`membership`] - counts by type/gender, age histogram
//! - [`events`] - per-event and per-worker participation
//! - [`birthdays`] - birthdays of the month and of the day

pub mod birthdays;
pub mod events;
pub mod finance;
pub mod membership;

pub use birthdays::{Birthdays, birthdays};
pub use events::{EventParticipation, EventStats, WorkerParticipation, event_stats};
pub use finance::{FinancialTotals, MonthlyFinance, balance, monthly_breakdown, totals};
pub use membership::{AgeBracket, AgeGroup, MembershipStats, age_in_year, membership_stats};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Event, FinancialTransaction, Member, MonthlyPayment};

/// Inclusive date window; open ends are unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|s| date >= s) && self.end.is_none_or(|e| date <= e)
    }
}

/// Everything the reports screen shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub membership: MembershipStats,
    pub events: EventStats,
    pub totals: FinancialTotals,
    pub monthly: Vec<MonthlyFinance>,
}

/// Build the report over `range`
///
/// Events and transactions are filtered by their date; membership and dues
/// are taken as given.
pub fn summarize(
    members: &[Member],
    events: &[Event],
    transactions: &[FinancialTransaction],
    payments: &[MonthlyPayment],
    range: DateRange,
    current_year: i32,
) -> ReportSummary {
    let events: Vec<Event> = events
        .iter()
        .filter(|e| range.contains(e.date))
        .cloned()
        .collect();
    let transactions: Vec<FinancialTransaction> = transactions
        .iter()
        .filter(|t| range.contains(t.date.date_naive()))
        .cloned()
        .collect();

    ReportSummary {
        membership: membership_stats(members, current_year),
        events: event_stats(&events, members),
        totals: totals(&transactions, payments),
        monthly: monthly_breakdown(&transactions, payments),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let range = DateRange {
            start: Some(day(10)),
            end: Some(day(20)),
        };
        assert!(range.contains(day(10)));
        assert!(range.contains(day(20)));
        assert!(!range.contains(day(9)));
        assert!(!range.contains(day(21)));
        assert!(DateRange::default().contains(day(1)));
    }

    #[test]
    fn test_empty_summary() {
        let summary = summarize(&[], &[], &[], &[], DateRange::default(), 2026);
        assert_eq!(summary.membership.total, 0);
        assert_eq!(summary.events.total_events, 0);
        assert!(summary.monthly.is_empty());
    }
}
