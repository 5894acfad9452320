//! Daily ticket book rules
//!
//! A therapy issues at most `max_tickets` tickets per calendar day, numbered
//! `1..=max_tickets` in issue order. A member holds at most one ticket per
//! (therapy, day). Days are taken in the business time zone.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use crate::models::{Therapy, TherapySession};

/// Rejection raised before a ticket is issued
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketError {
    #[error("Maximum number of tickets reached for {therapy} ({capacity})")]
    CapacityReached { therapy: String, capacity: u32 },

    #[error("Member already has a session for {therapy} today")]
    AlreadyScheduledToday { therapy: String },
}

/// Calendar day of `at` in `tz`
pub fn session_day(at: DateTime<Utc>, tz: Tz) -> NaiveDate {
    at.with_timezone(&tz).date_naive()
}

/// Today in `tz`
pub fn today(tz: Tz) -> NaiveDate {
    session_day(Utc::now(), tz)
}

/// Number the next ticket would carry, if the book is not full
pub fn next_ticket(therapy: &Therapy) -> Result<u32, TicketError> {
    if therapy.is_full() {
        return Err(TicketError::CapacityReached {
            therapy: therapy.name.clone(),
            capacity: therapy.max_tickets,
        });
    }
    Ok(therapy.issued_count() + 1)
}

pub fn has_session_on(
    sessions: &[TherapySession],
    member_id: &str,
    therapy_id: &str,
    day: NaiveDate,
    tz: Tz,
) -> bool {
    sessions.iter().any(|s| {
        s.member_id == member_id && s.therapy_id == therapy_id && session_day(s.date, tz) == day
    })
}

/// Validate issuing a ticket of `therapy` to `member_id` on `day`
///
/// `sessions` must contain the member's known sessions. Returns the ticket
/// number to issue.
pub fn check_issue(
    therapy: &Therapy,
    sessions: &[TherapySession],
    member_id: &str,
    day: NaiveDate,
    tz: Tz,
) -> Result<u32, TicketError> {
    let ticket = next_ticket(therapy)?;
    if has_session_on(sessions, member_id, &therapy.id, day, tz) {
        return Err(TicketError::AlreadyScheduledToday {
            therapy: therapy.name.clone(),
        });
    }
    Ok(ticket)
}

/// Sessions dated `day` in `tz`
pub fn sessions_on(sessions: &[TherapySession], day: NaiveDate, tz: Tz) -> Vec<TherapySession> {
    sessions
        .iter()
        .filter(|s| session_day(s.date, tz) == day)
        .cloned()
        .collect()
}

/// A member's sessions of one therapy, newest first
pub fn history<'a>(sessions: &'a [TherapySession], therapy_id: &str) -> Vec<&'a TherapySession> {
    let mut list: Vec<_> = sessions.iter().filter(|s| s.therapy_id == therapy_id).collect();
    list.sort_by(|a, b| b.date.cmp(&a.date));
    list
}

pub fn session_count(sessions: &[TherapySession], therapy_id: &str) -> usize {
    sessions.iter().filter(|s| s.therapy_id == therapy_id).count()
}

/// Split one therapy's sessions into (called, waiting), each by ticket number
pub fn partition_calls(
    sessions: &[TherapySession],
    therapy_id: &str,
) -> (Vec<TherapySession>, Vec<TherapySession>) {
    let mut mine: Vec<TherapySession> = sessions
        .iter()
        .filter(|s| s.therapy_id == therapy_id)
        .cloned()
        .collect();
    mine.sort_by_key(|s| s.ticket_number);
    mine.into_iter().partition(|s| s.called)
}
