//! TherapySession Repository
//!
//! [`issue`] is the only way a ticket is created. It validates and inserts
//! under one write lock: capacity, one session per (member, therapy, day),
//! and the optional ticket number the client computed.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use shared::models::{TherapySession, TherapySessionCreate};
use shared::tickets;

use super::therapy::roll_over;
use super::{RepoError, RepoResult};
use crate::db::{DbService, new_id};

pub fn find_all(db: &DbService) -> Vec<TherapySession> {
    db.read().therapy_sessions.clone()
}

/// Sessions dated today in `tz`, by therapy then ticket
pub fn find_today(db: &DbService, tz: Tz) -> Vec<TherapySession> {
    let today = tickets::today(tz);
    let mut sessions = tickets::sessions_on(&db.read().therapy_sessions, today, tz);
    sessions.sort_by(|a, b| {
        a.therapy_id
            .cmp(&b.therapy_id)
            .then(a.ticket_number.cmp(&b.ticket_number))
    });
    sessions
}

/// A member's sessions, newest first
pub fn find_by_member(db: &DbService, member_id: &str) -> Vec<TherapySession> {
    let mut sessions: Vec<TherapySession> = db
        .read()
        .therapy_sessions
        .iter()
        .filter(|s| s.member_id == member_id)
        .cloned()
        .collect();
    sessions.sort_by(|a, b| b.date.cmp(&a.date));
    sessions
}

/// Issue the next ticket of a therapy to a member
///
/// `now` fixes the business day. A session dated on another day is refused:
/// ticket books only exist for today.
pub fn issue(
    db: &DbService,
    data: TherapySessionCreate,
    now: DateTime<Utc>,
    tz: Tz,
) -> RepoResult<TherapySession> {
    let today = tickets::session_day(now, tz);
    let date = data.date.unwrap_or(now);
    if tickets::session_day(date, tz) != today {
        return Err(RepoError::Validation(format!(
            "Sessions can only be scheduled for today ({})",
            today
        )));
    }

    let mut tables = db.write();
    roll_over(&mut tables, today);

    if !tables.members.iter().any(|m| m.id == data.member_id) {
        return Err(RepoError::NotFound(format!("Member {}", data.member_id)));
    }
    let index = tables
        .therapies
        .iter()
        .position(|t| t.id == data.therapy_id)
        .ok_or_else(|| RepoError::NotFound(format!("Therapy {}", data.therapy_id)))?;

    let ticket_number = tickets::check_issue(
        &tables.therapies[index],
        &tables.therapy_sessions,
        &data.member_id,
        today,
        tz,
    )?;

    if let Some(expected) = data.ticket_number
        && expected != ticket_number
    {
        return Err(RepoError::Stale(format!(
            "Ticket {} was already issued, next ticket is {}",
            expected, ticket_number
        )));
    }

    let session = TherapySession {
        id: new_id(),
        member_id: data.member_id,
        therapy_id: data.therapy_id,
        date,
        ticket_number,
        called: false,
    };
    tables.therapies[index].current_tickets.push(ticket_number);
    tables.therapy_sessions.push(session.clone());

    tracing::info!(
        therapy = %session.therapy_id,
        ticket = ticket_number,
        "Issued therapy ticket"
    );
    Ok(session)
}

/// Mark a session as called; calling twice is harmless
pub fn mark_called(db: &DbService, id: &str) -> RepoResult<TherapySession> {
    let mut tables = db.write();
    let session = tables
        .therapy_sessions
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or_else(|| RepoError::NotFound(format!("Therapy session {}", id)))?;
    session.called = true;
    Ok(session.clone())
}
