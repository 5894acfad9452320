//! Therapy Repository
//!
//! Ticket books are per business day. Any access made on a later day than
//! the stored `tickets_day` first clears every book.

use chrono::NaiveDate;
use shared::models::Therapy;

use crate::db::{DbService, Tables};

/// Clear the ticket books if they belong to an earlier day
///
/// Returns true when a rollover happened.
pub(crate) fn roll_over(tables: &mut Tables, today: NaiveDate) -> bool {
    if tables.tickets_day.is_some_and(|day| day >= today) {
        return false;
    }
    for therapy in tables.therapies.iter_mut() {
        therapy.current_tickets.clear();
    }
    let rolled = tables.tickets_day.is_some();
    tables.tickets_day = Some(today);
    rolled
}

/// Therapy catalog with today's ticket books
pub fn find_all(db: &DbService, today: NaiveDate) -> Vec<Therapy> {
    let mut tables = db.write();
    roll_over(&mut tables, today);
    tables.therapies.clone()
}

pub fn find_by_id(db: &DbService, id: &str, today: NaiveDate) -> Option<Therapy> {
    let mut tables = db.write();
    roll_over(&mut tables, today);
    tables.therapies.iter().find(|t| t.id == id).cloned()
}

/// Start a new business day; returns the number of tickets discarded
pub fn reset_tickets(db: &DbService, today: NaiveDate) -> usize {
    let mut tables = db.write();
    let issued: usize = tables
        .therapies
        .iter()
        .map(|t| t.current_tickets.len())
        .sum();
    if roll_over(&mut tables, today) { issued } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn test_books_clear_on_new_day() {
        let db = DbService::seeded();
        assert_eq!(find_all(&db, day(1)).len(), 6);
        db.write().therapies[0].current_tickets = vec![1, 2, 3];

        // same day keeps the book
        assert_eq!(find_by_id(&db, "1", day(1)).unwrap().current_tickets.len(), 3);
        // next day starts empty
        assert!(find_by_id(&db, "1", day(2)).unwrap().current_tickets.is_empty());
        // going back in time never clears
        db.write().therapies[0].current_tickets = vec![1];
        assert_eq!(find_by_id(&db, "1", day(1)).unwrap().current_tickets, vec![1]);
    }

    #[test]
    fn test_reset_counts_discarded_tickets() {
        let db = DbService::seeded();
        find_all(&db, day(1));
        db.write().therapies[2].current_tickets = vec![1, 2];
        assert_eq!(reset_tickets(&db, day(1)), 0);
        assert_eq!(reset_tickets(&db, day(2)), 2);
        assert_eq!(reset_tickets(&db, day(2)), 0);
    }
}
