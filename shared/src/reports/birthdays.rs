//! Birthday reminders

use chrono::{Datelike, NaiveDate};

use crate::models::Member;

#[derive(Debug, Clone, Default)]
pub struct Birthdays<'a> {
    /// Members born in the current month, by day of month
    pub month: Vec<&'a Member>,
    /// Members whose birthday is today
    pub today: Vec<&'a Member>,
}

pub fn birthdays(members: &[Member], today: NaiveDate) -> Birthdays<'_> {
    let mut month: Vec<&Member> = members
        .iter()
        .filter(|m| m.birth_date.month() == today.month())
        .collect();
    month.sort_by_key(|m| m.birth_date.day());

    let today_list = month
        .iter()
        .copied()
        .filter(|m| m.birth_date.day() == today.day())
        .collect();

    Birthdays {
        month,
        today: today_list,
    }
}
