//! Monthly dues Repository

use chrono::{DateTime, Utc};
use shared::models::{MonthlyPayment, MonthlyPaymentUpsert};

use super::{RepoError, RepoResult};
use crate::db::{DbService, new_id};

pub fn find_all(db: &DbService, month: Option<&str>) -> Vec<MonthlyPayment> {
    db.read()
        .monthly_payments
        .iter()
        .filter(|p| month.is_none_or(|m| p.month == m))
        .cloned()
        .collect()
}

/// Create or update the record of (member, month)
///
/// The payment date is stamped on the transition to paid and cleared when
/// the record goes back to unpaid.
pub fn upsert(
    db: &DbService,
    data: MonthlyPaymentUpsert,
    now: DateTime<Utc>,
) -> RepoResult<MonthlyPayment> {
    let mut tables = db.write();
    if !tables.members.iter().any(|m| m.id == data.member_id) {
        return Err(RepoError::NotFound(format!("Member {}", data.member_id)));
    }

    if let Some(existing) = tables
        .monthly_payments
        .iter_mut()
        .find(|p| p.member_id == data.member_id && p.month == data.month)
    {
        existing.payment_date = match (existing.paid, data.paid) {
            (false, true) => Some(now),
            (_, false) => None,
            (true, true) => existing.payment_date,
        };
        existing.paid = data.paid;
        existing.amount = data.amount;
        return Ok(existing.clone());
    }

    let payment = MonthlyPayment {
        id: new_id(),
        member_id: data.member_id,
        month: data.month,
        amount: data.amount,
        paid: data.paid,
        payment_date: data.paid.then_some(now),
    };
    tables.monthly_payments.push(payment.clone());
    Ok(payment)
}
