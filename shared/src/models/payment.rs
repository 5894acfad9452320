//! Monthly dues Model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly dues record, one per (member, month)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPayment {
    pub id: String,
    pub member_id: String,
    /// `YYYY-MM`
    pub month: String,
    pub amount: Decimal,
    pub paid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<DateTime<Utc>>,
}

impl MonthlyPayment {
    /// Month the payment counts towards in reports
    ///
    /// Payment date when known, the due month otherwise.
    pub fn accounting_month(&self) -> String {
        self.payment_date
            .map(|d| d.format("%Y-%m").to_string())
            .unwrap_or_else(|| self.month.clone())
    }
}

/// Upsert payload: sets the paid flag and amount for (member, month)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPaymentUpsert {
    pub member_id: String,
    pub month: String,
    pub amount: Decimal,
    pub paid: bool,
}

/// Parse a `YYYY-MM` month key
pub fn parse_month(month: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d").ok()
}

/// Whether `member_id` has paid `month`
pub fn payment_status(payments: &[MonthlyPayment], member_id: &str, month: &str) -> bool {
    payments
        .iter()
        .find(|p| p.member_id == member_id && p.month == month)
        .is_some_and(|p| p.paid)
}

/// Number of paid records
pub fn paid_count(payments: &[MonthlyPayment]) -> usize {
    payments.iter().filter(|p| p.paid).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment(member: &str, month: &str, paid: bool) -> MonthlyPayment {
        MonthlyPayment {
            id: format!("{member}-{month}"),
            member_id: member.to_string(),
            month: month.to_string(),
            amount: Decimal::from(30),
            paid,
            payment_date: None,
        }
    }

    #[test]
    fn test_payment_status() {
        let payments = vec![payment("m1", "2026-05", true), payment("m2", "2026-05", false)];
        assert!(payment_status(&payments, "m1", "2026-05"));
        assert!(!payment_status(&payments, "m2", "2026-05"));
        assert!(!payment_status(&payments, "m1", "2026-06"));
        assert_eq!(paid_count(&payments), 1);
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2026-02"), NaiveDate::from_ymd_opt(2026, 2, 1));
        assert!(parse_month("2026-13").is_none());
        assert!(parse_month("fevereiro").is_none());
    }
}
