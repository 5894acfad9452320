//! Balance and cash-flow reducers

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{FinancialTransaction, MonthlyPayment, TransactionKind};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialTotals {
    /// Income transactions plus paid dues
    pub income: Decimal,
    pub expenses: Decimal,
    /// Dues recorded but not yet paid
    pub pending_payments: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyFinance {
    /// `YYYY-MM`
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

fn sum_kind(transactions: &[FinancialTransaction], kind: TransactionKind) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

fn sum_dues(payments: &[MonthlyPayment], paid: bool) -> Decimal {
    payments
        .iter()
        .filter(|p| p.paid == paid)
        .map(|p| p.amount)
        .sum()
}

/// income transactions + paid dues - expense transactions
pub fn balance(transactions: &[FinancialTransaction], payments: &[MonthlyPayment]) -> Decimal {
    sum_kind(transactions, TransactionKind::Income) + sum_dues(payments, true)
        - sum_kind(transactions, TransactionKind::Expense)
}

pub fn totals(transactions: &[FinancialTransaction], payments: &[MonthlyPayment]) -> FinancialTotals {
    let income = sum_kind(transactions, TransactionKind::Income) + sum_dues(payments, true);
    let expenses = sum_kind(transactions, TransactionKind::Expense);
    FinancialTotals {
        income,
        expenses,
        pending_payments: sum_dues(payments, false),
        balance: income - expenses,
    }
}

/// Per-month income, expenses and balance, oldest month first
///
/// Paid dues count in the month they were paid.
pub fn monthly_breakdown(
    transactions: &[FinancialTransaction],
    payments: &[MonthlyPayment],
) -> Vec<MonthlyFinance> {
    let mut months: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();

    for t in transactions {
        let entry = months.entry(t.date.format("%Y-%m").to_string()).or_default();
        match t.kind {
            TransactionKind::Income => entry.0 += t.amount,
            TransactionKind::Expense => entry.1 += t.amount,
        }
    }
    for p in payments.iter().filter(|p| p.paid) {
        months.entry(p.accounting_month()).or_default().0 += p.amount;
    }

    months
        .into_iter()
        .map(|(month, (income, expenses))| MonthlyFinance {
            month,
            income,
            expenses,
            balance: income - expenses,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn tx(kind: TransactionKind, amount: i64, month: u32) -> FinancialTransaction {
        FinancialTransaction {
            id: format!("{kind:?}-{amount}"),
            kind,
            description: "lançamento".to_string(),
            amount: Decimal::from(amount),
            date: Utc.with_ymd_and_hms(2026, month, 5, 12, 0, 0).unwrap(),
            category: None,
        }
    }

    fn due(amount: i64, paid: bool, month: &str) -> MonthlyPayment {
        MonthlyPayment {
            id: format!("p-{month}"),
            member_id: "m1".to_string(),
            month: month.to_string(),
            amount: Decimal::from(amount),
            paid,
            payment_date: None,
        }
    }

    #[test]
    fn test_balance_counts_paid_dues() {
        let transactions = vec![
            tx(TransactionKind::Income, 100, 1),
            tx(TransactionKind::Expense, 40, 1),
        ];
        let payments = vec![due(20, true, "2026-01")];
        assert_eq!(balance(&transactions, &payments), Decimal::from(80));
    }

    #[test]
    fn test_unpaid_dues_are_pending_only() {
        let transactions = vec![tx(TransactionKind::Income, 100, 1)];
        let payments = vec![due(20, true, "2026-01"), due(35, false, "2026-02")];
        let t = totals(&transactions, &payments);
        assert_eq!(t.income, Decimal::from(120));
        assert_eq!(t.expenses, Decimal::ZERO);
        assert_eq!(t.pending_payments, Decimal::from(35));
        assert_eq!(t.balance, Decimal::from(120));
    }

    #[test]
    fn test_empty_collections_balance_zero() {
        assert_eq!(balance(&[], &[]), Decimal::ZERO);
        assert_eq!(totals(&[], &[]), FinancialTotals::default());
    }

    #[test]
    fn test_monthly_breakdown() {
        let transactions = vec![
            tx(TransactionKind::Income, 100, 1),
            tx(TransactionKind::Expense, 30, 2),
        ];
        let mut paid_late = due(20, true, "2026-01");
        paid_late.payment_date = Some(Utc.with_ymd_and_hms(2026, 2, 10, 9, 0, 0).unwrap());
        let payments = vec![paid_late, due(15, true, "2026-03"), due(50, false, "2026-03")];

        let months = monthly_breakdown(&transactions, &payments);
        assert_eq!(months.len(), 3);
        assert_eq!(months[0].month, "2026-01");
        assert_eq!(months[0].balance, Decimal::from(100));
        assert_eq!(months[1].month, "2026-02");
        assert_eq!(months[1].income, Decimal::from(20));
        assert_eq!(months[1].balance, Decimal::from(-10));
        assert_eq!(months[2].income, Decimal::from(15));
    }
}
