//! Financial transaction Repository

use chrono::{DateTime, Utc};
use shared::models::{FinancialTransaction, TransactionCreate};

use super::{RepoError, RepoResult};
use crate::db::{DbService, new_id};

/// All transactions, newest first
pub fn find_all(db: &DbService) -> Vec<FinancialTransaction> {
    let mut list = db.read().transactions.clone();
    list.sort_by(|a, b| b.date.cmp(&a.date));
    list
}

pub fn create(db: &DbService, data: TransactionCreate, now: DateTime<Utc>) -> FinancialTransaction {
    let transaction = FinancialTransaction {
        id: new_id(),
        kind: data.kind,
        description: data.description.trim().to_string(),
        amount: data.amount,
        date: data.date.unwrap_or(now),
        category: data.category.filter(|c| !c.trim().is_empty()),
    };
    db.write().transactions.push(transaction.clone());
    transaction
}

pub fn delete(db: &DbService, id: &str) -> RepoResult<FinancialTransaction> {
    let mut tables = db.write();
    let index = tables
        .transactions
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| RepoError::NotFound(format!("Transaction {}", id)))?;
    Ok(tables.transactions.remove(index))
}
