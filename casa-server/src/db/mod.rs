//! In-memory store
//!
//! All tables live behind one [`RwLock`]. Writers hold the lock for the
//! whole check-then-insert, so conditional inserts (ticket issuance, monthly
//! dues upsert) are atomic with respect to each other.

pub mod repository;

use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use shared::models::{
    Event, FinancialTransaction, Member, MonthlyPayment, Therapy, TherapySession,
};

/// Table contents
#[derive(Debug, Default)]
pub struct Tables {
    pub members: Vec<Member>,
    pub events: Vec<Event>,
    pub therapies: Vec<Therapy>,
    pub therapy_sessions: Vec<TherapySession>,
    pub monthly_payments: Vec<MonthlyPayment>,
    pub transactions: Vec<FinancialTransaction>,
    /// Business day the therapies' ticket books belong to
    pub tickets_day: Option<NaiveDate>,
}

/// Shared handle to the store
#[derive(Debug, Clone, Default)]
pub struct DbService {
    tables: Arc<RwLock<Tables>>,
}

impl DbService {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the therapy catalog
    pub fn seeded() -> Self {
        let db = Self::new();
        db.write().therapies = shared::models::default_catalog();
        tracing::info!("Seeded {} therapies", db.read().therapies.len());
        db
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write()
    }
}

/// New opaque record id
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
