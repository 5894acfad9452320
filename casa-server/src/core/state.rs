use std::time::Duration;

use crate::core::Config;
use crate::core::tasks::{BackgroundTasks, TaskKind};
use crate::db::DbService;
use crate::therapies::TicketResetScheduler;

/// Server state shared by every handler
///
/// Cloning is cheap: the store is behind an `Arc`.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | immutable configuration |
/// | db | DbService | in-memory tables |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
}

impl ServerState {
    /// Build state with the therapy catalog seeded
    pub fn initialize(config: &Config) -> Self {
        Self::with_db(config, DbService::seeded())
    }

    /// Build state around an existing store
    pub fn with_db(config: &Config, db: DbService) -> Self {
        Self {
            config: config.clone(),
            db,
        }
    }

    /// Business time zone
    pub fn tz(&self) -> chrono_tz::Tz {
        self.config.timezone
    }

    /// Spawn the server's background tasks
    pub fn start_background_tasks(&self) -> BackgroundTasks {
        let mut tasks = BackgroundTasks::new();

        let scheduler = TicketResetScheduler::new(self.clone(), tasks.shutdown_token());
        tasks.spawn("ticket_reset", TaskKind::Periodic, scheduler.run());

        tasks.log_summary();
        tasks
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.config.shutdown_timeout_ms)
    }
}
