//! Daily ticket reset
//!
//! Clears every therapy's ticket book at local midnight. Reads and writes
//! after midnight also roll the books over lazily (see `therapy::roll_over`).

use chrono::Utc;
use tokio_util::sync::CancellationToken;

use crate::core::ServerState;
use crate::db::repository::therapy;
use crate::utils::time;

/// Registered as `TaskKind::Periodic` in `start_background_tasks()`.
pub struct TicketResetScheduler {
    state: ServerState,
    shutdown: CancellationToken,
}

impl TicketResetScheduler {
    pub fn new(state: ServerState, shutdown: CancellationToken) -> Self {
        Self { state, shutdown }
    }

    pub async fn run(self) {
        tracing::info!("Ticket reset scheduler started");
        self.reset();

        loop {
            let sleep_duration = time::duration_until_next_midnight(Utc::now(), self.state.tz());
            tracing::debug!(
                "Next ticket reset in {} minutes",
                sleep_duration.as_secs() / 60
            );

            tokio::select! {
                _ = tokio::time::sleep(sleep_duration) => self.reset(),
                _ = self.shutdown.cancelled() => {
                    tracing::info!("Ticket reset scheduler received shutdown signal");
                    return;
                }
            }
        }
    }

    fn reset(&self) {
        let today = time::today(self.state.tz());
        let discarded = therapy::reset_tickets(&self.state.db, today);
        if discarded > 0 {
            tracing::info!(day = %today, discarded, "Ticket books reset for new day");
        }
    }
}
