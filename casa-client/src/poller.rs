//! Cancellable periodic task
//!
//! Runs the job once immediately, then at every `interval` boundary measured
//! from the start. Boundaries missed while the job was running are skipped.
//! Dropping the [`Poller`] cancels it.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::clock::Clock;

pub struct Poller {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl Poller {
    pub fn spawn<F, Fut>(clock: Arc<dyn Clock>, interval: Duration, mut job: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let interval = interval.max(Duration::from_millis(1));

        let handle = tokio::spawn(async move {
            let start = clock.now();
            let mut tick: u32 = 0;
            loop {
                tokio::select! {
                    _ = job() => {}
                    _ = cancelled.cancelled() => break,
                }

                let now = clock.now();
                let mut deadline;
                loop {
                    tick += 1;
                    deadline = start + interval * tick;
                    if deadline >= now {
                        break;
                    }
                }

                tokio::select! {
                    _ = clock.sleep_until(deadline) => {}
                    _ = cancelled.cancelled() => break,
                }
            }
            tracing::debug!("Poller stopped");
        });

        Self { token, handle }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
