//! Injectable time source
//!
//! Time is a [`Duration`] since the clock's origin. [`SystemClock`] follows
//! the tokio timer; [`ManualClock`] only moves when a test advances it.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;

#[async_trait]
pub trait Clock: Send + Sync {
    /// Elapsed time since the clock's origin
    fn now(&self) -> Duration;

    /// Resolve once `now() >= deadline`
    async fn sleep_until(&self, deadline: Duration);
}

#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: tokio::time::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: tokio::time::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    async fn sleep_until(&self, deadline: Duration) {
        tokio::time::sleep_until(self.origin + deadline).await;
    }
}

/// Clock driven by hand
#[derive(Debug)]
pub struct ManualClock {
    elapsed: watch::Sender<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        let (elapsed, _) = watch::channel(Duration::ZERO);
        Self { elapsed }
    }

    /// Move time forward, waking every sleeper whose deadline passed
    pub fn advance(&self, by: Duration) {
        self.elapsed.send_modify(|t| *t += by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.elapsed.borrow()
    }

    async fn sleep_until(&self, deadline: Duration) {
        let mut rx = self.elapsed.subscribe();
        // the sender lives as long as self, so wait_for cannot fail here
        let _ = rx.wait_for(|t| *t >= deadline).await;
    }
}
