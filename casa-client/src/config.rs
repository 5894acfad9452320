//! Client configuration

use std::time::Duration;

use chrono_tz::Tz;

/// Client configuration for talking to the casa server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Refresh period of the call board
    pub poll_interval: Duration,

    /// Cool-down between two ticket calls
    pub call_cooldown: Duration,

    /// Business time zone used for "today"
    pub timezone: Tz,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            poll_interval: Duration::from_secs(30),
            call_cooldown: Duration::from_secs(1),
            timezone: shared::DEFAULT_TIMEZONE,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_call_cooldown(mut self, cooldown: Duration) -> Self {
        self.call_cooldown = cooldown;
        self
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::ClientResult<crate::HttpClient> {
        crate::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}
