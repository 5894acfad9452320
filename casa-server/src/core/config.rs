use chrono_tz::Tz;

/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (or a `.env` file):
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | tracing level |
/// | LOG_DIR | (unset) | daily rolling log files when the directory exists |
/// | TIMEZONE | America/Sao_Paulo | business time zone for "today" |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | background task shutdown budget |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 TIMEZONE=America/Recife cargo run -p casa-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment
    pub environment: String,
    /// Log level filter
    pub log_level: String,
    /// Optional log directory
    pub log_dir: Option<String>,
    /// Business time zone: session days and the daily ticket reset use it
    pub timezone: Tz,
    /// Shutdown budget (milliseconds)
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let timezone = lookup("TIMEZONE")
            .and_then(|tz| match tz.parse::<Tz>() {
                Ok(tz) => Some(tz),
                Err(e) => {
                    tracing::warn!("Invalid TIMEZONE '{}': {}, using default", tz, e);
                    None
                }
            })
            .unwrap_or(shared::DEFAULT_TIMEZONE);

        Self {
            http_port: lookup("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|d| !d.is_empty()),
            timezone,
            shutdown_timeout_ms: lookup("SHUTDOWN_TIMEOUT_MS")
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
        }
    }

    /// Override the port, mostly for tests
    pub fn with_port(mut self, http_port: u16) -> Self {
        self.http_port = http_port;
        self
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
