//! Engine configuration
//!
//! Defines the backend connection, polling budget, concurrency cap and resource
//! limits used for every run.

use std::time::Duration;

use verdict_core::domain::submission::ResourceLimits;

/// Longest a single backend request may take unless configured otherwise
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Engine configuration
///
/// Polling and concurrency are configurable so the same engine can target a
/// local backend or a rate-limited shared one.
#[derive(Debug, Clone)]
pub struct Config {
    /// Execution backend (or relay) base URL (e.g., "http://localhost:2358")
    pub backend_url: String,

    /// Sent as `X-Auth-Token` when the backend requires authentication
    pub backend_token: Option<String>,

    /// Delay before each status query
    pub poll_interval: Duration,

    /// Status queries per job before giving up
    pub max_poll_attempts: u32,

    /// Longest a single submit or status query may take
    pub request_timeout: Duration,

    /// Test cases in flight at once; 1 runs the suite strictly sequentially
    pub max_concurrent_cases: usize,

    /// Limits applied to every submission
    pub limits: ResourceLimits,

    /// Relay base URL for persisting finished runs; `None` disables persistence
    pub store_url: Option<String>,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(backend_url: String) -> Self {
        Self {
            backend_url,
            backend_token: None,
            poll_interval: Duration::from_millis(500),
            max_poll_attempts: 10,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_concurrent_cases: 3,
            limits: ResourceLimits::default(),
            store_url: None,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - EXECUTION_BACKEND_URL (required, falls back to JUDGE0_SELF_HOSTED_URL)
    /// - EXECUTION_BACKEND_TOKEN (optional)
    /// - POLL_INTERVAL_MS (optional, default: 500)
    /// - MAX_POLL_ATTEMPTS (optional, default: 10)
    /// - REQUEST_TIMEOUT_MS (optional, default: 10000)
    /// - MAX_CONCURRENT_CASES (optional, default: 3)
    /// - CPU_TIME_LIMIT (optional, seconds, default: 2)
    /// - MEMORY_LIMIT_KB (optional, default: 128000)
    /// - SUBMISSION_STORE_URL (optional)
    pub fn from_env() -> anyhow::Result<Self> {
        let backend_url = std::env::var("EXECUTION_BACKEND_URL")
            .or_else(|_| std::env::var("JUDGE0_SELF_HOSTED_URL"))
            .map_err(|_| anyhow::anyhow!("EXECUTION_BACKEND_URL environment variable not set"))?;

        let defaults = Self::new(backend_url);

        let backend_token = std::env::var("EXECUTION_BACKEND_TOKEN")
            .ok()
            .filter(|s| !s.is_empty());

        let poll_interval = std::env::var("POLL_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.poll_interval);

        let max_poll_attempts = std::env::var("MAX_POLL_ATTEMPTS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(defaults.max_poll_attempts);

        let request_timeout = std::env::var("REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.request_timeout);

        let max_concurrent_cases = std::env::var("MAX_CONCURRENT_CASES")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(defaults.max_concurrent_cases);

        let cpu_time_limit_seconds = std::env::var("CPU_TIME_LIMIT")
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(defaults.limits.cpu_time_limit_seconds);

        let memory_limit_kb = std::env::var("MEMORY_LIMIT_KB")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(defaults.limits.memory_limit_kb);

        let store_url = std::env::var("SUBMISSION_STORE_URL")
            .ok()
            .filter(|s| !s.is_empty());

        Ok(Self {
            backend_token,
            poll_interval,
            max_poll_attempts,
            request_timeout,
            max_concurrent_cases,
            limits: ResourceLimits {
                cpu_time_limit_seconds,
                memory_limit_kb,
            },
            store_url,
            ..defaults
        })
    }

    /// Enables persistence of finished runs through the given relay
    pub fn with_store_url(mut self, url: impl Into<String>) -> Self {
        self.store_url = Some(url.into());
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.backend_url.is_empty() {
            anyhow::bail!("backend_url cannot be empty");
        }

        if !is_http_url(&self.backend_url) {
            anyhow::bail!("backend_url must start with http:// or https://");
        }

        if let Some(url) = &self.store_url {
            if !is_http_url(url) {
                anyhow::bail!("store_url must start with http:// or https://");
            }
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.max_poll_attempts == 0 {
            anyhow::bail!("max_poll_attempts must be greater than 0");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        if self.max_concurrent_cases == 0 {
            anyhow::bail!("max_concurrent_cases must be greater than 0");
        }

        let cpu = self.limits.cpu_time_limit_seconds;
        if cpu.is_nan() || cpu <= 0.0 {
            anyhow::bail!("cpu_time_limit must be greater than 0");
        }

        if self.limits.memory_limit_kb == 0 {
            anyhow::bail!("memory_limit_kb must be greater than 0");
        }

        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

impl Default for Config {
    fn default() -> Self {
        Self::new("http://localhost:2358".to_string())
    }
}
