//! Relay configuration

use anyhow::Context;
use verdict_runner::Config as EngineConfig;

/// Settings the relay reads at startup
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Postgres connection string for the submission store
    pub database_url: String,

    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// Backend connection and polling budget for `/api/judge0`
    pub engine: EngineConfig,
}

impl RelayConfig {
    /// Reads configuration from the environment
    ///
    /// Expected environment variables:
    /// - DATABASE_URL (required)
    /// - RELAY_BIND_ADDR (optional, default: 0.0.0.0:3000)
    /// - EXECUTION_BACKEND_URL or JUDGE0_SELF_HOSTED_URL (optional, default: http://localhost:2358)
    /// - EXECUTION_BACKEND_TOKEN, POLL_INTERVAL_MS, MAX_POLL_ATTEMPTS, CPU_TIME_LIMIT,
    ///   MEMORY_LIMIT_KB (optional, see the engine configuration)
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL environment variable not set")?;

        let bind_addr =
            std::env::var("RELAY_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let engine = match EngineConfig::from_env() {
            Ok(engine) => engine,
            Err(_) => {
                tracing::warn!("No execution backend configured, using http://localhost:2358");
                EngineConfig::default()
            }
        };

        let config = Self {
            database_url,
            bind_addr,
            engine,
        };
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.database_url.trim().is_empty() {
            anyhow::bail!("database_url cannot be empty");
        }

        if self.bind_addr.trim().is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        self.engine
            .validate()
            .context("invalid execution backend configuration")
    }
}
