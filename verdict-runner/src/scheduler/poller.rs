//! Job poller
//!
//! Waits for one in-flight job to reach a terminal status. The poller is a
//! bounded two-state machine: a job is Pending until the backend reports a
//! status of Accepted or above, and the poller gives up (TimedOut) once its
//! attempt budget is spent.
//!
//! Transport failures are not retried. A backend that cannot be reached is a
//! different outcome from a job that is not done yet, and the caller decides
//! what to do with it. Each status query is bounded by the request timeout, so
//! a backend that accepts the connection and never answers counts as a failed
//! query rather than stalling the job.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time;
use tracing::{debug, warn};
use verdict_client::{ExecutionBackend, FetchError};
use verdict_core::domain::job::JobToken;
use verdict_core::domain::result::RawResult;

use crate::config::{Config, DEFAULT_REQUEST_TIMEOUT};

/// Why a job could not be resolved
#[derive(Debug, Error)]
pub enum PollError {
    /// The attempt budget ran out before a terminal status was seen
    #[error("polling timed out after {attempts} attempts")]
    TimedOut { attempts: u32 },

    /// A status query failed outright
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Polls the backend for a job's terminal result
#[derive(Clone)]
pub struct Poller {
    backend: Arc<dyn ExecutionBackend>,
    interval: Duration,
    max_attempts: u32,
    request_timeout: Duration,
}

impl Poller {
    /// Creates a new poller
    ///
    /// # Arguments
    /// * `backend` - Backend answering status queries
    /// * `interval` - Delay before every status query
    /// * `max_attempts` - Status queries before giving up
    ///
    /// Status queries are bounded by [`DEFAULT_REQUEST_TIMEOUT`] until
    /// [`Poller::with_request_timeout`] says otherwise.
    pub fn new(backend: Arc<dyn ExecutionBackend>, interval: Duration, max_attempts: u32) -> Self {
        Self {
            backend,
            interval,
            max_attempts,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Creates a poller with the interval, budget and timeout from `config`
    pub fn from_config(backend: Arc<dyn ExecutionBackend>, config: &Config) -> Self {
        Self::new(backend, config.poll_interval, config.max_poll_attempts)
            .with_request_timeout(config.request_timeout)
    }

    /// Bounds every status query by `timeout`
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Waits until the job identified by `token` is terminal
    ///
    /// Sleeps for the poll interval before each attempt, so a job is never
    /// queried the instant it was submitted.
    pub async fn await_result(&self, token: &JobToken) -> Result<RawResult, PollError> {
        for attempt in 1..=self.max_attempts {
            time::sleep(self.interval).await;

            let result = time::timeout(self.request_timeout, self.backend.fetch_status(token))
                .await
                .unwrap_or_else(|_| Err(FetchError::Timeout(self.request_timeout)))
                .map_err(|e| {
                    warn!(token = %token, attempt, error = %e, "Status query failed");
                    e
                })?;

            debug!(
                token = %token,
                attempt,
                status_id = result.status_id,
                "Polled job status"
            );

            if result.is_terminal() {
                return Ok(result);
            }
        }

        warn!(
            token = %token,
            attempts = self.max_attempts,
            "Job did not reach a terminal status"
        );

        Err(PollError::TimedOut {
            attempts: self.max_attempts,
        })
    }
}
