//! Execution backend abstraction
//!
//! The engine drives jobs through this trait rather than through the HTTP
//! client directly, so the same poller and case runner work against the
//! backend, the relay, or an in-memory double.

use async_trait::async_trait;
use verdict_core::domain::job::{Job, JobToken};
use verdict_core::domain::result::RawResult;
use verdict_core::domain::submission::Submission;

use crate::ExecutionClient;
use crate::error::{FetchError, SubmitError};

/// A service that accepts submissions and reports their status
#[async_trait]
pub trait ExecutionBackend: Send + Sync {
    /// Hands one submission to the backend
    ///
    /// # Returns
    /// The created job, whose token is used for every later status query
    async fn submit(&self, submission: &Submission) -> Result<Job, SubmitError>;

    /// Queries the current status of a job once
    async fn fetch_status(&self, token: &JobToken) -> Result<RawResult, FetchError>;
}

#[async_trait]
impl ExecutionBackend for ExecutionClient {
    async fn submit(&self, submission: &Submission) -> Result<Job, SubmitError> {
        ExecutionClient::submit(self, submission).await
    }

    async fn fetch_status(&self, token: &JobToken) -> Result<RawResult, FetchError> {
        ExecutionClient::fetch_status(self, token).await
    }
}
