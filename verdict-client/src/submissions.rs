//! Submission endpoints of the execution backend

use reqwest::{Method, Response};
use tracing::debug;
use verdict_core::domain::job::{Job, JobToken};
use verdict_core::domain::result::RawResult;
use verdict_core::domain::submission::Submission;
use verdict_core::dto::backend::{
    CreateSubmissionRequest, SubmissionCreated, SubmissionStatusResponse,
};

use crate::ExecutionClient;
use crate::error::{FetchError, SubmitError};

impl ExecutionClient {
    /// Submit code for execution
    ///
    /// Sends exactly one request; retrying is up to the caller.
    ///
    /// # Returns
    /// The job the backend created, identified by its token
    pub async fn submit(&self, submission: &Submission) -> Result<Job, SubmitError> {
        let body = CreateSubmissionRequest::from(submission);
        let response = self
            .request(Method::POST, "/submissions")
            .query(&[("base64_encoded", "false"), ("wait", "false")])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response).await;
            return Err(SubmitError::rejected(status.as_u16(), body));
        }

        let created: SubmissionCreated = response
            .json()
            .await
            .map_err(|e| SubmitError::InvalidResponse(format!("Failed to parse JSON response: {}", e)))?;

        if created.token.trim().is_empty() {
            return Err(SubmitError::InvalidResponse("empty submission token".to_string()));
        }

        debug!(token = %created.token, language = %submission.language(), "Submission accepted");

        Ok(Job::new(JobToken::new(created.token), submission.clone()))
    }

    /// Query the current status of a job
    ///
    /// # Arguments
    /// * `token` - The token returned by [`ExecutionClient::submit`]
    pub async fn fetch_status(&self, token: &JobToken) -> Result<RawResult, FetchError> {
        let path = format!("/submissions/{}", token.as_str());
        let response = self
            .request(Method::GET, &path)
            .query(&[("base64_encoded", "false"), ("fields", "*")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response).await;
            return Err(FetchError::rejected(status.as_u16(), body));
        }

        let payload: SubmissionStatusResponse = response
            .json()
            .await
            .map_err(|e| FetchError::InvalidResponse(format!("Failed to parse JSON response: {}", e)))?;

        Ok(RawResult::from(payload))
    }
}

/// Reads an error response body, falling back to a generic message
async fn error_body(response: Response) -> String {
    response
        .text()
        .await
        .ok()
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| "Unknown error".to_string())
}
