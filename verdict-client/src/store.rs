//! Submission store client
//!
//! Persists finished suite runs through the relay's submission endpoints.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use verdict_core::dto::submission::{SaveSubmission, StoreResponse, SubmissionRecord};

use crate::error::StoreError;

/// Destination for finished suite runs
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Persists one suite run
    async fn save(&self, submission: &SaveSubmission) -> Result<(), StoreError>;
}

/// HTTP client for the relay's `/api/submissions` endpoints
#[derive(Debug, Clone)]
pub struct StoreClient {
    base_url: String,
    client: Client,
}

impl StoreClient {
    /// Create a new store client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the relay (e.g., "http://localhost:3000")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List stored submissions, newest first
    ///
    /// # Arguments
    /// * `question_index` - Only return submissions for this question
    pub async fn list(&self, question_index: Option<i32>) -> Result<Vec<SubmissionRecord>, StoreError> {
        let mut request = self.client.get(format!("{}/api/submissions", self.base_url));
        if let Some(index) = question_index {
            request = request.query(&[("questionIndex", index)]);
        }
        let response = request.send().await?;

        let envelope: StoreResponse<Vec<SubmissionRecord>> = self.handle_response(response).await?;
        Ok(envelope.data)
    }

    /// Handle an API response and deserialize JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T, StoreError> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(StoreError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| StoreError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

#[async_trait]
impl SubmissionStore for StoreClient {
    async fn save(&self, submission: &SaveSubmission) -> Result<(), StoreError> {
        let url = format!("{}/api/submissions/save", self.base_url);
        let response = self.client.post(&url).json(submission).send().await?;

        let _: StoreResponse<SubmissionRecord> = self.handle_response(response).await?;
        Ok(())
    }
}
