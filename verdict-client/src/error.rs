//! Error types for the Verdict clients
//!
//! The execution backend errors deliberately distinguish a backend that could
//! not be reached from one that answered with an error status, so callers can
//! tell "job not done" apart from "backend down".

use std::time::Duration;

use thiserror::Error;

/// Failure to hand a submission to the execution backend
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Transport-level failure (connection refused, timeout, reset)
    #[error("network failure while submitting: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("backend rejected submission (status {status}): {body}")]
    BackendRejected { status: u16, body: String },

    /// Backend answered 2xx with a body that is not a submission token
    #[error("invalid submit response: {0}")]
    InvalidResponse(String),

    /// Backend did not answer within the request timeout
    #[error("submission timed out after {0:?}")]
    Timeout(Duration),
}

/// Failure to query the status of a submitted job
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network failure while fetching status: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("backend rejected status query (status {status}): {body}")]
    BackendRejected { status: u16, body: String },

    #[error("invalid status response: {0}")]
    InvalidResponse(String),

    #[error("status query timed out after {0:?}")]
    Timeout(Duration),
}

impl SubmitError {
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::BackendRejected {
            status,
            body: body.into(),
        }
    }

    /// HTTP status of a rejection, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BackendRejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl FetchError {
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::BackendRejected {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BackendRejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors talking to the submission store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl StoreError {
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }
}
