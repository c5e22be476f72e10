//! API Error Handling
//!
//! Unified error types and conversion for API responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use verdict_core::dto::relay::ErrorBody;

use crate::service::submission_service::SubmissionError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    DatabaseError(sqlx::Error),
    /// The execution backend answered with an error; its status is passed through
    Upstream {
        status: u16,
        error: String,
        details: Value,
    },
    /// The execution backend could not be reached or answered garbage
    BadGateway(String),
    GatewayTimeout(String),
}

impl ApiError {
    /// Wraps a backend rejection, keeping its body as JSON when it is JSON
    pub fn upstream(status: u16, error: impl Into<String>, body: &str) -> Self {
        let details =
            serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()));
        ApiError::Upstream {
            status,
            error: error.into(),
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::DatabaseError(err) => {
                tracing::error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
            ApiError::Upstream {
                status,
                error,
                details,
            } => {
                tracing::warn!("Upstream error ({}): {}", status, error);
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (status, error, Some(details))
            }
            ApiError::BadGateway(msg) => {
                tracing::error!("Backend unreachable: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    "Execution backend unavailable".to_string(),
                    Some(Value::String(msg)),
                )
            }
            ApiError::GatewayTimeout(msg) => (StatusCode::GATEWAY_TIMEOUT, msg, None),
        };

        (status, Json(ErrorBody { error, details })).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::DatabaseError(err)
    }
}

impl From<SubmissionError> for ApiError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::ValidationError(msg) => ApiError::BadRequest(msg),
            SubmissionError::DatabaseError(err) => ApiError::DatabaseError(err),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
