//! Submission API Handlers
//!
//! HTTP endpoints for the submission store.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use verdict_core::dto::submission::{SaveSubmission, StoreResponse, SubmissionRecord};

use crate::api::AppState;
use crate::api::error::ApiResult;
use crate::service::submission_service;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub question_index: Option<i32>,
}

/// POST /api/submissions/save
/// Store a finished suite run
pub async fn save_submission(
    State(state): State<AppState>,
    Json(req): Json<SaveSubmission>,
) -> ApiResult<Json<StoreResponse<SubmissionRecord>>> {
    tracing::info!("Saving {} submission", req.language);

    let record = submission_service::save_submission(&state.pool, req).await?;

    Ok(Json(StoreResponse {
        success: true,
        data: record,
    }))
}

/// GET /api/submissions?questionIndex=N
/// List stored submissions, optionally for one question
pub async fn list_submissions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<StoreResponse<Vec<SubmissionRecord>>>> {
    tracing::debug!("Listing submissions (question {:?})", query.question_index);

    let records = submission_service::list_submissions(&state.pool, query.question_index).await?;

    Ok(Json(StoreResponse {
        success: true,
        data: records,
    }))
}

/// GET /api/submissions/all
/// List every stored submission
pub async fn list_all_submissions(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<SubmissionRecord>>> {
    tracing::debug!("Listing all submissions");

    let records = submission_service::list_submissions(&state.pool, None).await?;
    Ok(Json(records))
}
