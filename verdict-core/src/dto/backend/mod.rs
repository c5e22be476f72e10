//! Execution backend DTOs
//!
//! Mirrors the backend's `/submissions` contract. Field names are snake_case on
//! the wire.

use serde::{Deserialize, Serialize};

use crate::domain::language::{Language, UnknownLanguage};
use crate::domain::result::RawResult;
use crate::domain::submission::{ResourceLimits, Submission};

/// Body of `POST /submissions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSubmissionRequest {
    pub source_code: String,
    pub language_id: u32,
    #[serde(default)]
    pub stdin: String,
    pub cpu_time_limit: f64,
    pub memory_limit: u64,
    #[serde(default = "default_true")]
    pub redirect_stderr_to_stdout: bool,
    #[serde(default)]
    pub base64_encoded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler_options: Option<String>,
}

fn default_true() -> bool {
    true
}

impl From<&Submission> for CreateSubmissionRequest {
    fn from(submission: &Submission) -> Self {
        Self {
            source_code: submission.source_code().to_string(),
            language_id: submission.language().backend_id(),
            stdin: submission.stdin().to_string(),
            cpu_time_limit: submission.cpu_time_limit_seconds(),
            memory_limit: submission.memory_limit_kb(),
            redirect_stderr_to_stdout: true,
            base64_encoded: false,
            compiler_options: submission.compiler_options().map(str::to_string),
        }
    }
}

impl TryFrom<CreateSubmissionRequest> for Submission {
    type Error = UnknownLanguage;

    fn try_from(req: CreateSubmissionRequest) -> Result<Self, Self::Error> {
        let language = Language::from_backend_id(req.language_id)?;
        Ok(Submission::new(
            req.source_code,
            language,
            req.stdin,
            req.compiler_options,
            ResourceLimits {
                cpu_time_limit_seconds: req.cpu_time_limit,
                memory_limit_kb: req.memory_limit,
            },
        ))
    }
}

/// Response of `POST /submissions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionCreated {
    pub token: String,
}

/// `status` object embedded in a status response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPayload {
    pub id: u32,
    #[serde(default)]
    pub description: Option<String>,
}

/// Response of `GET /submissions/{token}?base64_encoded=false&fields=*`
///
/// Only the fields the engine uses are modelled; the rest are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionStatusResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default)]
    pub status: Option<StatusPayload>,
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
    #[serde(default)]
    pub compile_output: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub memory: Option<u64>,
}

impl From<SubmissionStatusResponse> for RawResult {
    fn from(resp: SubmissionStatusResponse) -> Self {
        let (status_id, status_description) = match resp.status {
            Some(status) => (status.id, status.description),
            None => (0, None),
        };

        RawResult {
            status_id,
            status_description,
            stdout: resp.stdout,
            stderr: resp.stderr,
            compile_output: resp.compile_output,
            message: resp.message,
            time: resp.time,
            memory: resp.memory,
        }
    }
}

impl From<&RawResult> for SubmissionStatusResponse {
    fn from(result: &RawResult) -> Self {
        let status = (result.status_id != 0).then(|| StatusPayload {
            id: result.status_id,
            description: result.status_description.clone(),
        });

        SubmissionStatusResponse {
            token: None,
            status,
            stdout: result.stdout.clone(),
            stderr: result.stderr.clone(),
            compile_output: result.compile_output.clone(),
            message: result.message.clone(),
            time: result.time.clone(),
            memory: result.memory,
        }
    }
}
