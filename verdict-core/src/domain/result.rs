//! Backend result types
//!
//! [`RawResult`] is what the execution backend reports for a job;
//! [`NormalizedResult`] is the canonical form verdicts are derived from.

use serde::{Deserialize, Serialize};

/// Status ids reported by the execution backend
pub mod status {
    pub const IN_QUEUE: u32 = 1;
    pub const PROCESSING: u32 = 2;
    pub const ACCEPTED: u32 = 3;
    pub const WRONG_ANSWER: u32 = 4;
    pub const TIME_LIMIT_EXCEEDED: u32 = 5;
    pub const COMPILATION_ERROR: u32 = 6;
    pub const INTERNAL_ERROR: u32 = 13;
}

/// Result payload of one job as reported by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResult {
    /// 0 when the backend omitted the status object
    pub status_id: u32,
    pub status_description: Option<String>,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
    pub message: Option<String>,
    /// Wall time in seconds, as formatted by the backend
    pub time: Option<String>,
    /// Peak memory in KB
    pub memory: Option<u64>,
}

impl RawResult {
    /// Any status from Accepted upwards means the job will not change again
    pub fn is_terminal(&self) -> bool {
        self.status_id >= status::ACCEPTED
    }

    pub fn is_accepted(&self) -> bool {
        self.status_id == status::ACCEPTED
    }
}

/// Canonical `{output, status, error}` view of a [`RawResult`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedResult {
    /// Right-trimmed program output (or the best diagnostic available)
    pub output: String,
    pub status_label: String,
    pub error_detail: Option<String>,
}
