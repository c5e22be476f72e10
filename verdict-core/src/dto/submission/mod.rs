//! Submission store DTOs
//!
//! What the engine hands to the persistence collaborator after a run, and what
//! the store returns when listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::language::Language;
use crate::domain::submission::SubmissionTemplate;
use crate::domain::verdict::SuiteReport;

/// User id the front end sends for signed-out users
pub const ANONYMOUS_USER: &str = "anonymous";

/// Who a suite run belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribution {
    pub user_id: Option<String>,
    pub question_index: Option<i32>,
}

/// Request to persist one finished suite run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSubmission {
    pub user_id: Option<String>,
    pub source_code: String,
    pub language: Language,
    pub result: SuiteReport,
    pub question_index: Option<i32>,
    pub is_correct: bool,
}

impl SaveSubmission {
    pub fn new(template: &SubmissionTemplate, report: &SuiteReport, attribution: &Attribution) -> Self {
        Self {
            user_id: attribution.user_id.clone(),
            source_code: template.source_code.clone(),
            language: template.language,
            result: report.clone(),
            question_index: attribution.question_index,
            is_correct: report.all_correct,
        }
    }

    /// User id as stored: anonymous and blank ids become `None`
    pub fn stored_user_id(&self) -> Option<&str> {
        self.user_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty() && *id != ANONYMOUS_USER)
    }
}

/// A persisted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub id: Uuid,
    pub user_id: Option<String>,
    pub question_index: Option<i32>,
    pub language: Language,
    pub source_code: String,
    pub result: SuiteReport,
    pub is_correct: bool,
    pub submitted_at: DateTime<Utc>,
}

/// Envelope the store wraps its responses in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreResponse<T> {
    pub success: bool,
    pub data: T,
}
