//! Job domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::submission::Submission;

/// Opaque handle the backend assigns to an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobToken(String);

impl JobToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A submission the backend has accepted and is executing
///
/// Owned by the case runner that created it and dropped once a terminal
/// result has been observed.
#[derive(Debug, Clone)]
pub struct Job {
    pub token: JobToken,
    pub submission: Submission,
    pub created_at: DateTime<Utc>,
}

impl Job {
    pub fn new(token: JobToken, submission: Submission) -> Self {
        Self {
            token,
            submission,
            created_at: Utc::now(),
        }
    }
}
