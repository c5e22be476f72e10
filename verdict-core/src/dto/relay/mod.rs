//! Relay DTOs
//!
//! Shapes of the relay's one-shot execution endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::language::{Language, UnknownLanguage};
use crate::domain::submission::{ResourceLimits, Submission};

/// Body of `POST /api/judge0`: submit and wait for the terminal result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteRequest {
    pub code: String,
    pub language_id: u32,
    #[serde(default)]
    pub stdin: String,
    #[serde(default)]
    pub compiler_options: Option<String>,
}

impl ExecuteRequest {
    /// Builds the submission the relay forwards, with the given limits
    pub fn into_submission(self, limits: ResourceLimits) -> Result<Submission, UnknownLanguage> {
        let language = Language::from_backend_id(self.language_id)?;
        let compiler_options = self.compiler_options.filter(|opts| !opts.trim().is_empty());
        Ok(Submission::new(
            self.code,
            language,
            self.stdin,
            compiler_options,
            limits,
        ))
    }
}

/// Error body returned by the relay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
