//! Verdict domain types

use serde::{Deserialize, Serialize};

use crate::domain::result::NormalizedResult;
use crate::domain::test_case::TestCase;

/// Outcome of running one test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseVerdict {
    pub test_case: TestCase,
    pub result: NormalizedResult,
    /// `None` when the outcome could not be determined (timeout, lost backend)
    pub is_correct: Option<bool>,
    pub error_message: Option<String>,
}

impl CaseVerdict {
    pub fn passed(&self) -> bool {
        self.is_correct == Some(true)
    }

    pub fn is_undetermined(&self) -> bool {
        self.is_correct.is_none()
    }
}

/// Verdicts of a whole suite, in test case declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteReport {
    pub verdicts: Vec<CaseVerdict>,
    pub all_correct: bool,
}

impl SuiteReport {
    pub fn from_verdicts(verdicts: Vec<CaseVerdict>) -> Self {
        let all_correct = verdicts.iter().all(CaseVerdict::passed);
        Self {
            verdicts,
            all_correct,
        }
    }

    /// Number of verdicts with `is_correct == Some(true)`
    pub fn passed(&self) -> usize {
        self.verdicts.iter().filter(|v| v.passed()).count()
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }
}
