//! Test case domain model
//!
//! Test cases are authored outside the engine and are read-only to it. They are
//! validated once, when constructed or deserialized, so the engine never has to
//! guess at missing fields.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A named input/expected-output pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TestCaseRecord")]
pub struct TestCase {
    name: String,
    input: String,
    expected_output: String,
}

/// Reasons a test case is rejected at construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TestCaseError {
    #[error("test case name cannot be empty")]
    EmptyName,

    /// Outputs are right-trimmed before comparison, so this case could never pass
    #[error("expected output of test case '{0}' has trailing whitespace")]
    UntrimmedExpectedOutput(String),
}

impl TestCase {
    /// Creates a validated test case
    pub fn new(
        name: impl Into<String>,
        input: impl Into<String>,
        expected_output: impl Into<String>,
    ) -> Result<Self, TestCaseError> {
        let name = name.into();
        let expected_output = expected_output.into();

        if name.trim().is_empty() {
            return Err(TestCaseError::EmptyName);
        }

        if expected_output.trim_end() != expected_output {
            return Err(TestCaseError::UntrimmedExpectedOutput(name));
        }

        Ok(Self {
            name,
            input: input.into(),
            expected_output,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fed to the program as stdin
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn expected_output(&self) -> &str {
        &self.expected_output
    }
}

/// Unvalidated wire form of a test case
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct TestCaseRecord {
    name: String,
    input: String,
    expected_output: String,
}

impl TryFrom<TestCaseRecord> for TestCase {
    type Error = TestCaseError;

    fn try_from(record: TestCaseRecord) -> Result<Self, Self::Error> {
        TestCase::new(record.name, record.input, record.expected_output)
    }
}
