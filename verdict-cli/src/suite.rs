//! Suite files
//!
//! A suite file is either a document with an optional title:
//!
//! ```json
//! { "title": "Prime check", "testCases": [{ "name": "seven", "input": "7", "expectedOutput": "True" }] }
//! ```
//!
//! or a bare array of test cases.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use verdict_core::domain::test_case::TestCase;

/// A titled, ordered list of test cases
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Suite {
    #[serde(default)]
    pub title: Option<String>,
    pub test_cases: Vec<TestCase>,
}

impl Suite {
    /// Read and parse a suite file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read suite file {}", path.display()))?;

        Self::parse(&contents).with_context(|| format!("Invalid suite file {}", path.display()))
    }

    /// Parse a suite from JSON text
    pub fn parse(contents: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(contents).context("Suite is not valid JSON")?;

        let suite = match value {
            Value::Array(_) => Suite {
                title: None,
                test_cases: serde_json::from_value(value)?,
            },
            Value::Object(_) => serde_json::from_value(value)?,
            _ => anyhow::bail!("Suite must be an object with testCases or an array of test cases"),
        };

        Ok(suite)
    }

    /// Title for display, falling back to `fallback`
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(fallback)
    }
}
