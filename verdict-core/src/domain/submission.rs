//! Submission domain types

use serde::{Deserialize, Serialize};

use crate::domain::language::Language;
use crate::domain::test_case::TestCase;

/// Resource limits the backend enforces on each execution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLimits {
    pub cpu_time_limit_seconds: f64,
    pub memory_limit_kb: u64,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            cpu_time_limit_seconds: 2.0,
            memory_limit_kb: 128_000,
        }
    }
}

/// The part of a submission shared by every test case of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionTemplate {
    pub source_code: String,
    pub language: Language,
    /// Extra compiler flags, e.g. `-lm` for C programs using libm
    pub compiler_options: Option<String>,
    #[serde(default)]
    pub limits: ResourceLimits,
}

impl SubmissionTemplate {
    pub fn new(source_code: impl Into<String>, language: Language) -> Self {
        Self {
            source_code: source_code.into(),
            language,
            compiler_options: None,
            limits: ResourceLimits::default(),
        }
    }

    pub fn with_compiler_options(mut self, options: impl Into<String>) -> Self {
        let options = options.into();
        self.compiler_options = (!options.trim().is_empty()).then_some(options);
        self
    }

    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Pairs this template with one test case's input
    pub fn for_case(&self, test_case: &TestCase) -> Submission {
        Submission {
            source_code: self.source_code.clone(),
            language: self.language,
            stdin: test_case.input().to_string(),
            compiler_options: self.compiler_options.clone(),
            cpu_time_limit_seconds: self.limits.cpu_time_limit_seconds,
            memory_limit_kb: self.limits.memory_limit_kb,
        }
    }
}

/// One execution request, built per (code, test case) pair
///
/// Fields are private so a submission cannot change after it is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    source_code: String,
    language: Language,
    stdin: String,
    compiler_options: Option<String>,
    cpu_time_limit_seconds: f64,
    memory_limit_kb: u64,
}

impl Submission {
    pub fn new(
        source_code: impl Into<String>,
        language: Language,
        stdin: impl Into<String>,
        compiler_options: Option<String>,
        limits: ResourceLimits,
    ) -> Self {
        Self {
            source_code: source_code.into(),
            language,
            stdin: stdin.into(),
            compiler_options,
            cpu_time_limit_seconds: limits.cpu_time_limit_seconds,
            memory_limit_kb: limits.memory_limit_kb,
        }
    }

    pub fn source_code(&self) -> &str {
        &self.source_code
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn stdin(&self) -> &str {
        &self.stdin
    }

    pub fn compiler_options(&self) -> Option<&str> {
        self.compiler_options.as_deref()
    }

    pub fn cpu_time_limit_seconds(&self) -> f64 {
        self.cpu_time_limit_seconds
    }

    pub fn memory_limit_kb(&self) -> u64 {
        self.memory_limit_kb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = ResourceLimits::default();
        assert_eq!(limits.cpu_time_limit_seconds, 2.0);
        assert_eq!(limits.memory_limit_kb, 128_000);
    }

    #[test]
    fn test_for_case_uses_input_as_stdin() {
        let template = SubmissionTemplate::new("print(input())", Language::Python)
            .with_compiler_options("-O2");
        let case = TestCase::new("echo", "hello", "hello").unwrap();

        let submission = template.for_case(&case);

        assert_eq!(submission.stdin(), "hello");
        assert_eq!(submission.source_code(), "print(input())");
        assert_eq!(submission.language(), Language::Python);
        assert_eq!(submission.compiler_options(), Some("-O2"));
        assert_eq!(submission.memory_limit_kb(), 128_000);
    }

    #[test]
    fn test_blank_compiler_options_dropped() {
        let template = SubmissionTemplate::new("int main(){}", Language::C).with_compiler_options("  ");
        assert_eq!(template.compiler_options, None);
    }
}
