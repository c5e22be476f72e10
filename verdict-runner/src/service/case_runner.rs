//! Case runner
//!
//! Judges one test case: submit, wait for the terminal result, normalize, and
//! compare against the expected output. Every failure along the way is turned
//! into a verdict, so a broken case never takes the rest of the suite down.

use std::sync::Arc;

use tokio::time;
use tracing::{debug, info, warn};
use verdict_client::{ExecutionBackend, SubmitError};
use verdict_core::domain::result::{NormalizedResult, RawResult};
use verdict_core::domain::submission::SubmissionTemplate;
use verdict_core::domain::test_case::TestCase;
use verdict_core::domain::verdict::CaseVerdict;

use crate::config::Config;
use crate::normalizer::{self, NO_OUTPUT};
use crate::scheduler::{PollError, Poller};

/// Status label for cases the backend refused or could not be asked about
pub const API_ERROR_LABEL: &str = "API Error";

/// Status label for cases whose job never reached a terminal status
pub const TIMED_OUT_LABEL: &str = "Timed Out";

pub const POLL_TIMEOUT_MESSAGE: &str = "polling timed out";

/// Runs a single test case against the execution backend
#[derive(Clone)]
pub struct CaseRunner {
    backend: Arc<dyn ExecutionBackend>,
    poller: Poller,
}

impl CaseRunner {
    /// Creates a case runner that polls through `poller`
    pub fn new(backend: Arc<dyn ExecutionBackend>, poller: Poller) -> Self {
        Self { backend, poller }
    }

    /// Creates a case runner with the polling settings from `config`
    pub fn from_config(backend: Arc<dyn ExecutionBackend>, config: &Config) -> Self {
        let poller = Poller::from_config(Arc::clone(&backend), config);
        Self::new(backend, poller)
    }

    /// Runs `test_case` with the template's code, language and options
    ///
    /// Never fails: submit and poll failures become verdicts with an error
    /// message. The submit call shares the poller's request timeout.
    pub async fn run(&self, template: &SubmissionTemplate, test_case: &TestCase) -> CaseVerdict {
        let submission = template.for_case(test_case);
        let timeout = self.poller.request_timeout();

        let submitted = time::timeout(timeout, self.backend.submit(&submission))
            .await
            .unwrap_or_else(|_| Err(SubmitError::Timeout(timeout)));

        let job = match submitted {
            Ok(job) => job,
            Err(e) => {
                warn!(test_case = test_case.name(), error = %e, "Submission failed");
                return failed(test_case, API_ERROR_LABEL, e.to_string(), Some(false));
            }
        };

        debug!(test_case = test_case.name(), token = %job.token, "Job submitted");

        let raw = match self.poller.await_result(&job.token).await {
            Ok(raw) => raw,
            Err(PollError::TimedOut { attempts }) => {
                warn!(
                    test_case = test_case.name(),
                    token = %job.token,
                    attempts,
                    "Polling timed out"
                );
                return failed(test_case, TIMED_OUT_LABEL, POLL_TIMEOUT_MESSAGE.to_string(), None);
            }
            Err(PollError::Fetch(e)) => {
                return failed(test_case, API_ERROR_LABEL, e.to_string(), None);
            }
        };

        let verdict = judge(test_case, &raw);

        info!(
            test_case = test_case.name(),
            status = %verdict.result.status_label,
            correct = ?verdict.is_correct,
            "Test case judged"
        );

        verdict
    }
}

/// Derives the verdict for a terminal backend result
///
/// Only an Accepted run whose trimmed output equals the expected output
/// exactly is correct. Any other status is incorrect even if the output
/// happens to match.
pub fn judge(test_case: &TestCase, raw: &RawResult) -> CaseVerdict {
    let result = normalizer::normalize(raw);

    let is_correct = raw.is_accepted() && result.output == test_case.expected_output();
    let error_message = if raw.is_accepted() {
        None
    } else {
        result.error_detail.clone()
    };

    CaseVerdict {
        test_case: test_case.clone(),
        result,
        is_correct: Some(is_correct),
        error_message,
    }
}

/// Verdict for a case that produced no backend result
fn failed(test_case: &TestCase, label: &str, message: String, is_correct: Option<bool>) -> CaseVerdict {
    CaseVerdict {
        test_case: test_case.clone(),
        result: NormalizedResult {
            output: NO_OUTPUT.to_string(),
            status_label: label.to_string(),
            error_detail: Some(message.clone()),
        },
        is_correct,
        error_message: Some(message),
    }
}

/// Verdict for a case whose task died before producing one
pub(crate) fn undetermined(test_case: &TestCase, message: &str) -> CaseVerdict {
    failed(test_case, API_ERROR_LABEL, message.to_string(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedBackend, Step, accepted, compile_error, processing};
    use std::time::Duration;
    use verdict_core::domain::language::Language;
    use verdict_core::domain::result::status;

    const IS_PRIME: &str = "def is_prime(n):\n    return n > 1 and all(n % d for d in range(2, n))\nprint(is_prime(int(input())))";

    fn runner(backend: &Arc<ScriptedBackend>) -> CaseRunner {
        let poller = Poller::new(backend.clone(), Duration::from_millis(1), 10);
        CaseRunner::new(backend.clone(), poller)
    }

    fn template() -> SubmissionTemplate {
        SubmissionTemplate::new(IS_PRIME, Language::Python)
    }

    #[tokio::test]
    async fn test_accepted_matching_output_is_correct() {
        let backend = Arc::new(ScriptedBackend::new().script("7", vec![processing(), accepted("True\n")]));
        let case = TestCase::new("seven", "7", "True").unwrap();

        let verdict = runner(&backend).run(&template(), &case).await;

        assert_eq!(verdict.is_correct, Some(true));
        assert_eq!(verdict.result.output, "True");
        assert_eq!(verdict.result.status_label, "Accepted");
        assert_eq!(verdict.error_message, None);
        assert_eq!(verdict.test_case, case);
    }

    #[tokio::test]
    async fn test_accepted_wrong_output_is_incorrect() {
        let backend = Arc::new(ScriptedBackend::new().script("9", vec![accepted("True\n")]));
        let case = TestCase::new("nine", "9", "False").unwrap();

        let verdict = runner(&backend).run(&template(), &case).await;

        assert_eq!(verdict.is_correct, Some(false));
        assert_eq!(verdict.result.output, "True");
        assert_eq!(verdict.error_message, None);
    }

    #[tokio::test]
    async fn test_compile_error_is_incorrect_with_detail() {
        let backend = Arc::new(ScriptedBackend::new().script("10", vec![compile_error("SyntaxError")]));
        let case = TestCase::new("ten", "10", "False").unwrap();

        let verdict = runner(&backend).run(&template(), &case).await;

        assert_eq!(verdict.is_correct, Some(false));
        assert_eq!(verdict.error_message.as_deref(), Some("SyntaxError"));
        assert_eq!(verdict.result.status_label, "Compilation Error");
    }

    #[tokio::test]
    async fn test_submit_failure_skips_polling() {
        let backend = Arc::new(ScriptedBackend::new().reject_submissions(500));
        let case = TestCase::new("seven", "7", "True").unwrap();

        let verdict = runner(&backend).run(&template(), &case).await;

        assert_eq!(verdict.is_correct, Some(false));
        assert_eq!(verdict.result.status_label, API_ERROR_LABEL);
        assert!(verdict.error_message.unwrap().contains("500"));
        assert_eq!(backend.submits(), 1);
        assert_eq!(backend.fetches(), 0);
    }

    #[tokio::test]
    async fn test_never_terminal_is_undetermined() {
        let backend = Arc::new(ScriptedBackend::new().script("7", vec![processing()]));
        let case = TestCase::new("seven", "7", "True").unwrap();

        let verdict = runner(&backend).run(&template(), &case).await;

        assert_eq!(verdict.is_correct, None);
        assert!(verdict.error_message.unwrap().contains("timed out"));
        assert_eq!(verdict.result.status_label, TIMED_OUT_LABEL);
        assert_eq!(backend.fetches(), 10);
    }

    #[tokio::test]
    async fn test_hung_submit_is_a_failed_case() {
        let backend = Arc::new(ScriptedBackend::new().hang_submissions());
        let poller = Poller::new(backend.clone(), Duration::from_millis(1), 10)
            .with_request_timeout(Duration::from_millis(50));
        let case = TestCase::new("seven", "7", "True").unwrap();

        let verdict = CaseRunner::new(backend.clone(), poller).run(&template(), &case).await;

        assert_eq!(verdict.is_correct, Some(false));
        assert_eq!(verdict.result.status_label, API_ERROR_LABEL);
        assert!(verdict.error_message.unwrap().contains("timed out"));
        assert_eq!(backend.fetches(), 0);
    }

    #[tokio::test]
    async fn test_hung_status_query_is_undetermined() {
        let backend = Arc::new(ScriptedBackend::new().script("7", vec![Step::Hang]));
        let poller = Poller::new(backend.clone(), Duration::from_millis(1), 10)
            .with_request_timeout(Duration::from_millis(50));
        let case = TestCase::new("seven", "7", "True").unwrap();

        let verdict = CaseRunner::new(backend.clone(), poller).run(&template(), &case).await;

        assert_eq!(verdict.is_correct, None);
        assert_eq!(verdict.result.status_label, API_ERROR_LABEL);
        assert!(verdict.error_message.unwrap().contains("status query timed out"));
        assert_eq!(backend.fetches(), 1);
    }

    #[tokio::test]
    async fn test_status_query_failure_is_undetermined() {
        let backend = Arc::new(ScriptedBackend::new().script("7", vec![Step::Reject(404)]));
        let case = TestCase::new("seven", "7", "True").unwrap();

        let verdict = runner(&backend).run(&template(), &case).await;

        assert_eq!(verdict.is_correct, None);
        assert_eq!(verdict.result.status_label, API_ERROR_LABEL);
        assert!(verdict.error_message.unwrap().contains("404"));
    }

    #[test]
    fn test_non_accepted_never_correct_even_if_output_matches() {
        let case = TestCase::new("tle", "1", "warning").unwrap();
        let raw = RawResult {
            status_id: status::TIME_LIMIT_EXCEEDED,
            status_description: Some("Time Limit Exceeded".into()),
            stderr: Some("warning\n".into()),
            ..Default::default()
        };

        let verdict = judge(&case, &raw);

        assert_eq!(verdict.result.output, "warning");
        assert_eq!(verdict.is_correct, Some(false));
        assert_eq!(verdict.error_message.as_deref(), Some("warning\n"));
    }

    #[test]
    fn test_comparison_is_exact_after_trailing_trim() {
        let case = TestCase::new("spaces", "", "a  b").unwrap();
        let raw = RawResult {
            status_id: status::ACCEPTED,
            status_description: Some("Accepted".into()),
            stdout: Some("a b\n".into()),
            ..Default::default()
        };

        assert_eq!(judge(&case, &raw).is_correct, Some(false));
    }
}
