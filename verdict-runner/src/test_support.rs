//! In-memory execution backend for engine tests

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use verdict_client::{ExecutionBackend, FetchError, SubmitError};
use verdict_core::domain::job::{Job, JobToken};
use verdict_core::domain::result::{RawResult, status};
use verdict_core::domain::submission::Submission;

/// One scripted answer to a status query
#[derive(Debug, Clone)]
pub enum Step {
    Status(RawResult),
    Reject(u16),
    /// The query never answers
    Hang,
}

pub fn processing() -> Step {
    Step::Status(RawResult {
        status_id: status::PROCESSING,
        status_description: Some("Processing".into()),
        ..Default::default()
    })
}

pub fn accepted(stdout: &str) -> Step {
    Step::Status(RawResult {
        status_id: status::ACCEPTED,
        status_description: Some("Accepted".into()),
        stdout: Some(stdout.into()),
        ..Default::default()
    })
}

pub fn compile_error(output: &str) -> Step {
    Step::Status(RawResult {
        status_id: status::COMPILATION_ERROR,
        status_description: Some("Compilation Error".into()),
        compile_output: Some(output.into()),
        ..Default::default()
    })
}

/// Backend whose status answers are scripted per stdin
///
/// Each job's token is derived from its stdin, so scripts stay attached to the
/// right case regardless of submission order. The last step of a script
/// repeats once the script is exhausted.
#[derive(Default)]
pub struct ScriptedBackend {
    scripts: Mutex<HashMap<String, VecDeque<Step>>>,
    delays: HashMap<String, Duration>,
    submit_rejection: Option<u16>,
    submit_hangs: bool,
    submitted: Mutex<Vec<String>>,
    pub submit_calls: AtomicUsize,
    pub fetch_calls: AtomicUsize,
    in_flight: AtomicUsize,
    pub peak_in_flight: AtomicUsize,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(self, stdin: &str, steps: Vec<Step>) -> Self {
        self.scripts
            .lock()
            .unwrap()
            .insert(stdin.to_string(), steps.into());
        self
    }

    /// Sleep this long inside every status query for `stdin`
    pub fn delay(mut self, stdin: &str, delay: Duration) -> Self {
        self.delays.insert(stdin.to_string(), delay);
        self
    }

    pub fn reject_submissions(mut self, status: u16) -> Self {
        self.submit_rejection = Some(status);
        self
    }

    /// Every submit call never answers
    pub fn hang_submissions(mut self) -> Self {
        self.submit_hangs = true;
        self
    }

    /// Stdin of each accepted submission, in the order they arrived
    pub fn submission_order(&self) -> Vec<String> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn submits(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }

    pub fn fetches(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn peak(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    fn next_step(&self, stdin: &str) -> Step {
        let mut scripts = self.scripts.lock().unwrap();
        let script = scripts
            .get_mut(stdin)
            .unwrap_or_else(|| panic!("no script for stdin {:?}", stdin));
        if script.len() > 1 {
            script.pop_front().unwrap()
        } else {
            script.front().cloned().unwrap()
        }
    }
}

#[async_trait]
impl ExecutionBackend for ScriptedBackend {
    async fn submit(&self, submission: &Submission) -> Result<Job, SubmitError> {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.submit_rejection {
            return Err(SubmitError::rejected(status, "Internal Server Error"));
        }
        if self.submit_hangs {
            return std::future::pending().await;
        }

        self.submitted
            .lock()
            .unwrap()
            .push(submission.stdin().to_string());

        let active = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(active, Ordering::SeqCst);

        Ok(Job::new(
            JobToken::new(submission.stdin().to_string()),
            submission.clone(),
        ))
    }

    async fn fetch_status(&self, token: &JobToken) -> Result<RawResult, FetchError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(token.as_str()) {
            tokio::time::sleep(*delay).await;
        }

        match self.next_step(token.as_str()) {
            Step::Status(result) => {
                if result.is_terminal() {
                    self.in_flight.fetch_sub(1, Ordering::SeqCst);
                }
                Ok(result)
            }
            Step::Reject(status) => {
                self.in_flight.fetch_sub(1, Ordering::SeqCst);
                Err(FetchError::rejected(status, "Not Found"))
            }
            Step::Hang => std::future::pending().await,
        }
    }
}
