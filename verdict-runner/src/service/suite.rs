//! Suite orchestrator
//!
//! Runs every test case of a suite and assembles the report. Each case runs in
//! its own task; a semaphore caps how many jobs are in flight at once so the
//! backend's rate limits are respected. Permits are taken in declaration order
//! before a case is spawned, so cases start in the order given. Verdicts are
//! collected by index, so the report always follows declaration order whatever
//! order cases finish in.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};
use verdict_client::{ExecutionBackend, ExecutionClient, StoreClient, SubmissionStore};
use verdict_core::domain::submission::SubmissionTemplate;
use verdict_core::domain::test_case::TestCase;
use verdict_core::domain::verdict::{CaseVerdict, SuiteReport};
use verdict_core::dto::submission::{Attribution, SaveSubmission};

use crate::config::Config;
use crate::service::case_runner::{self, CaseRunner};

/// Runs whole suites through a [`CaseRunner`]
#[derive(Clone)]
pub struct SuiteOrchestrator {
    runner: Arc<CaseRunner>,
    max_concurrent: usize,
    store: Option<Arc<dyn SubmissionStore>>,
}

impl SuiteOrchestrator {
    /// Creates an orchestrator without persistence
    ///
    /// # Arguments
    /// * `runner` - Runs individual cases
    /// * `max_concurrent` - Cases in flight at once (values below 1 are treated as 1)
    pub fn new(runner: CaseRunner, max_concurrent: usize) -> Self {
        Self {
            runner: Arc::new(runner),
            max_concurrent: max_concurrent.max(1),
            store: None,
        }
    }

    /// Builds the HTTP-backed orchestrator described by `config`
    pub fn from_config(config: &Config) -> Self {
        let mut client = ExecutionClient::new(config.backend_url.clone());
        if let Some(token) = &config.backend_token {
            client = client.with_auth_token(token.clone());
        }
        let backend: Arc<dyn ExecutionBackend> = Arc::new(client);

        let orchestrator = Self::new(
            CaseRunner::from_config(backend, config),
            config.max_concurrent_cases,
        );

        match &config.store_url {
            Some(url) => orchestrator.with_store(Arc::new(StoreClient::new(url.clone()))),
            None => orchestrator,
        }
    }

    /// Hands finished reports to `store` in [`SuiteOrchestrator::run_and_record`]
    pub fn with_store(mut self, store: Arc<dyn SubmissionStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Runs every test case and returns the report
    ///
    /// The report holds exactly one verdict per test case, in the order given.
    pub async fn run_suite(&self, template: &SubmissionTemplate, test_cases: &[TestCase]) -> SuiteReport {
        info!(
            language = %template.language,
            cases = test_cases.len(),
            max_concurrent = self.max_concurrent,
            "Starting suite run"
        );

        let template = Arc::new(template.clone());
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let mut tasks = JoinSet::new();

        for (index, test_case) in test_cases.iter().cloned().enumerate() {
            let runner = Arc::clone(&self.runner);
            let template = Arc::clone(&template);
            // The semaphore is never closed; a missing permit only means no cap
            let permit = Arc::clone(&semaphore).acquire_owned().await.ok();

            tasks.spawn(async move {
                let _permit = permit;
                let verdict = runner.run(&template, &test_case).await;
                (index, verdict)
            });
        }

        let mut slots: Vec<Option<CaseVerdict>> = test_cases.iter().map(|_| None).collect();

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, verdict)) => slots[index] = Some(verdict),
                Err(e) => warn!("Case task failed: {}", e),
            }
        }

        let verdicts = slots
            .into_iter()
            .zip(test_cases)
            .map(|(slot, test_case)| {
                slot.unwrap_or_else(|| case_runner::undetermined(test_case, "case task failed"))
            })
            .collect();

        let report = SuiteReport::from_verdicts(verdicts);

        info!(
            passed = report.passed(),
            total = report.len(),
            all_correct = report.all_correct,
            "Suite run completed"
        );

        report
    }

    /// Runs the suite, then hands the report to the submission store
    ///
    /// Persistence is best-effort: a store failure is logged and the report is
    /// returned unchanged.
    pub async fn run_and_record(
        &self,
        template: &SubmissionTemplate,
        test_cases: &[TestCase],
        attribution: &Attribution,
    ) -> SuiteReport {
        let report = self.run_suite(template, test_cases).await;
        self.record(template, &report, attribution).await;
        report
    }

    /// Hands a finished report to the submission store, if one is configured
    ///
    /// Returns whether the store accepted it. Failures are logged, never raised.
    pub async fn record(
        &self,
        template: &SubmissionTemplate,
        report: &SuiteReport,
        attribution: &Attribution,
    ) -> bool {
        let Some(store) = &self.store else {
            return false;
        };

        let submission = SaveSubmission::new(template, report, attribution);
        match store.save(&submission).await {
            Ok(()) => {
                info!(
                    question_index = ?attribution.question_index,
                    is_correct = report.all_correct,
                    "Submission recorded"
                );
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to record submission");
                false
            }
        }
    }

    /// Runs the suite unless `cancel` resolves first
    ///
    /// On cancellation every in-flight case is aborted and `None` is returned;
    /// a partial report is never produced.
    pub async fn run_suite_until<F>(
        &self,
        template: &SubmissionTemplate,
        test_cases: &[TestCase],
        cancel: F,
    ) -> Option<SuiteReport>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            report = self.run_suite(template, test_cases) => Some(report),
            _ = cancel => {
                warn!(cases = test_cases.len(), "Suite run cancelled");
                None
            }
        }
    }
}
