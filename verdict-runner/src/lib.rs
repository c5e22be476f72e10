//! Verdict Runner
//!
//! The submission orchestration engine. Given a submission template and an
//! ordered list of test cases it drives one remote execution per case through
//! the backend's submit → poll → resolve protocol and returns a [`SuiteReport`].
//!
//! Architecture:
//! - Configuration: settings from environment or defaults
//! - Normalizer: pure mapping from backend payloads to comparable results
//! - Scheduler: the poller that waits for one job to reach a terminal status
//! - Services: the case runner (one test case) and suite orchestrator (all of them)
//!
//! [`SuiteReport`]: verdict_core::domain::verdict::SuiteReport

pub mod config;
pub mod normalizer;
pub mod scheduler;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use scheduler::{PollError, Poller};
pub use service::{CaseRunner, SuiteOrchestrator};
