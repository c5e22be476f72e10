//! Service layer
//!
//! Business logic of the engine: judging a single test case and running a
//! whole suite with bounded concurrency.

mod case_runner;
mod suite;

pub use case_runner::{API_ERROR_LABEL, CaseRunner, POLL_TIMEOUT_MESSAGE, TIMED_OUT_LABEL, judge};
pub use suite::SuiteOrchestrator;
