//! Core domain types
//!
//! These types describe one orchestration run: what gets submitted, what the
//! execution backend answers, and the verdicts derived from it. They are shared
//! by the engine (which produces them), the relay (which stores them) and the
//! CLI (which renders them).

pub mod job;
pub mod language;
pub mod result;
pub mod submission;
pub mod test_case;
pub mod verdict;
