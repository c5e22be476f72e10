//! Scheduler layer
//!
//! Waits for in-flight jobs to reach a terminal status on the backend.

pub mod poller;

pub use poller::{PollError, Poller};
