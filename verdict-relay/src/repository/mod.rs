//! Repository Module
//!
//! Data access layer for the relay.

pub mod submission;

pub use submission as submission_repository;
