//! Service Module
//!
//! Business logic layer for the relay.

pub mod submission;

pub use submission as submission_service;
