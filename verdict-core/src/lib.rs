//! Verdict Core
//!
//! Core types shared by every Verdict component.
//!
//! This crate contains:
//! - Domain types: languages, submissions, jobs, backend results, test cases and verdicts
//! - DTOs: wire shapes for the execution backend, the relay and the submission store

pub mod domain;
pub mod dto;
