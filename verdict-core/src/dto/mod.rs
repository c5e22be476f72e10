//! Data Transfer Objects
//!
//! Wire shapes exchanged with the execution backend, the relay and the
//! submission store. Domain types are converted to and from these at the edges.

pub mod backend;
pub mod relay;
pub mod submission;
