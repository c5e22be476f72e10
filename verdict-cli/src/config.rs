//! Configuration module
//!
//! Handles CLI configuration: where the execution backend and the relay live.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the execution backend, or of a relay exposing its contract
    pub backend_url: String,

    /// Sent as `X-Auth-Token` when set
    pub backend_token: Option<String>,

    /// URL of the relay's submission store
    pub relay_url: String,
}
