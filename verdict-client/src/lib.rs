//! Verdict HTTP Clients
//!
//! Type-safe HTTP clients for the services the engine talks to:
//! - [`ExecutionClient`]: the sandboxed execution backend (or the relay in front of it)
//! - [`StoreClient`]: the submission store exposed by the relay
//!
//! The engine only depends on the [`ExecutionBackend`] and [`SubmissionStore`]
//! traits, so either client can be swapped for another implementation.
//!
//! # Example
//!
//! ```no_run
//! use verdict_client::ExecutionClient;
//! use verdict_core::domain::language::Language;
//! use verdict_core::domain::submission::{ResourceLimits, Submission};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ExecutionClient::new("http://localhost:2358");
//!
//!     let submission = Submission::new("print(input())", Language::Python, "hi", None, ResourceLimits::default());
//!     let job = client.submit(&submission).await?;
//!     let result = client.fetch_status(&job.token).await?;
//!
//!     println!("status {}", result.status_id);
//!     Ok(())
//! }
//! ```

mod backend;
pub mod error;
mod store;
mod submissions;

pub use backend::ExecutionBackend;
pub use error::{FetchError, StoreError, SubmitError};
pub use store::{StoreClient, SubmissionStore};

use reqwest::{Client, Method, RequestBuilder};

/// Header carrying the backend's authentication token
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// HTTP client for the execution backend's `/submissions` API
///
/// Holds no per-job state: every call is a single independent request.
#[derive(Debug, Clone)]
pub struct ExecutionClient {
    /// Base URL of the backend (e.g., "http://localhost:2358")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Optional value for the `X-Auth-Token` header
    auth_token: Option<String>,
}

impl ExecutionClient {
    /// Create a new execution client
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the backend or of a relay exposing the same contract
    ///
    /// # Example
    /// ```
    /// use verdict_client::ExecutionClient;
    ///
    /// let client = ExecutionClient::new("http://localhost:2358/");
    /// assert_eq!(client.base_url(), "http://localhost:2358");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new execution client with a custom HTTP client
    ///
    /// This allows you to configure request timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            auth_token: None,
        }
    }

    /// Send `X-Auth-Token` with every request
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request against `path`, attaching credentials when configured
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.client.request(method, url);

        match &self.auth_token {
            Some(token) => builder.header(AUTH_TOKEN_HEADER, token),
            None => builder,
        }
    }
}
