//! API Module
//!
//! HTTP API layer for the relay.
//! Each submodule handles endpoints for a specific domain.

pub mod error;
pub mod health;
pub mod judge;
pub mod submission;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;
use verdict_client::{ExecutionBackend, ExecutionClient};
use verdict_core::domain::submission::ResourceLimits;
use verdict_runner::{Config, Poller};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub backend: Arc<dyn ExecutionBackend>,
    pub poller: Poller,
    pub limits: ResourceLimits,
}

impl AppState {
    /// Builds the state for the backend described by `config`
    pub fn new(pool: PgPool, config: &Config) -> Self {
        let mut client = ExecutionClient::new(config.backend_url.clone());
        if let Some(token) = &config.backend_token {
            client = client.with_auth_token(token.clone());
        }
        let backend: Arc<dyn ExecutionBackend> = Arc::new(client);

        Self {
            pool,
            poller: Poller::from_config(Arc::clone(&backend), config),
            backend,
            limits: config.limits,
        }
    }
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Backend contract pass-through
        .route("/submissions", post(judge::create_submission))
        .route("/submissions/{token}", get(judge::get_submission))
        // One-shot execution
        .route("/api/judge0", post(judge::execute))
        // Submission store
        .route(
            "/api/submissions",
            get(submission::list_submissions).post(submission::save_submission),
        )
        .route("/api/submissions/save", post(submission::save_submission))
        .route("/api/submissions/all", get(submission::list_all_submissions))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
