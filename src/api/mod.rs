//! REST API for stateless voltage-drop calculations.
//!
//! Provides three endpoints:
//! - `POST /calculate` — run one computation from a JSON circuit payload
//! - `GET /catalog` — standard sections and enumerated input choices
//! - `GET /config` — deployed compliance mode and limits

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use crate::calc::Calculator;
use crate::config::AppConfig;

/// Immutable application state shared across all request handlers.
///
/// Constructed once at startup and wrapped in `Arc` — no locks needed
/// since every request is an independent pure computation.
pub struct AppState {
    /// Application configuration for this deployment.
    pub config: AppConfig,
    /// Calculator carrying the deployed compliance mode.
    pub calculator: Calculator,
}

impl AppState {
    /// Builds the state from configuration.
    pub fn new(config: AppConfig) -> Self {
        let calculator = Calculator::new(config.compliance.mode);
        Self { config, calculator }
    }
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/calculate", post(handlers::post_calculate))
        .route("/catalog", get(handlers::get_catalog))
        .route("/config", get(handlers::get_config))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
