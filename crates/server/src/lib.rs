//! Newa Bhojan Server - REST API for the ordering storefront.
//!
//! Library crate so the binary and the integration tests share the same
//! router assembly. See [`app`] for the composed application.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. There are no dependencies to
/// check: all state is in-process.
async fn health() -> &'static str {
    "ok"
}

/// Build the full application router.
///
/// CORS is permissive: the storefront is served from a separate origin
/// and the API carries no cookies (auth is bearer-token only).
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
