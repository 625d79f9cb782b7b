//! Newa Bhojan Server binary.
//!
//! Serves the ordering API on port 5000 (configurable). All data is
//! process-memory only: products, users, and orders are seeded at startup
//! and lost on shutdown.

#![cfg_attr(not(test), forbid(unsafe_code))]

use newa_bhojan_server::{AppState, ServerConfig, app, seed};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "newa_bhojan_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment. A missing or weak JWT secret
    // aborts startup here; there is no insecure fallback.
    let config = ServerConfig::from_env().expect("Failed to load configuration");
    let addr = config.socket_addr();

    // Build application state and seed the in-memory stores
    let state = AppState::new(config);
    seed::seed(&state).expect("Failed to seed in-memory data");

    let router = app(state);

    // Start server
    tracing::info!("server listening on {} (no database required)", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
