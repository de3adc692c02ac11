//! Shopdesk Back Office - CRUD API over the shop's entities.
//!
//! This binary serves the back office API, on port 3000 by default.
//!
//! # Architecture
//!
//! - Axum web framework, JSON in and out
//! - In-memory entity store, rebuilt from scratch on every start
//! - Demo catalog loaded at startup unless disabled
//!
//! Customers, categories, shop items, and orders each get the full set of
//! CRUD routes under `/api`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use shopdesk_backoffice::config::BackofficeConfig;
use shopdesk_backoffice::state::AppState;
use shopdesk_backoffice::{routes, seed};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopdesk_backoffice=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = BackofficeConfig::from_env().expect("Failed to load configuration");
    let addr = config.socket_addr();

    // Build application state over a fresh store
    let state = AppState::new(config);

    if state.config().seed_demo_data {
        seed::load_demo_data(&state).expect("Failed to load demo catalog");
        tracing::info!("Demo catalog loaded");
    }

    // Build router
    let app = routes::app(state);

    // Start server
    tracing::info!("backoffice listening on {}", addr);
    tracing::info!("Health check: http://{addr}/health");
    tracing::info!("Customers API: http://{addr}/api/customers");
    tracing::info!("Categories API: http://{addr}/api/categories");
    tracing::info!("Shop items API: http://{addr}/api/shop-items");
    tracing::info!("Orders API: http://{addr}/api/orders");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
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
