//! Integration tests for Shopdesk.
//!
//! Each test spawns the real back office router in-process on an ephemeral
//! port, with its own fresh store, so tests are fully isolated and run in
//! parallel without external setup.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopdesk-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `health` - Health check, fallback, and middleware headers
//! - `customers` / `categories` / `shop_items` / `orders` - CRUD per entity
//! - `seed_data` - The demo catalog a seeded server starts with

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::Client;

use shopdesk_backoffice::config::BackofficeConfig;
use shopdesk_backoffice::routes;
use shopdesk_backoffice::seed;
use shopdesk_backoffice::state::AppState;

/// A running back office server plus an HTTP client pointed at it.
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Spawn a server over an empty store.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be started.
    pub async fn new() -> Self {
        Self::spawn(false).await
    }

    /// Spawn a server with the demo catalog loaded.
    ///
    /// # Panics
    ///
    /// Panics if the server cannot be started.
    pub async fn seeded() -> Self {
        Self::spawn(true).await
    }

    async fn spawn(seed_demo_data: bool) -> Self {
        let config = BackofficeConfig {
            host: "127.0.0.1".parse().expect("valid loopback address"),
            port: 0,
            seed_demo_data,
        };
        let addr = config.socket_addr();

        let state = AppState::new(config);
        if state.config().seed_demo_data {
            seed::load_demo_data(&state).expect("Failed to load demo catalog");
        }

        let app = routes::app(state);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("Failed to bind test listener");
        let local_addr = listener.local_addr().expect("listener has a local address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        Self {
            client: Client::new(),
            base_url: format!("http://{local_addr}"),
        }
    }

    /// Build a full URL for the given path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
