//! Back office configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional:
//! - `SHOPDESK_HOST` - Bind address (default: 127.0.0.1)
//! - `SHOPDESK_PORT` - Listen port (default: 3000)
//! - `SHOPDESK_SEED_DEMO_DATA` - Load the demo catalog at startup
//!   (default: true)
//!
//! Log filtering is configured separately through `RUST_LOG`.

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Back office application configuration.
#[derive(Debug, Clone)]
pub struct BackofficeConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Whether to load the demo catalog at startup
    pub seed_demo_data: bool,
}

impl BackofficeConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but has an invalid
    /// value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SHOPDESK_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOPDESK_HOST".to_owned(), e.to_string()))?;

        let port = get_env_or_default("SHOPDESK_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOPDESK_PORT".to_owned(), e.to_string()))?;

        let seed_demo_data = parse_bool(&get_env_or_default("SHOPDESK_SEED_DEMO_DATA", "true"))
            .ok_or_else(|| {
                ConfigError::InvalidEnvVar(
                    "SHOPDESK_SEED_DEMO_DATA".to_owned(),
                    "expected true or false".to_owned(),
                )
            })?;

        Ok(Self {
            host,
            port,
            seed_demo_data,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse a boolean environment value.
fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
