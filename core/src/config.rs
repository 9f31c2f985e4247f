//! Startup configuration for the client.
//!
//! The hosting environment supplies one value: the API base URL. It is read
//! once, and the resulting [`crate::gateway::HttpGateway`] is injected into
//! each service — nothing mutates process-wide transport state afterwards.

use std::env;

use tracing::warn;

/// Environment variable holding the API base URL.
pub const API_URL_VAR: &str = "PETCLINIC_API_URL";

/// Fallback base URL when the environment does not provide one.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
}

impl Config {
    /// Load configuration from the environment, falling back to
    /// [`DEFAULT_API_URL`] with a logged warning.
    pub fn load() -> Self {
        let api_url = env::var(API_URL_VAR).unwrap_or_else(|_| {
            warn!("{API_URL_VAR} not set, using default: {DEFAULT_API_URL}");
            DEFAULT_API_URL.to_string()
        });
        Self { api_url }
    }
}
