//! Configuration types for templatectl.

use secrecy::SecretString;
use std::time::Duration;

/// Connection configuration for the cluster's management API.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the cluster (e.g. https://localhost:9200)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retries for rate-limited requests
    pub max_retries: usize,
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Bearer token for authenticated clusters. Never logged.
    pub api_token: Option<SecretString>,
}
