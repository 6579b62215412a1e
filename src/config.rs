//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_TTL;

/// Default base URL of the NutriTrack API.
const DEFAULT_BASE_URL: &str = "https://api.nutritrack.app/v1";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the nutrition API
    pub api_base_url: String,
    /// TTL applied to cached responses without a per-endpoint TTL
    pub default_ttl: Duration,
    /// HTTP request timeout
    pub request_timeout: Duration,
    /// Interval of the background expired-entry sweep; `None` disables it
    /// and the cache relies on lazy purging alone
    pub sweep_interval: Option<Duration>,
    /// Optional bearer token for authenticated endpoints
    pub auth_token: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// Never fails; unset or unparseable values fall back to defaults.
    ///
    /// # Environment Variables
    /// - `API_BASE_URL` - Base URL of the nutrition API
    /// - `DEFAULT_TTL_MS` - Default cache TTL in milliseconds (default: 300000)
    /// - `REQUEST_TIMEOUT_SECS` - HTTP timeout in seconds (default: 10)
    /// - `SWEEP_INTERVAL_SECS` - Sweep frequency in seconds (default: 0, disabled)
    /// - `API_TOKEN` - Bearer token (default: unset)
    pub fn from_env() -> Self {
        let sweep_secs: u64 = env::var("SWEEP_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            default_ttl: Duration::from_millis(
                env::var("DEFAULT_TTL_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TTL.as_millis() as u64),
            ),
            request_timeout: Duration::from_secs(
                env::var("REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            ),
            sweep_interval: (sweep_secs > 0).then(|| Duration::from_secs(sweep_secs)),
            auth_token: env::var("API_TOKEN").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            default_ttl: DEFAULT_TTL,
            request_timeout: Duration::from_secs(10),
            sweep_interval: None,
            auth_token: None,
        }
    }
}
