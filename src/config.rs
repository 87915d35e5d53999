//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::DEFAULT_TTL_SECS;
use crate::retry::{RetryPolicy, DEFAULT_MAX_ATTEMPTS};

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,
    /// Time-to-live in seconds for the embedding and match caches
    pub cache_ttl: i64,
    /// When false, services bypass their caches entirely
    pub enable_cache: bool,
    /// Bound on total tries for each remote call
    pub retry_max_attempts: u32,
    /// Backoff multiplier in seconds
    pub retry_wait_multiplier_secs: u64,
    /// Lower bound on any backoff wait, in seconds
    pub retry_min_wait_secs: u64,
    /// Default log level when RUST_LOG is not set
    pub log_level: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_HOST` - Bind address (default: 0.0.0.0)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 3600)
    /// - `ENABLE_CACHE` - Enable service caches (default: true)
    /// - `RETRY_MAX_ATTEMPTS` - Tries per remote call (default: 3)
    /// - `RETRY_WAIT_MULTIPLIER_SECS` - Backoff multiplier (default: 1)
    /// - `RETRY_MIN_WAIT_SECS` - Minimum backoff wait (default: 1)
    /// - `LOG_LEVEL` - Default log level (default: info)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            enable_cache: env::var("ENABLE_CACHE")
                .ok()
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.enable_cache),
            retry_max_attempts: parse_var("RETRY_MAX_ATTEMPTS")
                .unwrap_or(defaults.retry_max_attempts),
            retry_wait_multiplier_secs: parse_var("RETRY_WAIT_MULTIPLIER_SECS")
                .unwrap_or(defaults.retry_wait_multiplier_secs),
            retry_min_wait_secs: parse_var("RETRY_MIN_WAIT_SECS")
                .unwrap_or(defaults.retry_min_wait_secs),
            log_level: env::var("LOG_LEVEL")
                .map(|v| v.to_lowercase())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Retry policy applied to every remote embedding or completion call.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retry_max_attempts,
            Duration::from_secs(self.retry_wait_multiplier_secs),
            Duration::from_secs(self.retry_min_wait_secs),
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8000,
            cache_ttl: DEFAULT_TTL_SECS,
            enable_cache: true,
            retry_max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_wait_multiplier_secs: 1,
            retry_min_wait_secs: 1,
            log_level: "info".to_string(),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
