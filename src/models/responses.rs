//! Response DTOs for the service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the liveness probe (GET /ping)
#[derive(Debug, Clone, Serialize)]
pub struct PingResponse {
    /// Always "ok"
    pub status: String,
}

impl PingResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for GET /diagnostics/cache
///
/// Each field is the verbatim `stats()` snapshot of one cache instance.
#[derive(Debug, Clone, Serialize)]
pub struct CacheDiagnosticsResponse {
    /// Embedding cache, keyed by input text
    pub embedding: CacheStats,
    /// Summary and analysis cache, keyed by prompt hash
    #[serde(rename = "match")]
    pub match_summary: CacheStats,
}
