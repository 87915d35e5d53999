//! API Handlers
//!
//! HTTP request handlers for each service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::CacheStats;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{CacheDiagnosticsResponse, HealthResponse, PingResponse};
use crate::retry::RetryPolicy;
use crate::services::{
    CompletionCache, CompletionClient, CompletionService, EmbeddingCache, EmbeddingClient,
    EmbeddingService,
};

/// Application state shared across all handlers.
///
/// Owns the process-wide cache instances. Services built from it share
/// these caches, so diagnostics see every lookup they make.
#[derive(Clone)]
pub struct AppState {
    /// Embedding vectors keyed by input text
    pub embedding_cache: Arc<EmbeddingCache>,
    /// Match summaries and analyses keyed by prompt hash, stored with their prompt
    pub match_cache: Arc<CompletionCache>,
    /// Whether services built from this state use the caches
    pub cache_enabled: bool,
}

impl AppState {
    /// Creates a new AppState around existing caches.
    pub fn new(embedding_cache: Arc<EmbeddingCache>, match_cache: Arc<CompletionCache>) -> Self {
        Self {
            embedding_cache,
            match_cache,
            cache_enabled: true,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Both caches use the configured TTL.
    pub fn from_config(config: &Config) -> Self {
        let mut state = Self::new(
            Arc::new(EmbeddingCache::from_secs(config.cache_ttl)),
            Arc::new(CompletionCache::from_secs(config.cache_ttl)),
        );
        state.cache_enabled = config.enable_cache;
        state
    }

    /// Builds an embedding service backed by the shared embedding cache.
    pub fn embedding_service(
        &self,
        client: Arc<dyn EmbeddingClient>,
        policy: RetryPolicy,
    ) -> EmbeddingService {
        EmbeddingService::new(client, self.embedding_cache.clone(), policy)
            .with_cache_enabled(self.cache_enabled)
    }

    /// Builds a completion service backed by the shared match cache.
    pub fn completion_service(
        &self,
        client: Arc<dyn CompletionClient>,
        policy: RetryPolicy,
    ) -> CompletionService {
        CompletionService::new(client, self.match_cache.clone(), policy)
            .with_cache_enabled(self.cache_enabled)
    }

    /// Looks up a cache's stats by its diagnostics name.
    pub fn cache_stats(&self, name: &str) -> Option<CacheStats> {
        match name {
            "embedding" => Some(self.embedding_cache.stats()),
            "match" => Some(self.match_cache.stats()),
            _ => None,
        }
    }
}

/// Handler for GET /ping
pub async fn ping_handler() -> Json<PingResponse> {
    Json(PingResponse::ok())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /diagnostics/cache
///
/// Reports the stats of every cache instance verbatim.
pub async fn cache_diagnostics_handler(
    State(state): State<AppState>,
) -> Json<CacheDiagnosticsResponse> {
    Json(CacheDiagnosticsResponse {
        embedding: state.embedding_cache.stats(),
        match_summary: state.match_cache.stats(),
    })
}

/// Handler for GET /diagnostics/cache/:name
pub async fn cache_stats_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CacheStats>> {
    state
        .cache_stats(&name)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("cache '{}'", name)))
}
