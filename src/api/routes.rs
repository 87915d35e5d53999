//! API Routes
//!
//! Configures the Axum router with all service endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_diagnostics_handler, cache_stats_handler, health_handler, ping_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /ping` - Liveness probe
/// - `GET /health` - Health check with timestamp
/// - `GET /diagnostics/cache` - Stats for every cache
/// - `GET /diagnostics/cache/:name` - Stats for one cache (`embedding` or `match`)
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ping", get(ping_handler))
        .route("/health", get(health_handler))
        .route("/diagnostics/cache", get(cache_diagnostics_handler))
        .route("/diagnostics/cache/:name", get(cache_stats_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
