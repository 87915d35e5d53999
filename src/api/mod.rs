//! API Module
//!
//! HTTP handlers and routing for the service REST API.
//!
//! # Endpoints
//! - `GET /ping` - Liveness probe
//! - `GET /health` - Health check endpoint
//! - `GET /diagnostics/cache` - Cache statistics for every cache
//! - `GET /diagnostics/cache/:name` - Cache statistics for one cache

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
