//! Resume Matcher - core of a resume-to-job matching service
//!
//! Provides a TTL cache with hit/miss statistics, a retry executor with
//! exponential backoff, the cached embedding and completion services built
//! on them, and a small diagnostics API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod retry;
pub mod services;

pub use api::AppState;
pub use cache::{CacheStats, TtlCache};
pub use config::Config;
pub use retry::{run_with_retry, run_with_retry_if, RetryPolicy};
