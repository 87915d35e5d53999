//! Cache Module
//!
//! Provides an in-memory, thread-safe cache with a fixed TTL, lazy eviction
//! and hit/miss statistics.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::TtlCache;

// == Public Constants ==
/// Default time-to-live in seconds for service caches
pub const DEFAULT_TTL_SECS: i64 = 3600;
