//! Cache Entry Module
//!
//! Defines a single cached value together with its absolute expiry instant.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A stored value and the instant after which it can no longer be read.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Absolute expiry instant
    pub expires_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry that expires `ttl` after `now`.
    ///
    /// Saturates at `now` plus the largest representable offset, so a very
    /// large TTL behaves as "never expires" instead of panicking.
    pub fn new(value: V, now: Instant, ttl: Duration) -> Self {
        let expires_at = now
            .checked_add(ttl)
            .unwrap_or_else(|| now + Duration::from_secs(u32::MAX as u64));

        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired as of `now`.
    ///
    /// Boundary condition: the entry stays readable at exactly `expires_at`
    /// and expires once `now` is strictly past it.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.expires_at < now
    }

    /// Remaining lifetime as of `now`, zero once expired.
    pub fn ttl_remaining(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }
}
