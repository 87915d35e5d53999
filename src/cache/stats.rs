//! Cache Statistics Module
//!
//! Point-in-time snapshot of a cache's configuration and usage counters.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot reported by [`TtlCache::stats`](crate::cache::TtlCache::stats).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Configured time-to-live in whole seconds
    pub ttl: u64,
    /// Entries physically stored, including expired ones not yet reaped
    pub size: usize,
    /// Number of successful lookups
    pub hits: u64,
    /// Number of failed lookups (key absent or expired)
    pub misses: u64,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Total number of lookups recorded.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = CacheStats::default();
        assert_eq!(stats.ttl, 0);
        assert_eq!(stats.size, 0);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::default();
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.lookups(), 0);
    }

    #[test]
    fn test_hit_rate_calculation() {
        let stats = CacheStats {
            ttl: 60,
            size: 3,
            hits: 3,
            misses: 1,
        };
        assert!((stats.hit_rate() - 0.75).abs() < 0.001);
        assert_eq!(stats.lookups(), 4);
    }

    #[test]
    fn test_stats_serialize_field_names() {
        let stats = CacheStats {
            ttl: 3600,
            size: 2,
            hits: 5,
            misses: 1,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["ttl"], 3600);
        assert_eq!(json["size"], 2);
        assert_eq!(json["hits"], 5);
        assert_eq!(json["misses"], 1);
        assert_eq!(json.as_object().unwrap().len(), 4);
    }
}
