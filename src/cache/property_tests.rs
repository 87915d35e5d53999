//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the accounting and expiry rules of `TtlCache`
//! over arbitrary operation sequences.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use crate::cache::TtlCache;

// == Test Configuration ==
const TEST_TTL_SECS: i64 = 300;

// == Strategies ==
/// Generates cache keys from a small alphabet so operations collide often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-e]{1,2}".prop_map(|s| s)
}

/// Generates cache values
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,64}".prop_map(|s| s)
}

/// Generates a sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        5 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => Just(CacheOp::Clear),
    ]
}

/// Builds a runtime with a paused clock so expiry can be driven exactly
fn paused_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any sequence of operations, hits + misses equals the number of
    // lookups since the last clear, and each lookup agrees with a model map.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..80)) {
        let cache = TtlCache::from_secs(TEST_TTL_SECS);
        let mut model: HashMap<String, String> = HashMap::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    model.insert(key.clone(), value.clone());
                    cache.set(key, value);
                }
                CacheOp::Get { key } => {
                    let got = cache.get(&key);
                    prop_assert_eq!(got.as_ref(), model.get(&key));
                    match got {
                        Some(_) => expected_hits += 1,
                        None => expected_misses += 1,
                    }
                }
                CacheOp::Clear => {
                    cache.clear();
                    model.clear();
                    expected_hits = 0;
                    expected_misses = 0;
                }
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.size, model.len(), "Size mismatch");
    }

    // Writing V1 then V2 under the same key reads back V2 and leaves the
    // counters untouched by the writes.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let cache = TtlCache::from_secs(TEST_TTL_SECS);

        cache.set(key.clone(), value1);
        cache.set(key.clone(), value2.clone());
        prop_assert_eq!(cache.stats().hits + cache.stats().misses, 0);

        prop_assert_eq!(cache.get(&key), Some(value2));
        prop_assert_eq!(cache.len(), 1);
    }

    // After clear, every previously written key is absent and the stats are
    // back to zero.
    #[test]
    fn prop_clear_resets_everything(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..30)
    ) {
        let cache = TtlCache::from_secs(TEST_TTL_SECS);
        for (key, value) in &entries {
            cache.set(key.clone(), value.clone());
            cache.get(key);
        }

        cache.clear();
        let stats = cache.stats();
        prop_assert_eq!((stats.size, stats.hits, stats.misses), (0, 0, 0));

        for (key, _) in &entries {
            prop_assert!(cache.get(key).is_none());
        }
    }

    // A value written at T is readable for any read before T + ttl and
    // absent, counted as a miss, for reads strictly after it.
    #[test]
    fn prop_ttl_expiration_behavior(
        key in key_strategy(),
        value in value_strategy(),
        ttl_secs in 1i64..120,
        before_ms in 0u64..1000,
        after_ms in 1u64..5000,
    ) {
        let rt = paused_runtime();
        let ttl_ms = ttl_secs as u64 * 1000;

        let (early, late, stats) = rt.block_on(async {
            let cache = TtlCache::from_secs(ttl_secs);
            cache.set(key.clone(), value.clone());

            tokio::time::advance(Duration::from_millis(ttl_ms * before_ms / 1000)).await;
            let early = cache.get(&key);

            let elapsed = ttl_ms * before_ms / 1000;
            tokio::time::advance(Duration::from_millis(ttl_ms - elapsed + after_ms)).await;
            let late = cache.get(&key);

            (early, late, cache.stats())
        });

        prop_assert_eq!(early, Some(value));
        prop_assert!(late.is_none(), "Entry should be absent after TTL elapses");
        prop_assert_eq!(stats.hits, 1);
        prop_assert_eq!(stats.misses, 1);
        prop_assert_eq!(stats.size, 0);
    }
}
