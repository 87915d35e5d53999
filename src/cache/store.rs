//! TTL Cache Store Module
//!
//! Thread-safe key/value cache where every entry expires a fixed time after
//! it was written. Expired entries are purged lazily on lookup; there is no
//! background sweep.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::Instant;
use tracing::trace;

use crate::cache::{CacheEntry, CacheStats};

// == Inner State ==
/// Everything guarded by the cache lock.
#[derive(Debug)]
struct Inner<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    hits: u64,
    misses: u64,
}

// == TTL Cache ==
/// Key/value cache with a single fixed time-to-live and hit/miss counters.
///
/// All operations take one exclusive lock for their full duration, so they
/// appear atomic with respect to each other. Share it across tasks with
/// `Arc<TtlCache<K, V>>`; no `&mut` access is needed.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    ttl: Duration,
    inner: Mutex<Inner<K, V>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    // == Constructor ==
    /// Creates an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                hits: 0,
                misses: 0,
            }),
        }
    }

    /// Creates a cache from a TTL in seconds. Negative values clamp to zero.
    pub fn from_secs(ttl_secs: i64) -> Self {
        Self::new(Duration::from_secs(ttl_secs.max(0) as u64))
    }

    // == Get ==
    /// Returns a clone of the value stored under `key` if it has not expired.
    ///
    /// Absent and expired keys both count as a miss; an expired entry found
    /// here is removed. A zero TTL makes every entry expired on read.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = Instant::now();
        let mut guard = self.lock();
        let inner = &mut *guard;

        // Outer None: absent. Inner None: present but expired.
        let lookup = inner.entries.get(key).map(|entry| {
            if self.ttl.is_zero() || entry.is_expired_at(now) {
                None
            } else {
                Some(entry.value.clone())
            }
        });

        match lookup {
            Some(Some(value)) => {
                inner.hits += 1;
                Some(value)
            }
            Some(None) => {
                inner.entries.remove(key);
                inner.misses += 1;
                trace!(size = inner.entries.len(), "evicted expired cache entry");
                None
            }
            None => {
                inner.misses += 1;
                None
            }
        }
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry and
    /// restarting its lifetime. Counters are not touched.
    pub fn set(&self, key: K, value: V) {
        let entry = CacheEntry::new(value, Instant::now(), self.ttl);
        self.lock().entries.insert(key, entry);
    }

    // == Clear ==
    /// Removes every entry and resets both counters to zero.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.entries.clear();
        inner.hits = 0;
        inner.misses = 0;
    }

    // == Stats ==
    /// Returns a snapshot of the configured TTL, raw size and counters.
    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        CacheStats {
            ttl: self.ttl.as_secs(),
            size: inner.entries.len(),
            hits: inner.hits,
            misses: inner.misses,
        }
    }

    // == Length ==
    /// Number of entries physically stored, expired ones included.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    // == Is Empty ==
    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // A panic while holding the lock cannot leave the map half-updated,
    // so a poisoned lock is safe to keep using.
    fn lock(&self) -> MutexGuard<'_, Inner<K, V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
