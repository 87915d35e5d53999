//! Cached completions for match summaries and per-job analyses.
//!
//! Generated text is cached under a content hash of the full prompt, so an
//! identical prompt never reaches the remote model twice within the TTL.
//! Each entry also keeps its prompt; a hit whose stored prompt differs (a
//! hash collision) is treated as a miss and overwritten.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cache::{CacheStats, TtlCache};
use crate::error::UpstreamError;
use crate::retry::{run_with_retry, RetryPolicy};
use crate::services::CompletionClient;

// == Cache Types ==
/// Generated text together with the prompt that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedCompletion {
    pub prompt: String,
    pub text: String,
}

/// Cache keyed by prompt hash, holding generated text
pub type CompletionCache = TtlCache<u64, CachedCompletion>;

/// Content hash of a prompt, used as its cache key.
pub fn prompt_key(prompt: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    prompt.hash(&mut hasher);
    hasher.finish()
}

// == Completion Service ==
/// Completion lookup with caching and retries.
#[derive(Clone)]
pub struct CompletionService {
    client: Arc<dyn CompletionClient>,
    cache: Arc<CompletionCache>,
    policy: RetryPolicy,
    cache_enabled: bool,
}

impl CompletionService {
    /// Creates a service that reads and writes `cache` and calls `client`
    /// under `policy` on a miss. Caching starts enabled.
    pub fn new(
        client: Arc<dyn CompletionClient>,
        cache: Arc<CompletionCache>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            client,
            cache,
            policy,
            cache_enabled: true,
        }
    }

    /// Turns caching on or off. When off the cache is neither read nor written.
    pub fn with_cache_enabled(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    /// Returns the trimmed completion for `prompt`, from cache when possible.
    pub async fn complete(&self, prompt: &str) -> Result<String, UpstreamError> {
        let key = prompt_key(prompt);

        if self.cache_enabled {
            match self.cache.get(&key) {
                Some(cached) if cached.prompt == prompt => {
                    debug!(key, "completion cache hit");
                    return Ok(cached.text);
                }
                Some(_) => warn!(key, "completion cache key collision, regenerating"),
                None => {}
            }
        }

        let reply = run_with_retry(&self.policy, || self.client.complete(prompt)).await?;
        let text = reply.trim().to_string();
        info!(key, chars = text.len(), "generated completion");

        if self.cache_enabled {
            self.cache.set(
                key,
                CachedCompletion {
                    prompt: prompt.to_string(),
                    text: text.clone(),
                },
            );
        }
        Ok(text)
    }

    /// Snapshot of the shared completion cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
