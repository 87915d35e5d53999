//! Cached embedding lookups.
//!
//! Vectors are cached by their exact input text. On a miss the remote client
//! is called under the retry policy and the result is stored.

use std::sync::Arc;

use tracing::debug;

use crate::cache::{CacheStats, TtlCache};
use crate::error::UpstreamError;
use crate::retry::{run_with_retry, RetryPolicy};
use crate::services::EmbeddingClient;

/// Cache keyed by input text, holding embedding vectors
pub type EmbeddingCache = TtlCache<String, Vec<f32>>;

// == Embedding Service ==
/// Embedding lookup with caching and retries.
#[derive(Clone)]
pub struct EmbeddingService {
    client: Arc<dyn EmbeddingClient>,
    cache: Arc<EmbeddingCache>,
    policy: RetryPolicy,
    cache_enabled: bool,
}

impl EmbeddingService {
    /// Creates a service that reads and writes `cache` and calls `client`
    /// under `policy` on a miss. Caching starts enabled.
    pub fn new(
        client: Arc<dyn EmbeddingClient>,
        cache: Arc<EmbeddingCache>,
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

    /// Returns the embedding for `text`, from cache when possible.
    ///
    /// # Errors
    /// The client's own error from the final attempt once retries run out.
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>, UpstreamError> {
        if self.cache_enabled {
            if let Some(vector) = self.cache.get(text) {
                debug!(chars = text.len(), "embedding cache hit");
                return Ok(vector);
            }
        }

        let vector = run_with_retry(&self.policy, || self.client.embed(text)).await?;

        if self.cache_enabled {
            self.cache.set(text.to_string(), vector.clone());
        }
        Ok(vector)
    }

    /// Snapshot of the shared embedding cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

// == Similarity ==
/// Cosine similarity of two vectors.
///
/// Returns 0.0 when the vectors are empty, differ in length, or either has
/// zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }

    let (dot, norm_a, norm_b) = a
        .iter()
        .zip(b)
        .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (x, y)| {
            (dot + x * y, na + x * x, nb + y * y)
        });

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}
