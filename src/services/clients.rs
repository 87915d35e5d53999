//! Remote client traits.
//!
//! Implement these to plug in a concrete embedding or completion backend.
//! Carried in the services as `Arc<dyn ...>`, constructed once at startup.

use async_trait::async_trait;

use crate::error::UpstreamError;

// == Client Traits ==
/// Turns text into an embedding vector.
#[async_trait]
pub trait EmbeddingClient: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, UpstreamError>;
}

/// Produces a text completion for a prompt.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, UpstreamError>;
}
