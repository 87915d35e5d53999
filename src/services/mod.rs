//! Services Module
//!
//! Callers of the cache and retry building blocks: embedding lookups cached
//! by input text, and completions cached by prompt hash. Remote backends are
//! injected through the client traits.

mod clients;
mod completion;
mod embedding;

pub use clients::{CompletionClient, EmbeddingClient};
pub use completion::{prompt_key, CachedCompletion, CompletionCache, CompletionService};
pub use embedding::{cosine_similarity, EmbeddingCache, EmbeddingService};
