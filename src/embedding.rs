//! Embedding provider trait: the text-to-vector boundary.

use async_trait::async_trait;

use crate::error::Result;

/// A provider that maps text to fixed-dimension embedding vectors.
///
/// The retrieval core never inspects vector internals; it only requires that
/// a given provider instance returns one vector per input, in input order,
/// with a consistent dimension, and that identical input embeds identically
/// within a session. Latency and batching strategy are the provider's
/// concern — the core issues one batch call per corpus build and one single
/// call per query.
///
/// # Example
///
/// ```rust,ignore
/// use lector_rag::EmbeddingProvider;
///
/// let embedding = provider.embed("who is the narrator?").await?;
/// assert_eq!(embedding.len(), provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding vector for a single text input.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embedding vectors for a batch of text inputs.
    ///
    /// The default implementation calls [`embed`](EmbeddingProvider::embed)
    /// sequentially for each input. Override this method if the backend
    /// supports native batch embedding for better throughput.
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.embed(text).await?);
        }
        Ok(results)
    }

    /// Return the dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;
}
