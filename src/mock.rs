//! Deterministic embedding provider for tests and offline development.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::embedding::EmbeddingProvider;
use crate::error::{Result, RetrievalError};

/// An [`EmbeddingProvider`] that returns preprogrammed vectors.
///
/// Texts are matched exactly. Asking for a text that was never programmed is
/// a [`RetrievalError::Embedding`] error, so a fixture typo fails loudly
/// instead of silently embedding to garbage.
///
/// # Example
///
/// ```rust,ignore
/// use lector_rag::MockEmbedder;
///
/// let embedder = MockEmbedder::new(2)
///     .with_vector("one two", vec![1.0, 0.0])
///     .with_vector("three four", vec![0.0, 1.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    dimensions: usize,
}

impl MockEmbedder {
    /// Create an empty mock producing vectors of the given dimension.
    pub fn new(dimensions: usize) -> Self {
        Self { vectors: HashMap::new(), dimensions }
    }

    /// Program the vector returned for `text`.
    pub fn with_vector(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.into(), vector);
        self
    }
}

#[async_trait]
impl EmbeddingProvider for MockEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.vectors.get(text).cloned().ok_or_else(|| RetrievalError::Embedding {
            provider: "Mock".to_string(),
            message: format!("no vector programmed for text {text:?}"),
        })
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
