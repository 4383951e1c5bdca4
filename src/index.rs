//! The fragment index: ordered fragments zipped with their embeddings.

use tracing::{debug, error};

use crate::embedding::EmbeddingProvider;
use crate::error::{Result, RetrievalError};
use crate::fragment::Fragment;

/// An immutable pairing of fragments with their embedding vectors.
///
/// `embedding_at(i)` corresponds to `fragment_at(i)` for every `i`. The index
/// is built once per document and never mutated afterwards, so a shared
/// reference may serve any number of concurrent readers without
/// synchronization.
#[derive(Debug, Clone, Default)]
pub struct FragmentIndex {
    fragments: Vec<Fragment>,
    embeddings: Vec<Vec<f32>>,
}

impl FragmentIndex {
    /// Build an index by embedding every fragment text in one provider call.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError::EmbeddingDimensionMismatch`] if the provider
    /// returns a different number of vectors than fragments submitted, or
    /// vectors of inconsistent dimension. Provider failures propagate
    /// unchanged. On any error no index is produced — a partial index is
    /// never observable.
    pub async fn build(
        fragments: Vec<Fragment>,
        embedder: &dyn EmbeddingProvider,
    ) -> Result<Self> {
        if fragments.is_empty() {
            debug!("building empty fragment index");
            return Ok(Self::default());
        }

        let texts: Vec<&str> = fragments.iter().map(|f| f.text.as_str()).collect();
        let embeddings = embedder.embed_batch(&texts).await?;

        Self::from_parts(fragments, embeddings)
    }

    /// Assemble an index from fragments and precomputed embeddings.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError::EmbeddingDimensionMismatch`] if the two
    /// sequences differ in length or the vectors differ in dimension.
    pub fn from_parts(fragments: Vec<Fragment>, embeddings: Vec<Vec<f32>>) -> Result<Self> {
        if embeddings.len() != fragments.len() {
            error!(
                expected = fragments.len(),
                actual = embeddings.len(),
                "embedding count does not match fragment count"
            );
            return Err(RetrievalError::EmbeddingDimensionMismatch {
                expected: fragments.len(),
                actual: embeddings.len(),
            });
        }

        if let Some(first) = embeddings.first() {
            let dimension = first.len();
            if let Some(bad) = embeddings.iter().find(|e| e.len() != dimension) {
                error!(
                    expected = dimension,
                    actual = bad.len(),
                    "inconsistent embedding dimension"
                );
                return Err(RetrievalError::EmbeddingDimensionMismatch {
                    expected: dimension,
                    actual: bad.len(),
                });
            }
        }

        debug!(fragment_count = fragments.len(), "fragment index built");
        Ok(Self { fragments, embeddings })
    }

    /// The fragment at corpus position `i`, if in range.
    pub fn fragment_at(&self, i: usize) -> Option<&Fragment> {
        self.fragments.get(i)
    }

    /// The embedding paired with the fragment at position `i`, if in range.
    pub fn embedding_at(&self, i: usize) -> Option<&[f32]> {
        self.embeddings.get(i).map(Vec::as_slice)
    }

    /// Number of indexed fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether the index holds zero fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// All indexed fragments in corpus order.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// All embeddings, parallel to [`fragments`](FragmentIndex::fragments).
    pub fn embeddings(&self) -> &[Vec<f32>] {
        &self.embeddings
    }
}
