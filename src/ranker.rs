//! Cosine-similarity ranking of indexed fragments against a query embedding.

use std::cmp::Ordering;

use crate::error::{Result, RetrievalError};
use crate::fragment::ScoredFragment;
use crate::index::FragmentIndex;

/// Compute cosine similarity between two vectors.
///
/// `dot(a, b) / (‖a‖ · ‖b‖)`, in `[-1, 1]`. Defined as `0.0` when either
/// vector has zero norm — the zero vector carries no direction, so it is
/// treated as dissimilar to everything rather than dividing by zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Score every indexed fragment against `query_embedding` and select the
/// `top_k` most similar.
///
/// Selection ties are broken toward the lower fragment index — the earlier
/// corpus position wins. The returned sequence is ordered by **ascending**
/// score, least relevant of the selected set first; callers that want
/// best-first order must reverse explicitly. At most
/// `min(top_k, index.len())` fragments are returned.
///
/// Pure computation: no I/O, deterministic, `O(N · D)` for `N` fragments of
/// dimension `D`.
///
/// # Errors
///
/// Returns [`RetrievalError::InvalidArgument`] if `top_k` is zero and
/// [`RetrievalError::EmptyIndex`] if the index holds no fragments.
pub fn rank(
    query_embedding: &[f32],
    index: &FragmentIndex,
    top_k: usize,
) -> Result<Vec<ScoredFragment>> {
    if top_k == 0 {
        return Err(RetrievalError::InvalidArgument(
            "top_k must be greater than zero".to_string(),
        ));
    }
    if index.is_empty() {
        return Err(RetrievalError::EmptyIndex);
    }

    let mut scored: Vec<ScoredFragment> = index
        .fragments()
        .iter()
        .zip(index.embeddings())
        .map(|(fragment, embedding)| ScoredFragment {
            fragment: fragment.clone(),
            score: cosine_similarity(query_embedding, embedding),
        })
        .collect();

    // Highest score first; equal scores prefer the earlier corpus position.
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.fragment.index.cmp(&b.fragment.index))
    });
    scored.truncate(top_k);
    // The selected set is emitted least-relevant first.
    scored.reverse();

    Ok(scored)
}
