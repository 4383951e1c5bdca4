//! Data types for document fragments and scored retrieval results.

use serde::{Deserialize, Serialize};

/// A bounded-length contiguous slice of a document's word sequence.
///
/// Fragments partition the document: consecutive, non-overlapping,
/// order-preserving word runs. They are created once at index-build time and
/// are immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fragment {
    /// Position of this fragment in the corpus, 0-based and stable.
    pub index: usize,
    /// The fragment text, words rejoined with single spaces.
    pub text: String,
}

/// A retrieved [`Fragment`] paired with its relevance score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredFragment {
    /// The retrieved fragment.
    pub fragment: Fragment,
    /// Cosine similarity against the query (higher is more relevant).
    pub score: f32,
}
