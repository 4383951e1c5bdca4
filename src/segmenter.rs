//! Document segmentation into bounded-length word runs.

use crate::error::{Result, RetrievalError};
use crate::fragment::Fragment;

/// A strategy for splitting raw document text into [`Fragment`]s.
///
/// Implementations produce fragments with stable 0-based indices and no
/// embeddings; embeddings are attached later by
/// [`FragmentIndex::build`](crate::FragmentIndex::build).
pub trait Segmenter: Send + Sync {
    /// Split document text into an ordered fragment sequence.
    ///
    /// Returns an empty `Vec` for empty or whitespace-only text.
    fn segment(&self, text: &str) -> Vec<Fragment>;
}

/// Splits text into consecutive runs of at most `max_length` words.
///
/// Any whitespace run separates words; fragments are rejoined with single
/// spaces, so internal whitespace collapses. Every fragment holds exactly
/// `max_length` words except the last, which holds the remainder.
///
/// # Example
///
/// ```rust,ignore
/// use lector_rag::WordSegmenter;
///
/// let segmenter = WordSegmenter::new(500)?;
/// let fragments = segmenter.segment(&book_text);
/// ```
#[derive(Debug, Clone)]
pub struct WordSegmenter {
    max_length: usize,
}

impl WordSegmenter {
    /// Create a new `WordSegmenter`.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError::InvalidArgument`] if `max_length` is zero.
    pub fn new(max_length: usize) -> Result<Self> {
        if max_length == 0 {
            return Err(RetrievalError::InvalidArgument(
                "max_length must be greater than zero".to_string(),
            ));
        }
        Ok(Self { max_length })
    }

    /// Maximum number of words per fragment.
    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Segmenter for WordSegmenter {
    fn segment(&self, text: &str) -> Vec<Fragment> {
        let words: Vec<&str> = text.split_whitespace().collect();
        words
            .chunks(self.max_length)
            .enumerate()
            .map(|(index, run)| Fragment { index, text: run.join(" ") })
            .collect()
    }
}
