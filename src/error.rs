//! Error types for the `lector-rag` crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in retrieval operations.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// A caller-supplied parameter was rejected before any work began.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The document source could not be read at session-open time.
    #[error("Source not found: {}", path.display())]
    SourceNotFound {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// An error occurred during embedding generation.
    #[error("Embedding error ({provider}): {message}")]
    Embedding {
        /// The embedding provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },

    /// The embedding provider returned output that does not line up with its
    /// input: a different vector count than texts submitted, or vectors of
    /// inconsistent dimension. Fatal to index construction.
    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    EmbeddingDimensionMismatch {
        /// The count or dimension the index required.
        expected: usize,
        /// The count or dimension the provider returned.
        actual: usize,
    },

    /// A query was issued against an index holding zero fragments.
    #[error("Fragment index is empty")]
    EmptyIndex,

    /// A query was empty or whitespace-only; rejected before any provider call.
    #[error("Query is empty")]
    EmptyQuery,
}

/// A convenience result type for retrieval operations.
pub type Result<T> = std::result::Result<T, RetrievalError>;
