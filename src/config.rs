//! Configuration for retrieval sessions.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RetrievalError};

/// Tunable parameters for a [`RetrievalSession`](crate::RetrievalSession).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RetrievalConfig {
    /// Maximum number of words per fragment.
    pub max_length: usize,
    /// Number of fragments returned per query.
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { max_length: 500, top_k: 3 }
    }
}

impl RetrievalConfig {
    /// Create a new builder for constructing a [`RetrievalConfig`].
    pub fn builder() -> RetrievalConfigBuilder {
        RetrievalConfigBuilder::default()
    }
}

/// Builder for constructing a validated [`RetrievalConfig`].
#[derive(Debug, Clone, Default)]
pub struct RetrievalConfigBuilder {
    config: RetrievalConfig,
}

impl RetrievalConfigBuilder {
    /// Set the maximum number of words per fragment.
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.config.max_length = max_length;
        self
    }

    /// Set the number of fragments returned per query.
    pub fn top_k(mut self, top_k: usize) -> Self {
        self.config.top_k = top_k;
        self
    }

    /// Build the [`RetrievalConfig`], validating that parameters are usable.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError::InvalidArgument`] if `max_length` or `top_k`
    /// is zero.
    pub fn build(self) -> Result<RetrievalConfig> {
        if self.config.max_length == 0 {
            return Err(RetrievalError::InvalidArgument(
                "max_length must be greater than zero".to_string(),
            ));
        }
        if self.config.top_k == 0 {
            return Err(RetrievalError::InvalidArgument(
                "top_k must be greater than zero".to_string(),
            ));
        }
        Ok(self.config)
    }
}
