//! Retrieval sessions: the caller-facing open/retrieve surface.
//!
//! A [`RetrievalSession`] is constructed once per document and queried many
//! times. It composes the [`WordSegmenter`], an injected
//! [`EmbeddingProvider`], the [`FragmentIndex`] and the ranker into the whole
//! surface a chat or voice loop needs.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error, info};

use crate::config::RetrievalConfig;
use crate::embedding::EmbeddingProvider;
use crate::error::{Result, RetrievalError};
use crate::index::FragmentIndex;
use crate::ranker;
use crate::segmenter::{Segmenter, WordSegmenter};

/// A read-only retrieval session over a single document.
///
/// Opening a session is the expensive one-time step — it reads the document
/// in full and embeds the whole corpus in a single provider call. Run it
/// during startup, not on a latency-sensitive path. After that the session
/// is immutable: every method takes `&self` and holds no interior
/// mutability, so one session may be shared across any number of concurrent
/// callers.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use lector_rag::{RetrievalConfig, RetrievalSession};
///
/// let session =
///     RetrievalSession::open("book.txt", Arc::new(embedder), RetrievalConfig::default())
///         .await?;
/// let context = session.retrieve("who is the narrator?").await?;
/// ```
pub struct RetrievalSession {
    config: RetrievalConfig,
    embedder: Arc<dyn EmbeddingProvider>,
    index: FragmentIndex,
}

impl std::fmt::Debug for RetrievalSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetrievalSession")
            .field("config", &self.config)
            .field("embedder", &"<dyn EmbeddingProvider>")
            .field("index", &self.index)
            .finish()
    }
}

impl RetrievalSession {
    /// Open a session over the UTF-8 text file at `path`.
    ///
    /// Reads the document in full, segments it into fragments of at most
    /// `config.max_length` words, and builds the fragment index with one
    /// batch embedding call.
    ///
    /// # Errors
    ///
    /// - [`RetrievalError::SourceNotFound`] if `path` cannot be read
    /// - [`RetrievalError::InvalidArgument`] if `config.max_length` or
    ///   `config.top_k` is zero
    /// - [`RetrievalError::EmbeddingDimensionMismatch`] if the provider
    ///   returns a mis-sized batch; no partial session is produced
    pub async fn open(
        path: impl AsRef<Path>,
        embedder: Arc<dyn EmbeddingProvider>,
        config: RetrievalConfig,
    ) -> Result<Self> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await.map_err(|e| {
            error!(path = %path.display(), error = %e, "failed to read document source");
            RetrievalError::SourceNotFound { path: path.to_path_buf(), source: e }
        })?;

        debug!(path = %path.display(), bytes = text.len(), "loaded document source");
        Self::from_text(&text, embedder, config).await
    }

    /// Open a session over already-loaded document text.
    ///
    /// Same pipeline as [`open`](RetrievalSession::open) minus the file read.
    ///
    /// # Errors
    ///
    /// As for [`open`](RetrievalSession::open), except `SourceNotFound`.
    pub async fn from_text(
        text: &str,
        embedder: Arc<dyn EmbeddingProvider>,
        config: RetrievalConfig,
    ) -> Result<Self> {
        // Configs can be assembled literally, so the builder's checks are
        // repeated here before any work begins.
        let segmenter = WordSegmenter::new(config.max_length)?;
        if config.top_k == 0 {
            return Err(RetrievalError::InvalidArgument(
                "top_k must be greater than zero".to_string(),
            ));
        }

        let fragments = segmenter.segment(text);
        let index = FragmentIndex::build(fragments, embedder.as_ref()).await?;

        info!(
            fragment_count = index.len(),
            max_length = config.max_length,
            top_k = config.top_k,
            "retrieval session ready"
        );

        Ok(Self { config, embedder, index })
    }

    /// The configuration this session was opened with.
    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Number of fragments in the session's index.
    pub fn fragment_count(&self) -> usize {
        self.index.len()
    }

    /// Retrieve the fragment texts most relevant to `query`.
    ///
    /// Embeds the query in one provider call, ranks it against the stored
    /// index, and returns up to `top_k` fragment texts in the ranker's
    /// ascending-score order — the most relevant fragment comes **last**.
    ///
    /// # Errors
    ///
    /// - [`RetrievalError::EmptyQuery`] for an empty or whitespace-only
    ///   query, rejected before the provider is called
    /// - [`RetrievalError::EmptyIndex`] if the document produced zero
    ///   fragments, likewise rejected before the provider is called
    /// - [`RetrievalError::Embedding`] if the provider fails
    pub async fn retrieve(&self, query: &str) -> Result<Vec<String>> {
        if query.trim().is_empty() {
            return Err(RetrievalError::EmptyQuery);
        }
        if self.index.is_empty() {
            return Err(RetrievalError::EmptyIndex);
        }

        let query_embedding = self.embedder.embed(query).await.map_err(|e| {
            error!(error = %e, "query embedding failed");
            e
        })?;

        let ranked = ranker::rank(&query_embedding, &self.index, self.config.top_k)?;
        debug!(query_len = query.len(), result_count = ranked.len(), "query ranked");

        Ok(ranked.into_iter().map(|s| s.fragment.text).collect())
    }

    /// Retrieve relevant fragments and join them into one context block,
    /// ready to be spliced into a model prompt.
    ///
    /// Fragments are separated by blank lines and keep the ranker's order,
    /// so the most relevant fragment sits closest to whatever the caller
    /// appends after the block.
    ///
    /// # Errors
    ///
    /// As for [`retrieve`](RetrievalSession::retrieve).
    pub async fn retrieve_context(&self, query: &str) -> Result<String> {
        let fragments = self.retrieve(query).await?;
        Ok(fragments.join("\n\n"))
    }
}
