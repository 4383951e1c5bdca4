//! # lector-rag
//!
//! Retrieval-augmented generation core for the Lector reading assistant.
//!
//! This crate turns a document into a queryable semantic index:
//!
//! - [`WordSegmenter`] splits the text into bounded-length word-run fragments
//! - an [`EmbeddingProvider`] maps fragment and query texts to vectors
//! - [`FragmentIndex`] pairs fragments with their embeddings, built once
//! - [`ranker::rank`] selects the top-k fragments by cosine similarity
//! - [`RetrievalSession`] composes all of the above behind an
//!   `open`/`retrieve` surface
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use lector_rag::{GeminiEmbedder, RetrievalConfig, RetrievalSession};
//!
//! let embedder = Arc::new(GeminiEmbedder::from_env()?);
//! let session =
//!     RetrievalSession::open("book.txt", embedder, RetrievalConfig::default()).await?;
//!
//! // Most relevant fragment last — ready to sit closest to the question
//! // when concatenated into a prompt.
//! let context = session.retrieve_context("who is the narrator?").await?;
//! ```
//!
//! The session is immutable after `open` and safe to share across concurrent
//! callers. Retrieval order note: ranked results come back in ascending-score
//! order; reverse explicitly if you want best-first.

pub mod config;
pub mod embedding;
pub mod error;
pub mod fragment;
#[cfg(feature = "gemini")]
pub mod gemini;
pub mod index;
pub mod mock;
pub mod ranker;
pub mod segmenter;
pub mod session;

pub use config::{RetrievalConfig, RetrievalConfigBuilder};
pub use embedding::EmbeddingProvider;
pub use error::{Result, RetrievalError};
pub use fragment::{Fragment, ScoredFragment};
#[cfg(feature = "gemini")]
pub use gemini::GeminiEmbedder;
pub use index::FragmentIndex;
pub use mock::MockEmbedder;
pub use ranker::{cosine_similarity, rank};
pub use segmenter::{Segmenter, WordSegmenter};
pub use session::RetrievalSession;
