//! End-to-end retrieval session tests against deterministic embedders.

use std::sync::Arc;

use async_trait::async_trait;
use lector_rag::{
    EmbeddingProvider, MockEmbedder, RetrievalConfig, RetrievalError, RetrievalSession,
};

/// Embedder for the five-word fixture document split at `max_length = 2`.
///
/// One-hot fragment vectors make each query score proportional to one query
/// component, so the expected ranking can be read off the query vector.
fn fixture_embedder() -> MockEmbedder {
    MockEmbedder::new(3)
        .with_vector("one two", vec![1.0, 0.0, 0.0])
        .with_vector("three four", vec![0.0, 1.0, 0.0])
        .with_vector("five", vec![0.0, 0.0, 1.0])
        .with_vector("what comes after three?", vec![0.1, 0.9, 0.2])
}

fn fixture_config(top_k: usize) -> RetrievalConfig {
    RetrievalConfig::builder().max_length(2).top_k(top_k).build().unwrap()
}

#[tokio::test]
async fn retrieve_returns_nearest_fragment_last() {
    let session = RetrievalSession::from_text(
        "one two three four five",
        Arc::new(fixture_embedder()),
        fixture_config(3),
    )
    .await
    .unwrap();
    assert_eq!(session.fragment_count(), 3);

    let results = session.retrieve("what comes after three?").await.unwrap();

    // Ascending score order: scores are proportional to [0.1, 0.9, 0.2].
    assert_eq!(results, ["one two", "five", "three four"]);
}

#[tokio::test]
async fn retrieve_with_top_k_one_returns_only_the_nearest() {
    let session = RetrievalSession::from_text(
        "one two three four five",
        Arc::new(fixture_embedder()),
        fixture_config(1),
    )
    .await
    .unwrap();

    let results = session.retrieve("what comes after three?").await.unwrap();
    assert_eq!(results, ["three four"]);
}

#[tokio::test]
async fn open_reads_document_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.txt");
    std::fs::write(&path, "one two three four five").unwrap();

    let session =
        RetrievalSession::open(&path, Arc::new(fixture_embedder()), fixture_config(3))
            .await
            .unwrap();

    assert_eq!(session.fragment_count(), 3);
    let results = session.retrieve("what comes after three?").await.unwrap();
    assert_eq!(results.last().map(String::as_str), Some("three four"));
}

#[tokio::test]
async fn open_missing_file_is_source_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-book.txt");

    let err = RetrievalSession::open(&path, Arc::new(MockEmbedder::new(3)), fixture_config(3))
        .await
        .unwrap_err();

    match err {
        RetrievalError::SourceNotFound { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected SourceNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_document_opens_but_cannot_be_queried() {
    let session = RetrievalSession::from_text(
        "   \n\t  ",
        Arc::new(MockEmbedder::new(3)),
        fixture_config(3),
    )
    .await
    .unwrap();
    assert_eq!(session.fragment_count(), 0);

    let err = session.retrieve("anything").await.unwrap_err();
    assert!(matches!(err, RetrievalError::EmptyIndex));
}

#[tokio::test]
async fn blank_query_is_rejected_before_the_provider_is_called() {
    let session = RetrievalSession::from_text(
        "one two three four five",
        Arc::new(fixture_embedder()),
        fixture_config(3),
    )
    .await
    .unwrap();

    // The mock errors on any unprogrammed text, so an EmptyQuery here proves
    // the provider was never invoked.
    let err = session.retrieve("   ").await.unwrap_err();
    assert!(matches!(err, RetrievalError::EmptyQuery));
    let err = session.retrieve("").await.unwrap_err();
    assert!(matches!(err, RetrievalError::EmptyQuery));
}

/// A provider that silently drops the last vector of every batch.
struct ShortBatchEmbedder;

#[async_trait]
impl EmbeddingProvider for ShortBatchEmbedder {
    async fn embed(&self, _text: &str) -> lector_rag::Result<Vec<f32>> {
        Ok(vec![1.0, 0.0])
    }

    async fn embed_batch(&self, texts: &[&str]) -> lector_rag::Result<Vec<Vec<f32>>> {
        Ok(texts.iter().skip(1).map(|_| vec![1.0, 0.0]).collect())
    }

    fn dimensions(&self) -> usize {
        2
    }
}

#[tokio::test]
async fn short_provider_batch_fails_session_construction() {
    let err = RetrievalSession::from_text(
        "one two three four five",
        Arc::new(ShortBatchEmbedder),
        fixture_config(3),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        RetrievalError::EmbeddingDimensionMismatch { expected: 3, actual: 2 }
    ));
}

#[tokio::test]
async fn zero_config_knobs_are_rejected_up_front() {
    let embedder = Arc::new(MockEmbedder::new(3));

    let err = RetrievalSession::from_text(
        "one two",
        embedder.clone(),
        RetrievalConfig { max_length: 0, top_k: 3 },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RetrievalError::InvalidArgument(_)));

    let err = RetrievalSession::from_text(
        "one two",
        embedder,
        RetrievalConfig { max_length: 2, top_k: 0 },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RetrievalError::InvalidArgument(_)));
}

#[tokio::test]
async fn retrieve_context_joins_fragments_with_blank_lines() {
    let session = RetrievalSession::from_text(
        "one two three four five",
        Arc::new(fixture_embedder()),
        fixture_config(2),
    )
    .await
    .unwrap();

    let context = session.retrieve_context("what comes after three?").await.unwrap();
    assert_eq!(context, "five\n\nthree four");
}

#[tokio::test]
async fn one_session_serves_concurrent_callers() {
    let session = Arc::new(
        RetrievalSession::from_text(
            "one two three four five",
            Arc::new(fixture_embedder()),
            fixture_config(1),
        )
        .await
        .unwrap(),
    );

    let (a, b) = tokio::join!(
        session.retrieve("what comes after three?"),
        session.retrieve("what comes after three?"),
    );

    assert_eq!(a.unwrap(), b.unwrap());
}
