//! Gemini embedding provider using the Generative Language API.
//!
//! This module is only available when the `gemini` feature is enabled.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::embedding::EmbeddingProvider;
use crate::error::{Result, RetrievalError};

/// The Generative Language API model endpoint base.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// The default Gemini embedding model.
const DEFAULT_MODEL: &str = "gemini-embedding-001";

/// The default dimensionality for `gemini-embedding-001`.
const DEFAULT_DIMENSIONS: usize = 3072;

/// An [`EmbeddingProvider`] backed by the Gemini embedding API.
///
/// Uses `reqwest` to call the `:embedContent` and `:batchEmbedContents`
/// endpoints directly.
///
/// # Configuration
///
/// - `model` – defaults to `gemini-embedding-001`.
/// - `output_dimensionality` – optional truncation of the output vector.
/// - `api_key` – from the constructor or the `GEMINI_API_KEY` environment
///   variable.
///
/// # Example
///
/// ```rust,ignore
/// use lector_rag::gemini::GeminiEmbedder;
///
/// let embedder = GeminiEmbedder::new("your-api-key")?;
/// let embedding = embedder.embed("hello world").await?;
/// ```
pub struct GeminiEmbedder {
    client: reqwest::Client,
    api_key: String,
    model: String,
    dimensions: usize,
    /// If set, passed to the API to truncate the output vector.
    output_dimensionality: Option<usize>,
}

impl GeminiEmbedder {
    /// Create a new provider with the given API key.
    ///
    /// Uses the default model (`gemini-embedding-001`) and dimensions (3072).
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError::Embedding`] if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(RetrievalError::Embedding {
                provider: "Gemini".into(),
                message: "API key must not be empty".into(),
            });
        }

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            model: DEFAULT_MODEL.into(),
            dimensions: DEFAULT_DIMENSIONS,
            output_dimensionality: None,
        })
    }

    /// Create a new provider using the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`RetrievalError::Embedding`] if the variable is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| RetrievalError::Embedding {
            provider: "Gemini".into(),
            message: "GEMINI_API_KEY environment variable not set".into(),
        })?;
        Self::new(api_key)
    }

    /// Set the model name (e.g. `text-embedding-004`).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the output dimensionality (truncates the embedding vector).
    ///
    /// This also updates the value returned by
    /// [`dimensions()`](EmbeddingProvider::dimensions).
    pub fn with_output_dimensionality(mut self, dims: usize) -> Self {
        self.dimensions = dims;
        self.output_dimensionality = Some(dims);
        self
    }

    fn request_for<'a>(&'a self, text: &'a str) -> EmbedContentRequest<'a> {
        EmbedContentRequest {
            model: format!("models/{}", self.model),
            content: Content { parts: vec![Part { text }] },
            output_dimensionality: self.output_dimensionality,
        }
    }

    /// Decode a non-success response into an [`RetrievalError::Embedding`].
    async fn api_error(response: reqwest::Response) -> RetrievalError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);

        error!(provider = "Gemini", %status, "API error");
        RetrievalError::Embedding {
            provider: "Gemini".into(),
            message: format!("API returned {status}: {detail}"),
        }
    }
}

// ── Gemini API request/response types ──────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EmbedContentRequest<'a> {
    model: String,
    content: Content<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_dimensionality: Option<usize>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct BatchEmbedRequest<'a> {
    requests: Vec<EmbedContentRequest<'a>>,
}

#[derive(Deserialize)]
struct EmbedContentResponse {
    embedding: ContentEmbedding,
}

#[derive(Deserialize)]
struct BatchEmbedResponse {
    embeddings: Vec<ContentEmbedding>,
}

#[derive(Deserialize)]
struct ContentEmbedding {
    values: Vec<f32>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

// ── EmbeddingProvider implementation ───────────────────────────────

#[async_trait]
impl EmbeddingProvider for GeminiEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        debug!(provider = "Gemini", text_len = text.len(), "embedding single text");

        let url = format!("{GEMINI_API_BASE}/{}:embedContent", self.model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&self.request_for(text))
            .send()
            .await
            .map_err(|e| {
                error!(provider = "Gemini", error = %e, "request failed");
                RetrievalError::Embedding {
                    provider: "Gemini".into(),
                    message: format!("request failed: {e}"),
                }
            })?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let parsed: EmbedContentResponse = response.json().await.map_err(|e| {
            error!(provider = "Gemini", error = %e, "failed to parse response");
            RetrievalError::Embedding {
                provider: "Gemini".into(),
                message: format!("failed to parse response: {e}"),
            }
        })?;

        Ok(parsed.embedding.values)
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!(
            provider = "Gemini",
            batch_size = texts.len(),
            model = %self.model,
            "embedding batch"
        );

        let request_body =
            BatchEmbedRequest { requests: texts.iter().map(|t| self.request_for(t)).collect() };

        let url = format!("{GEMINI_API_BASE}/{}:batchEmbedContents", self.model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!(provider = "Gemini", error = %e, "batch request failed");
                RetrievalError::Embedding {
                    provider: "Gemini".into(),
                    message: format!("request failed: {e}"),
                }
            })?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let parsed: BatchEmbedResponse = response.json().await.map_err(|e| {
            error!(provider = "Gemini", error = %e, "failed to parse batch response");
            RetrievalError::Embedding {
                provider: "Gemini".into(),
                message: format!("failed to parse response: {e}"),
            }
        })?;

        Ok(parsed.embeddings.into_iter().map(|e| e.values).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}
