//! The remote model as an opaque capability.
//!
//! Services only need "given a prompt and a grounding flag, return text plus
//! optional citations". [`ContentModel`] is that seam; [`crate::GeminiClient`]
//! is the HTTP implementation and tests substitute canned responses.

use ceylon_core::ModelResponse;
use std::sync::Arc;

/// A single generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRequest {
    /// Full natural-language prompt.
    pub prompt: String,
    /// Enable the web search grounding tool.
    pub search_grounding: bool,
}

impl ModelRequest {
    /// A prompt with search grounding enabled.
    pub fn grounded(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), search_grounding: true }
    }
}

/// Errors from the remote model call.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The API key was missing or rejected.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Rate limited by the API.
    #[error("rate limited: too many requests")]
    RateLimited,

    /// Any other HTTP error response.
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response body was not the expected JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// The prompt was blocked and no candidates were returned.
    #[error("prompt blocked: {0}")]
    Blocked(String),
}

impl From<reqwest::Error> for ModelError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { ModelError::Timeout } else { ModelError::Network(Arc::new(err)) }
    }
}

/// Capability to generate content from a prompt.
#[async_trait::async_trait]
pub trait ContentModel: Send + Sync {
    /// Issue one generation request. Implementations must not retry.
    async fn generate(&self, request: &ModelRequest) -> Result<ModelResponse, ModelError>;
}

#[async_trait::async_trait]
impl<M: ContentModel + ?Sized> ContentModel for Arc<M> {
    async fn generate(&self, request: &ModelRequest) -> Result<ModelResponse, ModelError> {
        (**self).generate(request).await
    }
}
