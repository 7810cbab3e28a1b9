//! Gemini generateContent client.
//!
//! ### Specification
//!
//! - **Endpoint**: `{base_url}/models/{model}:generateContent`
//! - **Authentication**: `x-goog-api-key` header. A missing key is sent as-is
//!   and rejected by the API.
//! - **Grounding**: the `google_search` tool is attached when requested.
//! - **Timeouts**: none client-side unless configured.
//! - **Retries**: none.

pub mod request;

pub use request::{GenerateContentRequest, GoogleSearch, Tool};

use ceylon_core::{AppConfig, ModelResponse};
use reqwest::{StatusCode, header};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::model::{ContentModel, ModelError, ModelRequest};

/// Gemini client configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Client-side timeout; `None` leaves it to the remote side.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

/// Defaults come from [`AppConfig::default`].
impl Default for GeminiConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl From<&AppConfig> for GeminiConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            api_key: config.api_key_or_empty().to_string(),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
        }
    }
}

/// HTTP client for the generateContent endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, ModelError> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| ModelError::Network(Arc::new(e)))?;

        if config.api_key.is_empty() {
            tracing::warn!("Gemini client created without an API key");
        }

        Ok(Self { http, config })
    }

    /// Create a client from the application configuration.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ModelError> {
        Self::new(GeminiConfig::from(config))
    }

    /// URL of the generateContent endpoint for the configured model.
    pub fn endpoint(&self) -> String {
        let model = self.config.model.trim_start_matches("models/");
        format!("{}/models/{}:generateContent", self.config.base_url.trim_end_matches('/'), model)
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

#[async_trait::async_trait]
impl ContentModel for GeminiClient {
    async fn generate(&self, request: &ModelRequest) -> Result<ModelResponse, ModelError> {
        let start = Instant::now();
        let url = self.endpoint();
        let body = GenerateContentRequest::from(request);

        tracing::debug!(
            model = %self.config.model,
            prompt_len = request.prompt.len(),
            grounded = request.search_grounding,
            "calling generateContent"
        );

        let http_response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header(header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = http_response.status();
        let bytes = http_response.bytes().await?;

        tracing::debug!("generateContent response status: {} ({} bytes)", status, bytes.len());

        if !status.is_success() {
            return Err(status_error(status, &bytes));
        }

        let response: ModelResponse = serde_json::from_slice(&bytes).map_err(|e| ModelError::Parse(e.to_string()))?;

        if response.candidates.is_empty()
            && let Some(reason) = response.block_reason()
        {
            return Err(ModelError::Blocked(reason.to_string()));
        }

        tracing::debug!(
            "generateContent completed in {:?}, {} candidates",
            start.elapsed(),
            response.candidates.len()
        );

        Ok(response)
    }
}

/// Map a non-success status and its body to a [`ModelError`].
fn status_error(status: StatusCode, body: &[u8]) -> ModelError {
    let message = request::error_message(body);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ModelError::Auth(message),
        StatusCode::TOO_MANY_REQUESTS => ModelError::RateLimited,
        StatusCode::BAD_REQUEST if message.contains("API key") => ModelError::Auth(message),
        _ => ModelError::Http { status: status.as_u16(), message },
    }
}
