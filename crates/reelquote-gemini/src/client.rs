//! HTTP client for the `generateContent` endpoint.

use std::error::Error as StdError;
use std::time::Duration;

use async_trait::async_trait;
use reelquote_estimate::{EstimationService, GenerationRequest};
use reelquote_types::ServiceError;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::url::{BASE_URL, DEFAULT_MODEL, generate_content_url};
use crate::wire::{GenerateContentRequest, GenerateContentResponse, api_error_message};

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Configuration for the Gemini client.
#[derive(Clone)]
pub struct ClientConfig {
    /// API key sent with every request.
    pub api_key: String,
    /// Model identifier (e.g., "gemini-2.5-flash").
    pub model: String,
    /// API base URL, without the `/models/...` suffix.
    pub base_url: String,
    /// Overall request timeout. `None` leaves the transport default (no limit).
    pub timeout: Option<Duration>,
    /// Sampling temperature. `None` uses the model default.
    pub temperature: Option<f32>,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: BASE_URL.to_string(),
            timeout: None,
            temperature: None,
            user_agent: format!("reelquote/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration with the given API key and defaults elsewhere.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Sets the model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the sampling temperature.
    #[must_use]
    pub const fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let api_key = if self.api_key.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("ClientConfig")
            .field("api_key", &api_key)
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("temperature", &self.temperature)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Errors that can occur when calling Gemini.
#[derive(Error, Debug)]
pub enum GeminiError {
    /// No API key was configured.
    #[error("Missing API key")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("HTTP error: {}", error_chain(.0))]
    Http(#[from] reqwest::Error),

    /// The API returned an error status.
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the error envelope, or the raw body.
        message: String,
    },

    /// The response body is not a `generateContent` response.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The prompt was blocked.
    #[error("Prompt blocked: {0}")]
    Blocked(String),

    /// The response carried no generated text.
    #[error("No content in response")]
    NoContent,
}

impl From<GeminiError> for ServiceError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::MissingApiKey => Self::Unavailable("missing API key".to_string()),
            GeminiError::Http(e) => Self::Unavailable(error_chain(&e)),
            GeminiError::Api { status, message } => Self::Rejected { status, message },
            GeminiError::Decode(e) => Self::Malformed(e),
            GeminiError::Blocked(reason) => Self::Blocked { reason },
            GeminiError::NoContent => Self::EmptyResponse,
        }
    }
}

/// Renders an error with its source chain.
fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Gemini `generateContent` client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: ClientConfig,
}

impl GeminiClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or the HTTP client cannot be
    /// created.
    pub fn new(config: ClientConfig) -> Result<Self, GeminiError> {
        if config.api_key.trim().is_empty() {
            return Err(GeminiError::MissingApiKey);
        }

        let mut builder = Client::builder()
            // Connection timeout only; the request itself is unbounded unless configured
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends one `generateContent` call and returns the generated text.
    ///
    /// Makes exactly one attempt.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with an error
    /// status, the prompt is blocked, or no text was generated.
    pub async fn generate_content(
        &self,
        request: &GenerationRequest,
    ) -> Result<String, GeminiError> {
        let url = generate_content_url(&self.config.base_url, &self.config.model);
        let body = GenerateContentRequest::new(request, self.config.temperature);

        debug!(%url, "sending generateContent request");
        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)?;
        if let Some(usage) = &parsed.usage_metadata {
            debug!(
                model_version = parsed.model_version.as_deref().unwrap_or("unknown"),
                prompt_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                total_tokens = usage.total_token_count,
                "generateContent usage"
            );
        }

        if let Some(reason) = parsed.block_reason() {
            return Err(GeminiError::Blocked(reason.to_string()));
        }

        parsed.text().ok_or_else(|| {
            warn!(
                finish_reason = parsed.finish_reason().unwrap_or("none"),
                "response carried no text"
            );
            GeminiError::NoContent
        })
    }
}

#[async_trait]
impl EstimationService for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ServiceError> {
        Ok(self.generate_content(request).await?)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
