//! HTTP client for the Gemini REST API.

use crate::dto::{GenerateContentRequest, GenerateContentResponse};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use vetrina_core::GenerationTask;
use vetrina_error::{GeminiError, GeminiErrorKind, VetrinaResult};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for the Gemini client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Explicit API key; falls back to the `GEMINI_API_KEY` environment
    /// variable when absent
    #[serde(default)]
    pub api_key: Option<String>,
    /// API base URL
    #[serde(default = "GeminiConfig::default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds
    #[serde(default = "GeminiConfig::default_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Seconds between polls of a long-running media operation
    #[serde(default = "GeminiConfig::default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Maximum polls before a media operation is declared timed out
    #[serde(default = "GeminiConfig::default_poll_max_attempts")]
    pub poll_max_attempts: u32,
}

impl GeminiConfig {
    fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    fn default_timeout_secs() -> u64 {
        60
    }

    fn default_poll_interval_secs() -> u64 {
        10
    }

    fn default_poll_max_attempts() -> u32 {
        30
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: Self::default_base_url(),
            request_timeout_secs: Self::default_timeout_secs(),
            poll_interval_secs: Self::default_poll_interval_secs(),
            poll_max_attempts: Self::default_poll_max_attempts(),
        }
    }
}

/// Client for the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    poll_interval: Duration,
    poll_max_attempts: u32,
}

impl GeminiClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::MissingApiKey`] when no key is configured
    /// and `GEMINI_API_KEY` is unset, or [`GeminiErrorKind::ClientCreation`]
    /// when the HTTP client cannot be built.
    #[instrument(skip(config))]
    pub fn from_config(config: &GeminiConfig) -> VetrinaResult<Self> {
        let api_key = match &config.api_key {
            Some(key) if !key.is_empty() => key.clone(),
            _ => dotenvy::var("GEMINI_API_KEY")
                .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?,
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        debug!(base_url = %config.base_url, "Created Gemini client");

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.clone(),
            poll_interval: Duration::from_secs(config.poll_interval_secs),
            poll_max_attempts: config.poll_max_attempts,
        })
    }

    /// Create a client with defaults, taking the key from the environment.
    pub fn from_env() -> VetrinaResult<Self> {
        Self::from_config(&GeminiConfig::default())
    }

    /// The Gemini model id used for a task.
    ///
    /// Light tasks run on the flash tier; content and idea expansion need the
    /// pro tier; media tasks use the image/video models.
    pub fn model_for_task(task: GenerationTask) -> &'static str {
        match task {
            GenerationTask::Metadata
            | GenerationTask::PostTimes
            | GenerationTask::Comments
            | GenerationTask::Analytics => "gemini-2.5-flash",
            GenerationTask::Content | GenerationTask::IdeaExpansion => "gemini-2.5-pro",
            GenerationTask::ImageEdit => "gemini-2.5-flash-image",
            GenerationTask::MediaGeneration => "veo-3.0-generate-001",
        }
    }

    pub(crate) fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub(crate) fn poll_max_attempts(&self) -> u32 {
        self.poll_max_attempts
    }

    /// POST a `generateContent` request for a model, retrying retryable HTTP
    /// failures with the backoff parameters classified by the error kind.
    #[instrument(skip(self, request), fields(model = model))]
    pub(crate) async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> VetrinaResult<GenerateContentResponse> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );
        let value = self.post_with_retry(&url, request).await?;
        serde_json::from_value(value).map_err(|e| {
            error!(model, error = %e, "Response did not match generateContent shape");
            GeminiError::new(GeminiErrorKind::SchemaViolation(e.to_string())).into()
        })
    }

    /// POST a long-running `predictLongRunning` request, returning the
    /// operation name to poll.
    #[instrument(skip(self, body), fields(model = model))]
    pub(crate) async fn start_operation(
        &self,
        model: &str,
        body: &serde_json::Value,
    ) -> VetrinaResult<String> {
        let url = format!(
            "{}/models/{}:predictLongRunning?key={}",
            self.base_url, model, self.api_key
        );
        let value = self.post_with_retry(&url, body).await?;
        value
            .get("name")
            .and_then(|name| name.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                GeminiError::new(GeminiErrorKind::SchemaViolation(
                    "operation response carries no name".to_string(),
                ))
                .into()
            })
    }

    /// GET the current state of a long-running operation.
    pub(crate) async fn fetch_operation(&self, name: &str) -> VetrinaResult<serde_json::Value> {
        let url = format!("{}/{}?key={}", self.base_url, name, self.api_key);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;
        Ok(Self::read_json(response).await?)
    }

    async fn post_with_retry<B: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> VetrinaResult<serde_json::Value> {
        let mut attempt = 0usize;
        loop {
            match self.post_once(url, body).await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_retryable() => {
                    let (initial_ms, max_retries, max_delay_secs) =
                        err.kind.retry_strategy_params();
                    if attempt >= max_retries {
                        return Err(err.into());
                    }
                    let backoff_ms =
                        (initial_ms << attempt.min(10)).min(max_delay_secs.saturating_mul(1000));
                    warn!(
                        attempt = attempt + 1,
                        backoff_ms,
                        error = %err,
                        "Retrying Gemini request"
                    );
                    tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    async fn post_once<B: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<serde_json::Value, GeminiError> {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
            })?;

        Self::read_json(response).await
    }

    async fn read_json(response: reqwest::Response) -> Result<serde_json::Value, GeminiError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, message = %message, "Gemini API error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }
        response
            .json()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))
    }
}
