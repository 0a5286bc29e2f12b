//! Gemini API client struct and `GenerativeBackend` implementation.

use async_trait::async_trait;
use tracing::debug;

use crate::backend::{GenerativeBackend, ModelKind};
use crate::AiError;

use super::config::GeminiConfig;
use super::wire::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    /// No overall request timeout is set; only connection setup is bounded.
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| AiError::NetworkError(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub(crate) fn model_for(&self, kind: ModelKind) -> &str {
        match kind {
            ModelKind::Text => &self.config.model,
            ModelKind::Image => &self.config.image_model,
            ModelKind::Vision => &self.config.vision_model,
        }
    }

    /// `{base}/models/{model}:generateContent`; the key travels as `?key=`.
    pub(crate) fn api_url(&self, kind: ModelKind) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url,
            self.model_for(kind)
        )
    }

    pub(crate) fn build_request(
        &self,
        kind: ModelKind,
        contents: Vec<Content>,
    ) -> GenerateContentRequest {
        let generation_config = match kind {
            ModelKind::Text => Some(GenerationConfig {
                temperature: Some(self.config.temperature),
                max_output_tokens: Some(self.config.max_output_tokens),
                ..Default::default()
            }),
            ModelKind::Image => Some(GenerationConfig {
                response_modalities: Some(vec!["Text".to_string(), "Image".to_string()]),
                ..Default::default()
            }),
            ModelKind::Vision => None,
        };
        GenerateContentRequest {
            contents,
            generation_config,
        }
    }
}

/// Upstream message from an error body, or the raw status and text.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<GenerateContentResponse>(body)
        .ok()
        .and_then(|r| r.error)
        .map(|e| e.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP {status}: {body}"))
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn generate(
        &self,
        kind: ModelKind,
        contents: Vec<Content>,
    ) -> Result<GenerateContentResponse, AiError> {
        let body = self.build_request(kind, contents);
        let url = self.api_url(kind);

        debug!(model = %self.model_for(kind), ?kind, "Gemini API request");

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited(error_message(status, &text)));
        }
        if !status.is_success() {
            return Err(AiError::ApiError(error_message(status, &text)));
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&text).map_err(|e| AiError::ParseError(e.to_string()))?;

        if let Some(err) = parsed.error {
            return Err(AiError::ApiError(err.message));
        }

        Ok(parsed)
    }
}
