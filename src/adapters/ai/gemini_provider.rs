//! Gemini Provider - Implementation of AIProvider for Google's Generative Language API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-2.0-flash")
//!     .with_base_url("https://generativelanguage.googleapis.com/v1beta");
//!
//! let provider = GeminiProvider::new(config)?;
//! ```
//!
//! Requests are sent once. Failures surface as `AIError` and are turned into
//! fallback text by the content generator.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, MessageRole,
    ProviderInfo, TokenUsage,
};

/// Default model for section drafting.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Default API root.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gemini-2.0-flash").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new Gemini provider with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the generateContent endpoint URL.
    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Converts our request to Gemini's format.
    fn to_gemini_request(request: &CompletionRequest) -> GeminiRequest {
        let contents = request
            .messages
            .iter()
            .map(|msg| GeminiContent {
                role: Some(
                    match msg.role {
                        MessageRole::User => "user",
                    }
                    .to_string(),
                ),
                parts: vec![GeminiPart {
                    text: msg.content.clone(),
                }],
            })
            .collect();

        GeminiRequest { contents }
    }

    /// Sends a request.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        self.client
            .post(self.generate_url())
            .header("x-goog-api-key", self.config.api_key())
            .header("Content-Type", "application/json")
            .json(&Self::to_gemini_request(request))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    /// Maps non-success statuses to errors.
    async fn handle_response_status(response: Response) -> Result<Response, AIError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(AIError::AuthenticationFailed),
            429 => Err(AIError::rate_limited(30)),
            400 => Err(AIError::InvalidRequest(error_body)),
            500..=599 => Err(AIError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(AIError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    /// Converts a parsed Gemini response into ours.
    ///
    /// A response without candidates (e.g. a blocked prompt) yields empty content.
    fn to_completion(response: GeminiResponse, fallback_model: &str) -> CompletionResponse {
        let candidate = response.candidates.into_iter().next();

        let finish_reason = match candidate.as_ref().and_then(|c| c.finish_reason.as_deref()) {
            Some("MAX_TOKENS") => FinishReason::Length,
            Some("SAFETY") | Some("PROHIBITED_CONTENT") | Some("BLOCKLIST") => {
                FinishReason::ContentFilter
            }
            Some("STOP") | None => {
                if response.prompt_feedback.and_then(|f| f.block_reason).is_some() {
                    FinishReason::ContentFilter
                } else {
                    FinishReason::Stop
                }
            }
            Some(_) => FinishReason::Stop,
        };

        let content = candidate
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect::<String>())
            .unwrap_or_default();

        let usage = response
            .usage_metadata
            .map(|u| TokenUsage::new(u.prompt_token_count, u.candidates_token_count))
            .unwrap_or_default();

        CompletionResponse {
            content,
            usage,
            model: response
                .model_version
                .unwrap_or_else(|| fallback_model.to_string()),
            finish_reason,
        }
    }
}

#[async_trait]
impl AIProvider for GeminiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let response = self.send_request(&request).await?;
        let response = Self::handle_response_status(response).await?;

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

        Ok(Self::to_completion(gemini_response, &self.config.model))
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("gemini", &self.config.model)
    }
}

// ----- Gemini API Types -----

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    prompt_feedback: Option<PromptFeedback>,
    usage_metadata: Option<UsageMetadata>,
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> GeminiProvider {
        GeminiProvider::new(GeminiConfig::new("test-key")).unwrap()
    }

    fn parse(json: &str) -> CompletionResponse {
        let response: GeminiResponse = serde_json::from_str(json).unwrap();
        GeminiProvider::to_completion(response, DEFAULT_GEMINI_MODEL)
    }

    #[test]
    fn config_builder_works() {
        let config = GeminiConfig::new("test-key")
            .with_model("gemini-1.5-pro")
            .with_base_url("https://custom.api.com/v1")
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.base_url, "https://custom.api.com/v1");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.api_key(), "test-key");
    }

    #[test]
    fn config_debug_does_not_leak_key() {
        let config = GeminiConfig::new("super-secret");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }

    #[test]
    fn generate_url_embeds_model() {
        let provider = GeminiProvider::new(
            GeminiConfig::new("k").with_base_url("https://example.test/v1beta/"),
        )
        .unwrap();
        assert_eq!(
            provider.generate_url(),
            "https://example.test/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn request_serializes_in_gemini_shape() {
        let request = CompletionRequest::new()
            .with_message(MessageRole::User, "Write outcomes");
        let json = serde_json::to_value(GeminiProvider::to_gemini_request(&request)).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Write outcomes");
        assert_eq!(json.as_object().unwrap().len(), 1);
    }

    #[test]
    fn response_text_parts_are_joined() {
        let completion = parse(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"- one\n"},{"text":"- two"}]},"finishReason":"STOP"}],
                "usageMetadata":{"promptTokenCount":12,"candidatesTokenCount":8,"totalTokenCount":20},
                "modelVersion":"gemini-2.0-flash-001"}"#,
        );
        assert_eq!(completion.content, "- one\n- two");
        assert_eq!(completion.finish_reason, FinishReason::Stop);
        assert_eq!(completion.usage.total_tokens, 20);
        assert_eq!(completion.model, "gemini-2.0-flash-001");
    }

    #[test]
    fn blocked_prompt_yields_empty_content() {
        let completion = parse(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#);
        assert_eq!(completion.content, "");
        assert_eq!(completion.finish_reason, FinishReason::ContentFilter);
        assert_eq!(completion.model, DEFAULT_GEMINI_MODEL);
    }

    #[test]
    fn provider_info_reports_gemini() {
        let info = provider().provider_info();
        assert_eq!(info.name, "gemini");
        assert_eq!(info.model, DEFAULT_GEMINI_MODEL);
    }
}
