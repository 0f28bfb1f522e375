//! AI-backed implementation of the ContentGenerator port.
//!
//! Owns the section prompts and the fixed fallback messages. Provider errors
//! are logged here and never reach the editor.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::document::ContentSection;
use crate::ports::{AIProvider, CompletionRequest, ContentGenerator, MessageRole};

/// Returned when no API key is configured.
pub const UNAVAILABLE_MESSAGE: &str = "AI content generation is unavailable without an API key.";

/// Returned when the provider answers with empty text.
pub const EMPTY_MESSAGE: &str = "No content was generated.";

/// Returned when the provider call fails.
pub const FAILURE_MESSAGE: &str = "An error occurred while generating content. Please try again.";

/// Builds the section-specific prompt for a topic.
pub fn section_prompt(topic: &str, section: ContentSection) -> String {
    match section {
        ContentSection::Outcomes => format!(
            "Write 3-4 clear, measurable learning outcomes for a school lesson about \"{}\". Format them as a bulleted list.",
            topic
        ),
        ContentSection::Objectives => format!(
            "Write specific learning objectives for students studying \"{}\". Focus on Bloom's taxonomy.",
            topic
        ),
        ContentSection::Activities => format!(
            "Suggest a step-by-step classroom activity plan for teaching \"{}\" to secondary students. Include timings.",
            topic
        ),
        ContentSection::Assessments => format!(
            "List assessment instruments (formative and summative) for a lesson about \"{}\".",
            topic
        ),
    }
}

/// Content generator backed by an optional AI provider.
///
/// With no provider (no API key) every request returns [`UNAVAILABLE_MESSAGE`]
/// without touching the network.
#[derive(Clone)]
pub struct AiContentGenerator {
    provider: Option<Arc<dyn AIProvider>>,
}

impl AiContentGenerator {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// A generator with no credential configured.
    pub fn unavailable() -> Self {
        Self { provider: None }
    }
}

#[async_trait]
impl ContentGenerator for AiContentGenerator {
    async fn generate(&self, topic: &str, section: ContentSection) -> String {
        let Some(provider) = self.provider.as_ref() else {
            tracing::warn!("No API key configured for content generation");
            return UNAVAILABLE_MESSAGE.to_string();
        };

        let request =
            CompletionRequest::new().with_message(MessageRole::User, section_prompt(topic, section));

        match provider.complete(request).await {
            Ok(response) if response.content.trim().is_empty() => {
                tracing::debug!(%section, "Provider returned empty content");
                EMPTY_MESSAGE.to_string()
            }
            Ok(response) => {
                tracing::debug!(
                    %section,
                    model = %response.model,
                    tokens = response.usage.total_tokens,
                    "Generated section content"
                );
                response.content
            }
            Err(err) => {
                tracing::error!(%section, error = %err, "Content generation failed");
                FAILURE_MESSAGE.to_string()
            }
        }
    }
}
