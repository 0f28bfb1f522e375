//! AI Provider Adapters.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Gemini models via the Generative Language API
//! - `MockAIProvider` - Configurable mock for testing
//! - `AiContentGenerator` - Section prompts and fallbacks over any provider

mod content_generator;
mod gemini_provider;
mod mock_provider;

pub use content_generator::{
    section_prompt, AiContentGenerator, EMPTY_MESSAGE, FAILURE_MESSAGE, UNAVAILABLE_MESSAGE,
};
pub use gemini_provider::{GeminiConfig, GeminiProvider, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
