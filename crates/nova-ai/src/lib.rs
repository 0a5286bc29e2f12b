//! Conversational core for the Nova assistant.
//!
//! Turns a user utterance into an assistant reply:
//! - Text normalization and heuristic query analysis (no network)
//! - Special-intent interception with canned local answers
//! - Persona prompt composition and Gemini requests
//! - Image generation, image-to-code, and quiz generation
//! - Thinking-trace synthesis and answer post-processing

pub mod analysis;
pub mod assistant;
pub mod backend;
pub mod enhancer;
pub mod gemini;
pub mod image;
pub mod image_request;
pub mod intercept;
pub mod prompt;
pub mod quiz;
pub mod text;
pub mod thinking;
pub mod vision;

pub use analysis::{analyze, Complexity, Domain, Intent, QueryAnalysis};
pub use assistant::{Assistant, Reply, ReplySource, TurnOutcome};
pub use backend::{GenerativeBackend, ModelKind};
pub use gemini::{GeminiClient, GeminiConfig};
pub use image::ImageGeneration;
pub use intercept::{Interceptor, SpecialIntent};
pub use prompt::{compose_conversation, ConversationPayload, Persona};
pub use quiz::QuizQuestion;
pub use text::normalize;
pub use thinking::{generate_thinking_process, ThinkingStep};
pub use vision::{extract_code_blocks, CodeBlock, ImageInput};

/// One chronological turn of conversation history.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub parts: Vec<TextPart>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextPart {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![TextPart { text: text.into() }],
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }

    /// All text parts joined together.
    pub fn text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited: {0}")]
    RateLimited(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("{0}")]
    CodeGeneration(String),
    #[error("{0}")]
    MalformedOutput(String),
}

impl AiError {
    /// True for failures of the model request itself (transport, status,
    /// or an error payload in the body).
    pub fn is_model_request(&self) -> bool {
        matches!(
            self,
            Self::ApiError(_) | Self::RateLimited(_) | Self::NetworkError(_) | Self::ParseError(_)
        )
    }
}

impl From<AiError> for nova_common::NovaError {
    fn from(err: AiError) -> Self {
        nova_common::NovaError::Ai(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_serializes_with_parts() {
        let msg = Message::user("hello");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "role": "user", "parts": [{ "text": "hello" }] })
        );
    }

    #[test]
    fn message_text_joins_parts() {
        let msg = Message {
            role: Role::Assistant,
            parts: vec![
                TextPart { text: "one ".into() },
                TextPart { text: "two".into() },
            ],
        };
        assert_eq!(msg.text(), "one two");
    }

    #[test]
    fn model_request_classification() {
        assert!(AiError::NetworkError("reset".into()).is_model_request());
        assert!(AiError::RateLimited("quota".into()).is_model_request());
        assert!(!AiError::MalformedOutput("no array".into()).is_model_request());
        assert!(!AiError::CodeGeneration("retry".into()).is_model_request());
    }

    #[test]
    fn ai_error_converts_to_nova_error() {
        let err: nova_common::NovaError = AiError::ApiError("bad key".into()).into();
        assert_eq!(err.to_string(), "ai error: API error: bad key");
    }
}
