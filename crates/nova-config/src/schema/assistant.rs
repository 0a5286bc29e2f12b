//! Assistant persona and canned-answer configuration.

use serde::{Deserialize, Serialize};

/// Persona and local-answer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Name the assistant introduces itself with.
    pub name: String,
    /// Who built the assistant; embedded in the persona message.
    pub creator: String,
    /// Sentence returned verbatim for creator-identity questions.
    pub creator_reply: String,
    /// Reserved input that short-circuits to `literal_reply`.
    pub literal_token: String,
    pub literal_reply: String,
    /// Add headings and alternative-approach callouts to unstructured answers.
    pub enhance_responses: bool,
    pub show_thinking: bool,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: "Nova".into(),
            creator: "the Nova team".into(),
            creator_reply: "I was created by the Nova team, who built me to help you learn, create, and solve problems.".into(),
            literal_token: "url".into(),
            literal_reply: "wss://voice.nova-assistant.dev/v1/connect".into(),
            enhance_responses: true,
            show_thinking: true,
        }
    }
}
