//! Turn orchestration: interception, analysis, prompt composition, model
//! request, and optional answer enhancement.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::analysis::{analyze, QueryAnalysis};
use crate::backend::{GenerativeBackend, ModelKind};
use crate::enhancer::enhance_response;
use crate::gemini::Content;
use crate::image::{self, ImageGeneration};
use crate::intercept::{Interceptor, SpecialIntent};
use crate::prompt::{compose_conversation, Persona};
use crate::quiz::{self, QuizQuestion};
use crate::thinking::{generate_thinking_process, ThinkingStep};
use crate::vision::{self, ImageInput};
use crate::{AiError, Message};

pub const EMPTY_RESPONSE_FALLBACK: &str =
    "I'm sorry, I couldn't generate a response. Please try again.";

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    /// Answered locally without a model request.
    Intercepted,
    Model,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub assistant_message: Message,
    pub response_text: String,
    pub source: ReplySource,
    /// Present for model replies only.
    pub analysis: Option<QueryAnalysis>,
}

impl Reply {
    fn new(text: String, source: ReplySource, analysis: Option<QueryAnalysis>) -> Self {
        Self {
            assistant_message: Message::assistant(text.clone()),
            response_text: text,
            source,
            analysis,
        }
    }
}

/// Result of a full UI-facing turn.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    Text(Reply),
    Image {
        prompt: String,
        generation: ImageGeneration,
    },
}

/// Conversational front door over a `GenerativeBackend`.
#[derive(Clone)]
pub struct Assistant {
    backend: Arc<dyn GenerativeBackend>,
    persona: Persona,
    interceptor: Interceptor,
    enhance_responses: bool,
}

impl std::fmt::Debug for Assistant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assistant")
            .field("persona", &self.persona)
            .field("interceptor", &self.interceptor)
            .field("enhance_responses", &self.enhance_responses)
            .finish_non_exhaustive()
    }
}

impl Assistant {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self {
            backend,
            persona: Persona::default(),
            interceptor: Interceptor::default(),
            enhance_responses: false,
        }
    }

    pub fn with_persona(mut self, persona: Persona) -> Self {
        self.persona = persona;
        self
    }

    pub fn with_interceptor(mut self, interceptor: Interceptor) -> Self {
        self.interceptor = interceptor;
        self
    }

    pub fn with_enhancement(mut self, enabled: bool) -> Self {
        self.enhance_responses = enabled;
        self
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Answer one user turn with text.
    ///
    /// Canned intents return without touching the backend. Model failures
    /// are returned as-is and never retried.
    pub async fn send_message(
        &self,
        history: &[Message],
        user_message: &str,
    ) -> Result<Reply, AiError> {
        let intent = self.interceptor.intercept(user_message);
        if let Some(text) = self.interceptor.canned_reply(&intent) {
            info!(?intent, "answered locally");
            return Ok(Reply::new(text, ReplySource::Intercepted, None));
        }

        let analysis = analyze(user_message, history);
        debug!(
            intent = %analysis.intent,
            complexity = %analysis.complexity,
            topics = ?analysis.topics,
            "query analyzed"
        );

        let payload = compose_conversation(&self.persona, history, user_message, &analysis);
        let contents: Vec<Content> = payload.contents().iter().map(Content::from).collect();

        let response = self
            .backend
            .generate(ModelKind::Text, contents)
            .await
            .inspect_err(|e| warn!(error = %e, "model request failed"))?;

        let text = response
            .first_text()
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| EMPTY_RESPONSE_FALLBACK.to_string());

        let text = if self.enhance_responses {
            enhance_response(&text, &analysis)
        } else {
            text
        };

        Ok(Reply::new(text, ReplySource::Model, Some(analysis)))
    }

    /// A complete turn: image requests go to image generation, everything
    /// else through `send_message`.
    pub async fn respond(
        &self,
        history: &[Message],
        user_message: &str,
    ) -> Result<TurnOutcome, AiError> {
        if let SpecialIntent::ImageRequest(prompt) = self.interceptor.intercept(user_message) {
            let generation = self.generate_image(&prompt).await;
            return Ok(TurnOutcome::Image { prompt, generation });
        }
        self.send_message(history, user_message)
            .await
            .map(TurnOutcome::Text)
    }

    pub fn thinking_process(&self, history: &[Message], prompt: &str) -> Vec<ThinkingStep> {
        let analysis = analyze(prompt, history);
        generate_thinking_process(prompt, &analysis)
    }

    pub async fn generate_image(&self, prompt: &str) -> ImageGeneration {
        image::generate_image(self.backend.as_ref(), prompt).await
    }

    pub async fn generate_code_from_image(&self, image: &ImageInput) -> Result<String, AiError> {
        vision::generate_code_from_image(self.backend.as_ref(), image).await
    }

    pub async fn generate_quiz(
        &self,
        topic: &str,
        count: usize,
        difficulty: &str,
    ) -> Result<Vec<QuizQuestion>, AiError> {
        quiz::generate_quiz(self.backend.as_ref(), topic, count, difficulty).await
    }
}
