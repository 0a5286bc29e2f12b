//! Persona prompt composition.
//!
//! Builds the leading persona message from the query analysis and assembles
//! `[persona, ...history, user]` for the model.

use crate::analysis::{Complexity, Intent, QueryAnalysis};
use crate::Message;

/// Identity the assistant presents in every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    pub name: String,
    pub creator: String,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            name: "Nova".into(),
            creator: "the Nova team".into(),
        }
    }
}

impl Persona {
    pub fn new(name: impl Into<String>, creator: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            creator: creator.into(),
        }
    }
}

const CODE_QUALITY_BLOCK: &str = "\
Software guidance:
- Prefer clear, idiomatic, maintainable code over clever code.
- Mention error handling, edge cases, and security concerns that apply.
- Put code in fenced blocks tagged with the language and keep examples runnable.
- Point out performance or scalability trade-offs when they matter.";

const AI_BLOCK: &str = "\
AI topics:
- Explain concepts in accessible language before adding technical depth.
- Be honest about current limitations and uncertainty in the field.
- Address ethical considerations such as bias, privacy, and misuse where relevant.";

const COMPARISON_BLOCK: &str = "\
Comparison structure:
- Start with a one-line verdict, then compare the options criterion by criterion.
- Use a table when comparing more than two attributes.
- Close with which option fits which situation.";

fn complexity_guidance(complexity: Complexity) -> &'static str {
    match complexity {
        Complexity::Low => "Keep the answer brief and direct.",
        Complexity::Medium => "Give a moderately detailed answer with an example where useful.",
        Complexity::High => {
            "Give a thorough, well-organized answer that addresses nuance, assumptions, and trade-offs."
        }
    }
}

/// Persona and critical-thinking directives for one turn.
pub fn persona_instructions(persona: &Persona, analysis: &QueryAnalysis) -> String {
    let mut text = format!(
        "You are {name}, a friendly and knowledgeable AI assistant created by {creator}. \
Answer as {name}; never claim to be a different assistant.\n\n\
Critical thinking approach:\n\
- {approach}\n\
- Query complexity is {complexity}. {guidance}\n\
- Question assumptions, consider more than one perspective, and separate facts from opinions.\n\
- If the request is ambiguous, state the interpretation you are answering.",
        name = persona.name,
        creator = persona.creator,
        approach = analysis.response_approach,
        complexity = analysis.complexity,
        guidance = complexity_guidance(analysis.complexity),
    );

    if analysis.domains.iter().any(|d| d.is_software()) {
        text.push_str("\n\n");
        text.push_str(CODE_QUALITY_BLOCK);
    }
    if analysis.domains.iter().any(|d| d.is_ai()) {
        text.push_str("\n\n");
        text.push_str(AI_BLOCK);
    }
    if analysis.intent == Intent::Comparison {
        text.push_str("\n\n");
        text.push_str(COMPARISON_BLOCK);
    }
    if analysis.has_context {
        text.push_str("\n\nUse the earlier conversation for context when it is relevant.");
    }

    text
}

/// Ordered request contents: persona, prior history, new user turn.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationPayload {
    contents: Vec<Message>,
}

impl ConversationPayload {
    pub fn contents(&self) -> &[Message] {
        &self.contents
    }

    pub fn into_contents(self) -> Vec<Message> {
        self.contents
    }

    pub fn persona_message(&self) -> &Message {
        &self.contents[0]
    }

    pub fn history(&self) -> &[Message] {
        &self.contents[1..self.contents.len() - 1]
    }

    pub fn user_message(&self) -> &Message {
        &self.contents[self.contents.len() - 1]
    }
}

pub fn compose_conversation(
    persona: &Persona,
    history: &[Message],
    user_message: &str,
    analysis: &QueryAnalysis,
) -> ConversationPayload {
    let mut contents = Vec::with_capacity(history.len() + 2);
    contents.push(Message::user(persona_instructions(persona, analysis)));
    contents.extend(history.iter().cloned());
    contents.push(Message::user(user_message));
    ConversationPayload { contents }
}
