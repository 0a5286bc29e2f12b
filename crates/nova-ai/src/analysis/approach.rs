//! Response-approach directive selection, highest priority first.

use super::{Domain, Intent};

fn technical(domains: &[Domain], _: Intent) -> bool {
    domains.iter().any(Domain::is_technical)
}

fn ai(domains: &[Domain], _: Intent) -> bool {
    domains.iter().any(Domain::is_ai)
}

fn comparison(_: &[Domain], intent: Intent) -> bool {
    intent == Intent::Comparison
}

fn problem_solving(_: &[Domain], intent: Intent) -> bool {
    intent == Intent::ProblemSolving
}

fn summarization(_: &[Domain], intent: Intent) -> bool {
    intent == Intent::Summarization
}

fn content_generation(_: &[Domain], intent: Intent) -> bool {
    intent == Intent::ContentGeneration
}

const APPROACHES: &[(fn(&[Domain], Intent) -> bool, &str)] = &[
    (
        technical,
        "Provide structured technical guidance: explain the underlying concepts, follow established best practices, and include concise, working examples where they help.",
    ),
    (
        ai,
        "Give a balanced, accessible explanation of the AI concepts involved, covering both capabilities and limitations without hype.",
    ),
    (
        comparison,
        "Deliver a structured comparative analysis: cover similarities, key differences, and the situations where each option fits best.",
    ),
    (
        problem_solving,
        "Guide the user step by step: identify likely causes, propose concrete fixes in order of likelihood, and explain how to verify each one.",
    ),
    (
        summarization,
        "Produce a concise summary that keeps the essential points and drops incidental detail.",
    ),
    (
        content_generation,
        "Create the requested content directly, matching the tone and format the user asked for.",
    ),
];

const DEFAULT_APPROACH: &str =
    "Respond in a helpful, conversational tone with clear, accurate information tailored to the question.";

pub(super) fn select(domains: &[Domain], intent: Intent) -> &'static str {
    APPROACHES
        .iter()
        .find(|(matches, _)| matches(domains, intent))
        .map(|(_, directive)| *directive)
        .unwrap_or(DEFAULT_APPROACH)
}
