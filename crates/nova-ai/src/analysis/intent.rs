//! Ordered intent rules. The first rule that matches wins.

use crate::text::TextView;

use super::Intent;

const QUESTION_WORDS: &[&str] = &[
    "what", "why", "how", "when", "where", "who", "which", "whats", "whos", "whose",
];

const INFORMATION_PHRASES: &[&str] = &["tell me about", "explain", "define", "definition of"];

const GENERATION_TERMS: &[&str] = &[
    "generate", "create", "make", "build", "write", "draw", "design", "compose", "produce",
    "draft",
];

const PROBLEM_TERMS: &[&str] = &[
    "fix", "debug", "solve", "error", "errors", "bug", "bugs", "troubleshoot", "broken",
    "not working", "crash", "crashes", "exception",
];

const COMPARISON_TERMS: &[&str] = &[
    "compare", "comparison", "vs", "versus", "difference between", "differences between",
    "better than",
];

const SUMMARY_TERMS: &[&str] = &[
    "summarize", "summarise", "summary", "tldr", "tl dr", "recap", "in short", "key points",
];

const OPINION_TERMS: &[&str] = &[
    "your opinion", "do you think", "should i", "would you recommend", "in your view",
    "do you prefer", "your favorite", "your favourite",
];

fn is_information_seeking(view: &TextView) -> bool {
    view.has_question_mark()
        || QUESTION_WORDS.iter().any(|w| view.starts_with_word(w))
        || view.mentions_any(INFORMATION_PHRASES)
}

fn is_content_generation(view: &TextView) -> bool {
    view.mentions_any(GENERATION_TERMS)
}

fn is_problem_solving(view: &TextView) -> bool {
    view.mentions_any(PROBLEM_TERMS)
}

fn is_comparison(view: &TextView) -> bool {
    view.mentions_any(COMPARISON_TERMS)
}

fn is_summarization(view: &TextView) -> bool {
    view.mentions_any(SUMMARY_TERMS)
}

fn is_opinion_seeking(view: &TextView) -> bool {
    view.mentions_any(OPINION_TERMS)
}

const RULES: &[(fn(&TextView) -> bool, Intent)] = &[
    (is_information_seeking, Intent::InformationSeeking),
    (is_content_generation, Intent::ContentGeneration),
    (is_problem_solving, Intent::ProblemSolving),
    (is_comparison, Intent::Comparison),
    (is_summarization, Intent::Summarization),
    (is_opinion_seeking, Intent::OpinionSeeking),
];

pub(super) fn detect(view: &TextView) -> Intent {
    RULES
        .iter()
        .find(|(matches, _)| matches(view))
        .map(|(_, intent)| *intent)
        .unwrap_or(Intent::GeneralRequest)
}
