//! Human-readable reasoning trace for display alongside an answer.
//!
//! Built from the same `QueryAnalysis` the prompt composer uses, so the trace
//! never disagrees with what was actually sent to the model.

use serde::Serialize;

use crate::analysis::{Complexity, Domain, Family, Intent, QueryAnalysis};
use crate::text::TextView;

const RESTATEMENT_LIMIT: usize = 100;
const CONTEXT_MARKERS: &[&str] = &["previous", "before", "earlier"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThinkingStep {
    pub thought: String,
}

impl ThinkingStep {
    fn new(thought: impl Into<String>) -> Self {
        Self {
            thought: thought.into(),
        }
    }
}

fn restatement(prompt: &str) -> String {
    let prompt = prompt.trim();
    if prompt.chars().count() > RESTATEMENT_LIMIT {
        let head: String = prompt.chars().take(RESTATEMENT_LIMIT).collect();
        format!("{head}...")
    } else {
        prompt.to_string()
    }
}

fn join_labels<I: IntoIterator<Item = S>, S: AsRef<str>>(items: I) -> String {
    items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn complexity_line(complexity: Complexity) -> &'static str {
    match complexity {
        Complexity::Low => {
            "Complexity looks low, so a short, direct answer should cover it."
        }
        Complexity::Medium => {
            "Complexity is moderate; a few connected points and an example will help."
        }
        Complexity::High => {
            "Complexity is high; this needs a layered answer that builds from fundamentals to detail."
        }
    }
}

fn technical_approach(analysis: &QueryAnalysis) -> String {
    match analysis.intent {
        Intent::ProblemSolving => "I'll work through the likely root causes first, then give a concrete fix with code and a way to confirm it worked.".into(),
        Intent::Comparison => "I'll compare the technologies side by side on performance, ergonomics, and ecosystem, then say when each one is the better pick.".into(),
        Intent::ContentGeneration => "I'll write clean, working code that follows common conventions and explain the important parts.".into(),
        _ if analysis.has_domain(Domain::SoftwareArchitecture) => "I'll explain the design principles at play, the trade-offs between patterns, and how they fit a real codebase.".into(),
        _ if analysis.complexity == Complexity::High => "I'll start from the core concepts, build up to the advanced details, and anchor each step with an example.".into(),
        _ => "I'll explain the concept clearly and back it with a short, practical example.".into(),
    }
}

fn ai_approach(analysis: &QueryAnalysis) -> String {
    if analysis.has_domain(Domain::AiEthics) {
        "I'll lay out the ethical considerations from several perspectives without pushing a single view.".into()
    } else if analysis.complexity == Complexity::Low {
        "I'll give a plain-language explanation of the AI idea without jargon.".into()
    } else {
        "I'll explain how the AI technique works, where it shines, and where its limits are.".into()
    }
}

fn approach_line(analysis: &QueryAnalysis) -> String {
    let body = if analysis.domains.iter().any(Domain::is_technical) {
        technical_approach(analysis)
    } else if analysis.domains.iter().any(Domain::is_ai) {
        ai_approach(analysis)
    } else if analysis.has_family(Family::ImageGeneration) {
        "I'll focus on the visual details: subject, style, composition, and mood.".into()
    } else if analysis.has_family(Family::Identity) {
        "I'll answer directly about who I am and what I can help with.".into()
    } else {
        match analysis.intent {
            Intent::InformationSeeking => format!(
                "I'll answer the question about {} accurately and with enough context to be useful.",
                analysis.topics.first().map(String::as_str).unwrap_or("this topic")
            ),
            Intent::ContentGeneration => {
                "I'll create the requested content in the style and format asked for.".into()
            }
            Intent::ProblemSolving => {
                "I'll break the problem into steps and suggest practical solutions.".into()
            }
            Intent::Comparison => {
                "I'll weigh the options against each other and highlight the key differences.".into()
            }
            Intent::Summarization => {
                "I'll distill the main points into a short summary.".into()
            }
            Intent::OpinionSeeking => {
                "I'll offer a reasoned perspective and acknowledge other viewpoints.".into()
            }
            Intent::GeneralRequest => "I'll respond helpfully and conversationally.".into(),
        }
    };
    format!("Approach: {body}")
}

fn caveat_line(analysis: &QueryAnalysis) -> Option<&'static str> {
    if analysis.has_domain(Domain::AiEthics) {
        Some("AI ethics questions rarely have one right answer, so I should present the main positions fairly.")
    } else if analysis.has_domain(Domain::Troubleshooting) {
        Some("Without the exact error output or environment details, the fix may need adjusting to the actual setup.")
    } else if analysis.domains.iter().any(Domain::is_data) {
        Some("The right data technique depends on the dataset's size and shape, so I should note my assumptions.")
    } else if analysis.intent == Intent::OpinionSeeking {
        Some("This asks for an opinion, so I should be clear about where perspective differs from fact.")
    } else {
        None
    }
}

/// Ordered trace lines for one prompt and its analysis.
pub fn generate_thinking_process(prompt: &str, analysis: &QueryAnalysis) -> Vec<ThinkingStep> {
    let mut steps = vec![
        ThinkingStep::new(format!("Understanding the query: \"{}\"", restatement(prompt))),
        ThinkingStep::new(format!("Key topics: {}", join_labels(&analysis.topics))),
        ThinkingStep::new(format!(
            "Relevant domains: {}",
            join_labels(analysis.domains.iter().map(Domain::label))
        )),
        ThinkingStep::new(format!("The user's intent looks like {}.", analysis.intent)),
        ThinkingStep::new(complexity_line(analysis.complexity)),
    ];

    if TextView::new(prompt).mentions_any(CONTEXT_MARKERS) {
        steps.push(ThinkingStep::new(
            "The question refers to something said earlier, so I'll keep the conversation context in mind.",
        ));
    }

    steps.push(ThinkingStep::new(approach_line(analysis)));

    if let Some(caveat) = caveat_line(analysis) {
        steps.push(ThinkingStep::new(caveat));
    }

    steps
}
