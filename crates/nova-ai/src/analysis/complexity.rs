//! Word-count and vocabulary based complexity scoring.

use crate::text::TextView;

use super::Complexity;

const TECHNICAL_TERMS: &[&str] = &[
    "algorithm", "algorithms", "architecture", "implementation", "implement", "optimization",
    "optimize", "framework", "database", "neural", "recursion", "concurrency", "asynchronous",
    "async", "protocol", "encryption", "compiler", "infrastructure", "scalability", "latency",
    "api", "kubernetes", "microservice", "microservices", "distributed", "complexity",
    "data structure", "machine learning",
];

const NUANCE_INDICATORS: &[&str] = &[
    "trade off", "tradeoff", "tradeoffs", "trade offs", "pros and cons", "nuance", "nuanced",
    "on the other hand", "it depends", "implications", "in what context", "advantages and disadvantages",
    "ethical", "under what circumstances", "long term",
];

pub(super) fn score(view: &TextView, topic_count: usize) -> Complexity {
    let words = view.word_count();
    let technical = view.mentions_any(TECHNICAL_TERMS);
    let nuanced = view.mentions_any(NUANCE_INDICATORS);
    let multi_topic = topic_count > 1;

    if (words > 30 && (multi_topic || technical)) || (technical && nuanced) {
        Complexity::High
    } else if (words > 15 && (multi_topic || technical)) || nuanced {
        Complexity::Medium
    } else {
        Complexity::Low
    }
}
