//! Light post-processing of model answers.
//!
//! Answers that already carry Markdown structure are returned untouched.
//! Otherwise a heading is added for non-trivial queries, and technical or
//! problem-solving answers get a short closing note.

use crate::analysis::{Complexity, Domain, Intent, QueryAnalysis};

const ALTERNATIVES_NOTE: &str = "\
> **Alternative approaches:** if this doesn't fit your situation, share more \
details (versions, constraints, or the exact output you see) and I can suggest \
other options.";

fn is_bullet(line: &str) -> bool {
    let line = line.trim_start();
    line.starts_with("- ")
        || line.starts_with("* ")
        || line
            .split_once(". ")
            .is_some_and(|(n, _)| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}

/// True when the answer already uses headings, lists, or code fences.
pub fn has_structure(answer: &str) -> bool {
    if answer.contains("```") {
        return true;
    }
    let mut bullets = 0;
    for line in answer.lines() {
        if line.trim_start().starts_with('#') {
            return true;
        }
        if is_bullet(line) {
            bullets += 1;
        }
    }
    bullets >= 3
}

fn heading(analysis: &QueryAnalysis) -> Option<String> {
    let topics: Vec<&str> = analysis
        .topics
        .iter()
        .map(String::as_str)
        .filter(|t| *t != "general query")
        .collect();
    if topics.is_empty() {
        return None;
    }
    Some(format!("## {}", topics.join(" & ")))
}

fn wants_alternatives(analysis: &QueryAnalysis) -> bool {
    matches!(analysis.intent, Intent::ProblemSolving | Intent::Comparison)
        || analysis.domains.iter().any(Domain::is_technical)
}

pub fn enhance_response(answer: &str, analysis: &QueryAnalysis) -> String {
    if answer.trim().is_empty()
        || analysis.complexity == Complexity::Low
        || has_structure(answer)
    {
        return answer.to_string();
    }

    let mut out = String::with_capacity(answer.len() + 160);
    if let Some(h) = heading(analysis) {
        out.push_str(&h);
        out.push_str("\n\n");
    }
    out.push_str(answer.trim_end());
    if wants_alternatives(analysis) {
        out.push_str("\n\n");
        out.push_str(ALTERNATIVES_NOTE);
    }
    out
}
