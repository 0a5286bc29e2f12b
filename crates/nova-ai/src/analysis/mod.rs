//! Heuristic query analysis.
//!
//! Classifies a user utterance into topics, domains, intent, and complexity,
//! and picks a response directive for the persona prompt. Everything here is
//! a pure function of the text and the history length; the thinking trace
//! and the prompt composer both consume the same `QueryAnalysis`.

mod approach;
mod complexity;
mod intent;
mod topics;

#[cfg(test)]
mod tests;

use std::fmt;

use serde::Serialize;

use crate::text::TextView;
use crate::Message;

pub use topics::Family;

/// Classified purpose of an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Intent {
    InformationSeeking,
    ContentGeneration,
    ProblemSolving,
    Comparison,
    Summarization,
    OpinionSeeking,
    GeneralRequest,
}

impl Intent {
    pub fn label(&self) -> &'static str {
        match self {
            Self::InformationSeeking => "information seeking",
            Self::ContentGeneration => "content generation",
            Self::ProblemSolving => "problem solving",
            Self::Comparison => "comparison",
            Self::Summarization => "summarization",
            Self::OpinionSeeking => "opinion seeking",
            Self::GeneralRequest => "general request",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(s)
    }
}

/// Subject-matter category derived from a matched topic family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Domain {
    #[serde(rename = "Software Development")]
    SoftwareDevelopment,
    #[serde(rename = "Software Architecture")]
    SoftwareArchitecture,
    #[serde(rename = "Artificial Intelligence")]
    ArtificialIntelligence,
    #[serde(rename = "AI Ethics")]
    AiEthics,
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Mobile Development")]
    MobileDevelopment,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Data Engineering")]
    DataEngineering,
    #[serde(rename = "Assistant Identity")]
    AssistantIdentity,
    #[serde(rename = "Creative & Visual Arts")]
    CreativeVisual,
    #[serde(rename = "Conceptual Learning")]
    ConceptualLearning,
    #[serde(rename = "Troubleshooting")]
    Troubleshooting,
    #[serde(rename = "General Knowledge")]
    GeneralKnowledge,
    #[serde(rename = "General")]
    General,
}

impl Domain {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SoftwareDevelopment => "Software Development",
            Self::SoftwareArchitecture => "Software Architecture",
            Self::ArtificialIntelligence => "Artificial Intelligence",
            Self::AiEthics => "AI Ethics",
            Self::WebDevelopment => "Web Development",
            Self::MobileDevelopment => "Mobile Development",
            Self::DataScience => "Data Science",
            Self::DataEngineering => "Data Engineering",
            Self::AssistantIdentity => "Assistant Identity",
            Self::CreativeVisual => "Creative & Visual Arts",
            Self::ConceptualLearning => "Conceptual Learning",
            Self::Troubleshooting => "Troubleshooting",
            Self::GeneralKnowledge => "General Knowledge",
            Self::General => "General",
        }
    }

    /// Programming-adjacent domains that get code-quality directives.
    pub fn is_software(&self) -> bool {
        matches!(
            self,
            Self::SoftwareDevelopment
                | Self::SoftwareArchitecture
                | Self::WebDevelopment
                | Self::MobileDevelopment
        )
    }

    pub fn is_technical(&self) -> bool {
        self.is_software() || matches!(self, Self::DataScience | Self::DataEngineering)
    }

    pub fn is_ai(&self) -> bool {
        matches!(self, Self::ArtificialIntelligence | Self::AiEthics)
    }

    pub fn is_data(&self) -> bool {
        matches!(self, Self::DataScience | Self::DataEngineering)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-turn classification of a user utterance. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryAnalysis {
    pub topics: Vec<String>,
    pub domains: Vec<Domain>,
    pub intent: Intent,
    pub complexity: Complexity,
    pub response_approach: String,
    pub has_context: bool,
    /// Topic families that matched, in table order.
    #[serde(skip)]
    pub families: Vec<Family>,
}

impl QueryAnalysis {
    pub fn has_domain(&self, domain: Domain) -> bool {
        self.domains.contains(&domain)
    }

    pub fn has_family(&self, family: Family) -> bool {
        self.families.contains(&family)
    }

    pub fn is_multi_topic(&self) -> bool {
        self.topics.len() > 1
    }
}

/// Analyze one user utterance in the context of the prior history.
pub fn analyze(raw_text: &str, history: &[Message]) -> QueryAnalysis {
    let view = TextView::new(raw_text);

    let extracted = topics::extract(&view);
    let intent = intent::detect(&view);
    let complexity = complexity::score(&view, extracted.topics.len());
    let response_approach = approach::select(&extracted.domains, intent).to_string();

    QueryAnalysis {
        topics: extracted.topics,
        domains: extracted.domains,
        intent,
        complexity,
        response_approach,
        has_context: !history.is_empty(),
        families: extracted.families,
    }
}
