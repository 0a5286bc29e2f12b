//! Topic extraction and domain derivation tables.

use serde::Serialize;

use crate::text::TextView;

use super::Domain;

/// Keyword family a topic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Family {
    Programming,
    ArtificialIntelligence,
    Web,
    Mobile,
    DataScience,
    Identity,
    ImageGeneration,
    Conceptual,
    ProblemSolving,
}

struct TopicRule {
    terms: &'static [&'static str],
    label: &'static str,
}

struct TopicFamily {
    family: Family,
    /// First matching rule supplies the family's topic label.
    rules: &'static [TopicRule],
}

const FAMILIES: &[TopicFamily] = &[
    TopicFamily {
        family: Family::Programming,
        rules: &[
            TopicRule { terms: &["javascript", "js", "node.js", "nodejs"], label: "JavaScript" },
            TopicRule { terms: &["typescript", "ts"], label: "TypeScript" },
            TopicRule { terms: &["react", "reactjs", "jsx"], label: "React" },
            TopicRule { terms: &["python", "django", "flask"], label: "Python" },
            TopicRule { terms: &["java", "spring boot", "jvm"], label: "Java" },
            TopicRule { terms: &["c#", "csharp", "c sharp", "dotnet", ".net", "asp.net"], label: "C#" },
            TopicRule {
                terms: &["sql", "database", "databases", "mysql", "postgres", "postgresql", "mongodb", "sqlite"],
                label: "Databases",
            },
            TopicRule {
                terms: &[
                    "code", "coding", "programming", "function", "algorithm", "algorithms",
                    "software", "compile", "compiler", "recursion", "api", "debug",
                    "debugging", "null pointer",
                ],
                label: "Programming",
            },
        ],
    },
    TopicFamily {
        family: Family::ArtificialIntelligence,
        rules: &[
            TopicRule { terms: &["machine learning", "ml model", "supervised learning"], label: "Machine Learning" },
            TopicRule { terms: &["neural network", "neural networks", "deep learning", "transformer"], label: "Deep Learning" },
            TopicRule {
                terms: &["llm", "llms", "large language model", "language model", "gpt", "gemini", "chatbot", "chatgpt"],
                label: "Language Models",
            },
            TopicRule { terms: &["artificial intelligence", "ai"], label: "Artificial Intelligence" },
        ],
    },
    TopicFamily {
        family: Family::Web,
        rules: &[TopicRule {
            terms: &["html", "css", "frontend", "front end", "backend", "website", "web app", "web development", "browser"],
            label: "Web Development",
        }],
    },
    TopicFamily {
        family: Family::Mobile,
        rules: &[TopicRule {
            terms: &["android", "ios", "mobile app", "mobile apps", "flutter", "react native", "swift", "kotlin"],
            label: "Mobile Development",
        }],
    },
    TopicFamily {
        family: Family::DataScience,
        rules: &[TopicRule {
            terms: &["data science", "data analysis", "pandas", "statistics", "dataset", "datasets", "regression", "data visualization"],
            label: "Data Science",
        }],
    },
    TopicFamily {
        family: Family::Identity,
        rules: &[TopicRule {
            terms: &["who are you", "your name", "who created you", "who made you", "about yourself", "are you human", "are you a robot"],
            label: "Assistant Identity",
        }],
    },
    TopicFamily {
        family: Family::ImageGeneration,
        rules: &[TopicRule {
            terms: &["image", "picture", "photo", "drawing", "illustration", "draw", "sketch", "paint", "painting"],
            label: "Image Generation",
        }],
    },
    TopicFamily {
        family: Family::Conceptual,
        rules: &[TopicRule {
            terms: &["explain", "concept", "concepts", "theory", "understand", "meaning of", "how does", "why does", "principle"],
            label: "Conceptual Understanding",
        }],
    },
    TopicFamily {
        family: Family::ProblemSolving,
        rules: &[TopicRule {
            terms: &["problem", "issue", "solve", "solution", "fix", "troubleshoot", "error", "bug", "not working"],
            label: "Problem Solving",
        }],
    },
];

const GENERAL_NOUNS: &[&str] = &[
    "science", "art", "history", "music", "math", "mathematics", "geography", "literature",
    "philosophy", "economics", "health", "sports", "politics", "religion", "culture",
    "technology", "business", "education", "language", "nature", "food", "travel",
];

const ARCHITECTURE_TERMS: &[&str] = &[
    "architecture", "design pattern", "design patterns", "microservice", "microservices",
    "system design", "scalability",
];

const AI_ETHICS_TERMS: &[&str] = &[
    "ethics", "ethical", "bias", "biased", "fairness", "safety", "responsible ai", "privacy",
];

const DATA_ENGINEERING_TERMS: &[&str] = &[
    "pipeline", "pipelines", "etl", "data warehouse", "big data", "spark", "data lake",
];

pub(super) struct Extracted {
    pub topics: Vec<String>,
    pub domains: Vec<Domain>,
    pub families: Vec<Family>,
}

pub(super) fn extract(view: &TextView) -> Extracted {
    let mut topics: Vec<String> = Vec::new();
    let mut domains: Vec<Domain> = Vec::new();
    let mut families: Vec<Family> = Vec::new();

    for family in FAMILIES {
        let Some(rule) = family.rules.iter().find(|r| view.mentions_any(r.terms)) else {
            continue;
        };
        push_unique(&mut topics, rule.label.to_string());
        families.push(family.family);
        let domain = derive_domain(family.family, view);
        if !domains.contains(&domain) {
            domains.push(domain);
        }
    }

    if topics.is_empty() {
        for noun in GENERAL_NOUNS.iter().filter(|n| view.mentions(n)) {
            push_unique(&mut topics, capitalize(noun));
        }
        let domain = if topics.is_empty() {
            topics.push("general query".to_string());
            Domain::General
        } else {
            Domain::GeneralKnowledge
        };
        domains.push(domain);
    }

    Extracted {
        topics,
        domains,
        families,
    }
}

fn derive_domain(family: Family, view: &TextView) -> Domain {
    match family {
        Family::Programming if view.mentions_any(ARCHITECTURE_TERMS) => {
            Domain::SoftwareArchitecture
        }
        Family::Programming => Domain::SoftwareDevelopment,
        Family::ArtificialIntelligence if view.mentions_any(AI_ETHICS_TERMS) => Domain::AiEthics,
        Family::ArtificialIntelligence => Domain::ArtificialIntelligence,
        Family::Web => Domain::WebDevelopment,
        Family::Mobile => Domain::MobileDevelopment,
        Family::DataScience if view.mentions_any(DATA_ENGINEERING_TERMS) => {
            Domain::DataEngineering
        }
        Family::DataScience => Domain::DataScience,
        Family::Identity => Domain::AssistantIdentity,
        Family::ImageGeneration => Domain::CreativeVisual,
        Family::Conceptual => Domain::ConceptualLearning,
        Family::ProblemSolving => Domain::Troubleshooting,
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
