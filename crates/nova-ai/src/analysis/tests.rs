//! Tests for topic, domain, intent, and complexity classification.

use super::*;

fn words(n: usize, filler: &str) -> String {
    vec![filler; n].join(" ")
}

#[test]
fn intent_comparison() {
    assert_eq!(analyze("compare React vs Vue", &[]).intent, Intent::Comparison);
}

#[test]
fn intent_problem_solving() {
    assert_eq!(
        analyze("fix this null pointer error", &[]).intent,
        Intent::ProblemSolving
    );
}

#[test]
fn intent_information_seeking() {
    assert_eq!(
        analyze("what is recursion?", &[]).intent,
        Intent::InformationSeeking
    );
    assert_eq!(
        analyze("Tell me about volcanoes", &[]).intent,
        Intent::InformationSeeking
    );
}

#[test]
fn intent_rules_are_ordered() {
    // A question that also mentions an error is still information seeking.
    assert_eq!(
        analyze("why does this error happen?", &[]).intent,
        Intent::InformationSeeking
    );
    // Generation verbs outrank problem words.
    assert_eq!(
        analyze("write a function that handles errors", &[]).intent,
        Intent::ContentGeneration
    );
}

#[test]
fn intent_summarization_opinion_and_general() {
    assert_eq!(
        analyze("summarize this article for me", &[]).intent,
        Intent::Summarization
    );
    assert_eq!(
        analyze("give me your opinion on jazz", &[]).intent,
        Intent::OpinionSeeking
    );
    assert_eq!(analyze("hello there", &[]).intent, Intent::GeneralRequest);
}

#[test]
fn complexity_low_for_short_plain_query() {
    let analysis = analyze("tell me a nice joke", &[]);
    assert_eq!(analysis.complexity, Complexity::Low);
}

#[test]
fn complexity_high_for_long_technical_query() {
    let query = format!("{} algorithm", words(34, "please"));
    assert_eq!(query.split_whitespace().count(), 35);
    assert_eq!(analyze(&query, &[]).complexity, Complexity::High);
}

#[test]
fn complexity_high_for_technical_and_nuanced() {
    let analysis = analyze("what are the tradeoffs of this database design", &[]);
    assert_eq!(analysis.complexity, Complexity::High);
}

#[test]
fn complexity_medium_for_nuance_alone() {
    let analysis = analyze("pros and cons of living abroad", &[]);
    assert_eq!(analysis.complexity, Complexity::Medium);
}

#[test]
fn complexity_medium_for_mid_length_technical() {
    let query = format!("{} implementation", words(17, "okay"));
    assert_eq!(analyze(&query, &[]).complexity, Complexity::Medium);
}

#[test]
fn programming_topic_precedence_picks_first_rule() {
    let analysis = analyze("convert this python script to javascript", &[]);
    assert_eq!(analysis.topics, vec!["JavaScript".to_string()]);
    assert_eq!(analysis.domains, vec![Domain::SoftwareDevelopment]);
}

#[test]
fn csharp_matches_symbolic_term() {
    let analysis = analyze("How do generics work in C#?", &[]);
    assert!(analysis.topics.contains(&"C#".to_string()));
}

#[test]
fn architecture_keywords_select_architecture_domain() {
    let analysis = analyze("which design pattern fits this java service", &[]);
    assert!(analysis.has_domain(Domain::SoftwareArchitecture));
    assert!(!analysis.has_domain(Domain::SoftwareDevelopment));
}

#[test]
fn multiple_families_produce_multiple_domains() {
    let analysis = analyze("how can machine learning improve my react website", &[]);
    assert!(analysis.topics.contains(&"React".to_string()));
    assert!(analysis.topics.contains(&"Machine Learning".to_string()));
    assert!(analysis.topics.contains(&"Web Development".to_string()));
    assert!(analysis.has_domain(Domain::SoftwareDevelopment));
    assert!(analysis.has_domain(Domain::ArtificialIntelligence));
    assert!(analysis.has_domain(Domain::WebDevelopment));
    assert!(analysis.is_multi_topic());
}

#[test]
fn ai_ethics_domain() {
    let analysis = analyze("is ai bias a real problem", &[]);
    assert!(analysis.has_domain(Domain::AiEthics));
    assert!(analysis.has_family(Family::ArtificialIntelligence));
}

#[test]
fn general_nouns_fallback() {
    let analysis = analyze("recommend a book on history and music", &[]);
    assert_eq!(
        analysis.topics,
        vec!["History".to_string(), "Music".to_string()]
    );
    assert_eq!(analysis.domains, vec![Domain::GeneralKnowledge]);
}

#[test]
fn general_query_when_nothing_matches() {
    let analysis = analyze("hello there", &[]);
    assert_eq!(analysis.topics, vec!["general query".to_string()]);
    assert_eq!(analysis.domains, vec![Domain::General]);
    assert_eq!(analysis.complexity, Complexity::Low);
    assert_eq!(analysis.intent, Intent::GeneralRequest);
    assert!(analysis.families.is_empty());
}

#[test]
fn has_context_tracks_history() {
    assert!(!analyze("hi", &[]).has_context);
    let history = vec![Message::user("hi"), Message::assistant("hello!")];
    assert!(analyze("and then?", &history).has_context);
}

#[test]
fn response_approach_priority() {
    let technical = analyze("compare python vs java", &[]);
    assert!(technical.response_approach.starts_with("Provide structured technical guidance"));

    let comparison = analyze("compare tea vs coffee", &[]);
    assert!(comparison.response_approach.contains("comparative analysis"));

    let problem = analyze("fix my broken bike chain", &[]);
    assert!(problem.response_approach.contains("step by step"));

    let ai = analyze("explain how gpt works", &[]);
    assert!(ai.response_approach.contains("AI concepts"));

    let general = analyze("hello there", &[]);
    assert!(general.response_approach.contains("conversational"));
}

#[test]
fn analysis_is_deterministic() {
    let text = "Compare the architecture of React and Angular, with pros and cons";
    assert_eq!(analyze(text, &[]), analyze(text, &[]));
}

#[test]
fn analysis_serializes_domain_labels() {
    let analysis = analyze("build a flutter app", &[]);
    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["domains"][0], "Mobile Development");
    assert_eq!(json["intent"], "ContentGeneration");
    assert!(json.get("responseApproach").is_some());
    assert!(json.get("families").is_none());
}

#[test]
fn urls_do_not_trigger_symbolic_programming_terms() {
    let analysis = analyze("what is on www.netflix.com tonight", &[]);
    assert!(!analysis.has_family(Family::Programming));
    assert!(!analysis.topics.iter().any(|t| t == "C#"));
    assert!(!analysis.has_domain(Domain::SoftwareDevelopment));
}

#[test]
fn symbolic_terms_still_match_as_words() {
    let analysis = analyze("how do I deploy an asp.net app written in C#?", &[]);
    assert!(analysis.topics.iter().any(|t| t == "C#"));
    assert!(analysis.has_domain(Domain::SoftwareDevelopment));
}
