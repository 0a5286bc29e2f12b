//! Subcommand handlers.

use std::io::Write;
use std::path::Path;

use base64::Engine as _;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use nova_ai::{
    analyze, extract_code_blocks, generate_thinking_process, ImageGeneration, ImageInput,
    Interceptor, Message, QueryAnalysis, QuizQuestion, SpecialIntent, ThinkingStep, TurnOutcome,
};
use nova_common::NovaError;

use crate::app::App;
use crate::speech::TerminalRecognition;

fn print_thinking(steps: &[ThinkingStep]) {
    println!("Thinking:");
    for step in steps {
        println!("  - {}", step.thought);
    }
    println!();
}

async fn speak(app: &App, text: &str) {
    if let Some(speech) = &app.speech {
        if let Err(e) = speech.deliver(text).await {
            warn!(error = %e, "speech output failed");
        }
    }
}

fn print_image(generation: &ImageGeneration) {
    if let Some(text) = &generation.text {
        println!("{text}");
    }
    if let Some(src) = &generation.image_src {
        println!("[image: {} bytes of data URI]", src.len());
    }
}

/// Text form of an image turn for the conversation history.
fn image_history_text(prompt: &str, generation: &ImageGeneration) -> String {
    match (&generation.image_src, &generation.text) {
        (Some(_), Some(text)) => format!("[Generated an image of {prompt}] {text}"),
        (Some(_), None) => format!("[Generated an image of {prompt}]"),
        (None, Some(text)) => text.clone(),
        (None, None) => String::new(),
    }
}

pub async fn ask(app: &App, text: &str) -> Result<(), NovaError> {
    if app.show_thinking {
        print_thinking(&app.assistant.thinking_process(&[], text));
    }
    match app.assistant.respond(&[], text).await? {
        TurnOutcome::Text(reply) => {
            println!("{}", reply.response_text);
            speak(app, &reply.response_text).await;
        }
        TurnOutcome::Image { generation, .. } => print_image(&generation),
    }
    Ok(())
}

/// Interactive session. History lives here; a failed turn is rolled back.
pub async fn chat(app: &App) -> Result<(), NovaError> {
    let name = app.assistant.persona().name.clone();
    println!("{name} is ready. Type /clear to reset the conversation, /quit to exit.");

    if let Some(settings) = &app.recognition {
        let session = nova_voice::start_listening(
            &TerminalRecognition,
            settings,
            |_| {},
            |e| warn!(error = %e, "voice input error"),
        );
        if session.is_none() {
            println!(
                "Voice input ({}) is not available in the terminal; type your messages.",
                settings.lang
            );
        }
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut history: Vec<Message> = Vec::new();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        match input {
            "" => continue,
            "/quit" | "/exit" => break,
            "/clear" => {
                history.clear();
                println!("Conversation cleared.");
                continue;
            }
            _ => {}
        }

        if app.show_thinking {
            print_thinking(&app.assistant.thinking_process(&history, input));
        }

        history.push(Message::user(input));
        let prior = &history[..history.len() - 1];
        let outcome = app.assistant.respond(prior, input).await;
        match outcome {
            Ok(TurnOutcome::Text(reply)) => {
                println!("{name}: {}\n", reply.response_text);
                speak(app, &reply.response_text).await;
                history.push(reply.assistant_message);
            }
            Ok(TurnOutcome::Image { prompt, generation }) => {
                print_image(&generation);
                println!();
                history.push(Message::assistant(image_history_text(&prompt, &generation)));
            }
            Err(e) => {
                history.pop();
                warn!(error = %e, "turn failed");
                eprintln!("error: {e}\n");
            }
        }
    }

    info!(turns = history.len(), "chat ended");
    Ok(())
}

/// `data:<mime>;base64,<payload>` to raw bytes.
fn decode_data_uri(src: &str) -> Result<Vec<u8>, NovaError> {
    let payload = src
        .split_once(";base64,")
        .map(|(_, data)| data)
        .ok_or_else(|| NovaError::Other("image is not a base64 data URI".into()))?;
    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| NovaError::Other(format!("invalid image data: {e}")))
}

pub async fn image(app: &App, prompt: &str, output: Option<&Path>) -> Result<(), NovaError> {
    let generation = app.assistant.generate_image(prompt).await;
    print_image(&generation);

    if let (Some(path), Some(src)) = (output, &generation.image_src) {
        let bytes = decode_data_uri(src)?;
        tokio::fs::write(path, &bytes).await?;
        println!("Saved image to {}", path.display());
    }
    Ok(())
}

pub async fn code(app: &App, path: &Path) -> Result<(), NovaError> {
    let image = ImageInput::from_path(path).await?;
    let answer = app.assistant.generate_code_from_image(&image).await?;
    println!("{answer}");

    let blocks = extract_code_blocks(&answer);
    if !blocks.is_empty() {
        let languages: Vec<&str> = blocks
            .iter()
            .map(|b| b.language.as_deref().unwrap_or("text"))
            .collect();
        eprintln!("{} code block(s): {}", blocks.len(), languages.join(", "));
    }
    Ok(())
}

fn format_quiz(questions: &[QuizQuestion]) -> String {
    let mut out = String::new();
    for (i, q) in questions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, q.question));
        for (j, option) in q.options.iter().enumerate() {
            let letter = char::from(b'A' + (j % 26) as u8);
            out.push_str(&format!("   {letter}) {option}\n"));
        }
        out.push('\n');
    }
    out.push_str("Answers:\n");
    for (i, q) in questions.iter().enumerate() {
        let letter = char::from(b'A' + (q.correct_answer % 26) as u8);
        out.push_str(&format!("{}. {letter}", i + 1));
        if let Some(explanation) = &q.explanation {
            out.push_str(&format!(": {explanation}"));
        }
        out.push('\n');
    }
    out
}

pub async fn quiz(
    app: &App,
    topic: &str,
    count: Option<u32>,
    difficulty: Option<&str>,
) -> Result<(), NovaError> {
    let count = count.unwrap_or(app.quiz.default_count) as usize;
    let default_difficulty = app.quiz.difficulty.to_string();
    let difficulty = difficulty.unwrap_or(&default_difficulty);

    let questions = app.assistant.generate_quiz(topic, count, difficulty).await?;
    print!("{}", format_quiz(&questions));
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisReport<'a> {
    special_intent: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_prompt: Option<String>,
    analysis: &'a QueryAnalysis,
    thinking: &'a [ThinkingStep],
}

fn special_intent_label(intent: &SpecialIntent) -> &'static str {
    match intent {
        SpecialIntent::NoMatch => "none",
        SpecialIntent::LiteralAnswer(_) => "literal",
        SpecialIntent::ImageRequest(_) => "image",
        SpecialIntent::CreatorQuery => "creator",
        SpecialIntent::StationList => "stations",
    }
}

/// Local analysis as pretty JSON.
pub fn analysis_json(interceptor: &Interceptor, text: &str) -> Result<String, NovaError> {
    let intent = interceptor.intercept(text);
    let analysis = analyze(text, &[]);
    let thinking = generate_thinking_process(text, &analysis);
    let report = AnalysisReport {
        special_intent: special_intent_label(&intent),
        image_prompt: match intent {
            SpecialIntent::ImageRequest(prompt) => Some(prompt),
            _ => None,
        },
        analysis: &analysis,
        thinking: &thinking,
    };
    serde_json::to_string_pretty(&report).map_err(|e| NovaError::Other(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_json_shape() {
        let json = analysis_json(&Interceptor::new(), "compare React vs Vue").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["specialIntent"], "none");
        assert_eq!(value["analysis"]["intent"], "Comparison");
        assert!(value["analysis"]["responseApproach"].is_string());
        assert!(value["thinking"].as_array().unwrap().len() >= 6);
        assert!(value.get("imagePrompt").is_none());
    }

    #[test]
    fn analysis_json_reports_image_prompt() {
        let json = analysis_json(&Interceptor::new(), "draw me a cat").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["specialIntent"], "image");
        assert!(value["imagePrompt"].is_string());
    }

    #[test]
    fn quiz_formatting_lists_options_and_answers() {
        let questions = vec![QuizQuestion {
            question: "2 + 2?".into(),
            options: vec!["3".into(), "4".into()],
            correct_answer: 1,
            explanation: Some("Basic arithmetic.".into()),
        }];
        let text = format_quiz(&questions);
        assert!(text.contains("1. 2 + 2?\n   A) 3\n   B) 4\n"));
        assert!(text.ends_with("Answers:\n1. B: Basic arithmetic.\n"));
    }

    #[test]
    fn data_uri_decodes() {
        assert_eq!(decode_data_uri("data:image/png;base64,AQID").unwrap(), vec![1, 2, 3]);
        assert!(decode_data_uri("not a data uri").is_err());
    }

    #[test]
    fn image_history_text_variants() {
        let with_image = ImageGeneration {
            text: None,
            image_src: Some("data:image/png;base64,AA==".into()),
        };
        assert_eq!(
            image_history_text("a cat", &with_image),
            "[Generated an image of a cat]"
        );
        let soft_fail = ImageGeneration {
            text: Some("unavailable".into()),
            image_src: None,
        };
        assert_eq!(image_history_text("a cat", &soft_fail), "unavailable");
    }
}
