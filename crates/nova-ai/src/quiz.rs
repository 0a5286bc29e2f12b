//! Multiple-choice quiz generation.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::backend::{GenerativeBackend, ModelKind};
use crate::gemini::{Content, Part};
use crate::AiError;

pub const QUIZ_MALFORMED: &str =
    "The quiz could not be generated because the model response was not a valid question list. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    pub correct_answer: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuizQuestion {
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_answer).map(String::as_str)
    }

    fn is_well_formed(&self) -> bool {
        !self.question.trim().is_empty()
            && self.options.len() >= 2
            && self.correct_answer < self.options.len()
    }
}

fn quiz_prompt(topic: &str, count: usize, difficulty: &str) -> String {
    format!(
        "Create a multiple-choice quiz with exactly {count} questions about {topic}. Difficulty: {difficulty}.\n\
         Respond with only a JSON array. Each element must have the shape \
         {{\"question\": string, \"options\": [four strings], \"correctAnswer\": index of the correct option (0-3), \"explanation\": string}}.\n\
         Do not wrap the array in prose."
    )
}

/// The outermost `[ ... ]` span of `text`.
pub fn extract_json_array(text: &str) -> Result<&str, AiError> {
    match (text.find('['), text.rfind(']')) {
        (Some(start), Some(end)) if start < end => Ok(&text[start..=end]),
        _ => Err(AiError::MalformedOutput(QUIZ_MALFORMED.to_string())),
    }
}

/// Parse a model answer into questions. Any defect rejects the whole quiz.
pub fn parse_quiz(text: &str) -> Result<Vec<QuizQuestion>, AiError> {
    let json = extract_json_array(text)?;
    let questions: Vec<QuizQuestion> = serde_json::from_str(json).map_err(|e| {
        warn!(error = %e, "quiz JSON did not parse");
        AiError::MalformedOutput(QUIZ_MALFORMED.to_string())
    })?;

    if questions.is_empty() || !questions.iter().all(QuizQuestion::is_well_formed) {
        warn!(count = questions.len(), "quiz failed validation");
        return Err(AiError::MalformedOutput(QUIZ_MALFORMED.to_string()));
    }
    Ok(questions)
}

pub async fn generate_quiz(
    backend: &dyn GenerativeBackend,
    topic: &str,
    count: usize,
    difficulty: &str,
) -> Result<Vec<QuizQuestion>, AiError> {
    debug!(topic, count, difficulty, "quiz request");
    let contents = vec![Content::user(vec![Part::text(quiz_prompt(
        topic, count, difficulty,
    ))])];
    let response = backend.generate(ModelKind::Text, contents).await?;
    parse_quiz(&response.joined_text())
}
