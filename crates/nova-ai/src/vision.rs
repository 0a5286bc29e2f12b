//! Image-to-code generation.

use std::path::Path;

use base64::Engine as _;
use tracing::{debug, error};

use crate::backend::{GenerativeBackend, ModelKind};
use crate::gemini::{Content, Part};
use crate::AiError;

pub const CODE_GENERATION_FAILED: &str =
    "Failed to generate code from the image. Please try again with a clearer image or a different file.";

const CODE_PROMPT: &str = "\
Analyze this user-interface image and write clean, well-structured code that reproduces it. \
Use semantic HTML, CSS, and minimal JavaScript. \
Return each file in its own fenced code block tagged with its language.";

/// Raw image bytes and their MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl ImageInput {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Read an image file, inferring the MIME type from its extension.
    pub async fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let mime = match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            _ => "image/png",
        };
        Ok(Self::new(bytes, mime))
    }

    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }
}

/// Ask the vision model for code. Failures are logged and replaced by a
/// generic, retry-suggesting `AiError::CodeGeneration`.
pub async fn generate_code_from_image(
    backend: &dyn GenerativeBackend,
    image: &ImageInput,
) -> Result<String, AiError> {
    debug!(mime = %image.mime_type, size = image.bytes.len(), "image-to-code request");

    let contents = vec![Content::user(vec![
        Part::text(CODE_PROMPT),
        Part::inline(&image.mime_type, image.to_base64()),
    ])];

    match backend.generate(ModelKind::Vision, contents).await {
        Ok(response) => {
            let text = response.joined_text();
            if text.trim().is_empty() {
                error!("vision model returned no text");
                return Err(AiError::CodeGeneration(CODE_GENERATION_FAILED.to_string()));
            }
            Ok(text)
        }
        Err(e) => {
            error!(error = %e, "image-to-code request failed");
            Err(AiError::CodeGeneration(CODE_GENERATION_FAILED.to_string()))
        }
    }
}

/// A fenced code block from a model answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub language: Option<String>,
    pub code: String,
}

/// Pull fenced code blocks out of Markdown. An unterminated fence runs to
/// the end of the text.
pub fn extract_code_blocks(text: &str) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<(Option<String>, Vec<&str>)> = None;

    for line in text.lines() {
        let trimmed = line.trim_start();
        match current.take() {
            None => {
                if let Some(info) = trimmed.strip_prefix("```") {
                    let lang = info.trim();
                    let language = (!lang.is_empty()).then(|| lang.to_string());
                    current = Some((language, Vec::new()));
                }
            }
            Some((language, lines)) if trimmed.starts_with("```") => {
                blocks.push(CodeBlock {
                    language,
                    code: lines.join("\n"),
                });
            }
            Some((language, mut lines)) => {
                lines.push(line);
                current = Some((language, lines));
            }
        }
    }

    if let Some((language, lines)) = current {
        blocks.push(CodeBlock {
            language,
            code: lines.join("\n"),
        });
    }

    blocks
}
