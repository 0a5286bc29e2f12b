//! Image generation with soft failure.
//!
//! Every outcome is a displayable result: a missing image or an upstream
//! failure becomes explanatory text instead of an error.

use base64::Engine as _;
use tracing::{info, warn};

use crate::backend::{GenerativeBackend, ModelKind};
use crate::gemini::{Content, Part};
use crate::AiError;

pub const IMAGE_FEATURE_DISABLED: &str =
    "Image generation is currently unavailable. Please try again later or describe what you need in words.";
pub const IMAGE_QUOTA_EXCEEDED: &str =
    "The image generation quota has been reached for now. Please wait a while before trying again.";
pub const IMAGE_CONTENT_BLOCKED: &str =
    "I can't create that image because it conflicts with the content policy. Try rephrasing your request.";
pub const IMAGE_GENERIC_FAILURE: &str =
    "Something went wrong while generating the image. Please try again with a different description.";

const QUOTA_MARKERS: &[&str] = &["quota", "rate limit", "resource_exhausted", "exhausted", "429"];
const POLICY_MARKERS: &[&str] = &["safety", "blocked", "policy", "prohibited", "harm"];

/// Result of an image request. `image_src` is a `data:` URI when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageGeneration {
    pub text: Option<String>,
    pub image_src: Option<String>,
}

impl ImageGeneration {
    fn text_only(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            image_src: None,
        }
    }
}

/// User-facing message for a failed image request, keyed on the error text.
pub fn image_failure_message(err: &AiError) -> &'static str {
    let text = err.to_string().to_lowercase();
    if QUOTA_MARKERS.iter().any(|m| text.contains(m)) {
        IMAGE_QUOTA_EXCEEDED
    } else if POLICY_MARKERS.iter().any(|m| text.contains(m)) {
        IMAGE_CONTENT_BLOCKED
    } else {
        IMAGE_GENERIC_FAILURE
    }
}

pub async fn generate_image(backend: &dyn GenerativeBackend, prompt: &str) -> ImageGeneration {
    let contents = vec![Content::user(vec![Part::text(prompt)])];

    let response = match backend.generate(ModelKind::Image, contents).await {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "image generation failed");
            return ImageGeneration::text_only(image_failure_message(&e));
        }
    };

    let mut text = String::new();
    let mut image_src = None;
    for part in response.parts() {
        if let Some(t) = &part.text {
            text.push_str(t);
        }
        if image_src.is_some() {
            continue;
        }
        if let Some(inline) = &part.inline_data {
            match base64::engine::general_purpose::STANDARD.decode(&inline.data) {
                Ok(bytes) if !bytes.is_empty() => {
                    let mime = if inline.mime_type.is_empty() {
                        "image/png"
                    } else {
                        inline.mime_type.as_str()
                    };
                    image_src = Some(format!("data:{mime};base64,{}", inline.data));
                }
                Ok(_) => warn!("empty inline image payload"),
                Err(e) => warn!(error = %e, "inline image payload is not valid base64"),
            }
        }
    }

    match image_src {
        Some(src) => {
            info!("image generated");
            ImageGeneration {
                text: Some(text).filter(|t| !t.trim().is_empty()),
                image_src: Some(src),
            }
        }
        None => ImageGeneration::text_only(IMAGE_FEATURE_DISABLED),
    }
}
