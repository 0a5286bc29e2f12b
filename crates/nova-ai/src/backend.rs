//! The seam between turn orchestration and a generative-language provider.

use async_trait::async_trait;

use crate::gemini::{Content, GenerateContentResponse};
use crate::AiError;

/// Which model family a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// Conversational text generation.
    Text,
    /// Mixed text and inline image output.
    Image,
    /// Image input, text output.
    Vision,
}

/// A provider able to answer `generateContent`-style requests.
///
/// Implementations own model selection and generation parameters for each
/// `ModelKind`; callers only supply the ordered contents.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate(
        &self,
        kind: ModelKind,
        contents: Vec<Content>,
    ) -> Result<GenerateContentResponse, AiError>;
}
