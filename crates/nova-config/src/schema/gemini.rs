//! Generative-language API settings.

use serde::{Deserialize, Serialize};

/// Model selection and generation parameters for the Gemini API.
///
/// The API key itself never lives in the config file; `api_key_env` names
/// the environment variable it is read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiSettings {
    pub model: String,
    pub image_model: String,
    pub vision_model: String,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    /// Valid range: 1-65536.
    pub max_output_tokens: u32,
    pub base_url: String,
    pub api_key_env: String,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".into(),
            image_model: "gemini-2.0-flash-exp-image-generation".into(),
            vision_model: "gemini-1.5-flash".into(),
            temperature: 0.7,
            max_output_tokens: 2048,
            base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
            api_key_env: "GEMINI_API_KEY".into(),
        }
    }
}
