//! Configuration schema types for Nova.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults below.

mod assistant;
mod gemini;
mod speech;
mod system;

pub use assistant::*;
pub use gemini::*;
pub use speech::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Nova.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct NovaConfig {
    pub assistant: AssistantConfig,
    pub gemini: GeminiSettings,
    pub speech: SpeechConfig,
    pub quiz: QuizConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: NovaConfig = toml::from_str(
            r#"
[assistant]
name = "Orion"

[speech]
rate = 1.5
"#,
        )
        .unwrap();
        assert_eq!(config.assistant.name, "Orion");
        assert_eq!(config.assistant.literal_token, "url");
        assert_eq!(config.speech.rate, 1.5);
        assert_eq!(config.speech.lang, "en-US");
        assert_eq!(config.gemini.max_output_tokens, 2048);
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: NovaConfig = toml::from_str("[logging]\nlevel = \"DEBUG\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.as_filter(), "debug");
    }

    #[test]
    fn quiz_difficulty_parses_lowercase() {
        let config: NovaConfig = toml::from_str("[quiz]\ndifficulty = \"hard\"\n").unwrap();
        assert_eq!(config.quiz.difficulty, QuizDifficulty::Hard);
        assert_eq!(config.quiz.difficulty.to_string(), "hard");
    }
}
