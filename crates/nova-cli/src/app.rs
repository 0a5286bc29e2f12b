//! Wiring from config to the assistant and speech output.

use std::sync::Arc;

use nova_ai::{Assistant, GeminiClient, GeminiConfig, GenerativeBackend, Interceptor, Persona};
use nova_common::NovaError;
use nova_config::schema::{AssistantConfig, GeminiSettings, QuizConfig, SpeechConfig};
use nova_config::NovaConfig;
use nova_voice::{RecognitionSettings, SpeechOutput, SpeechParams, Speaker};

use crate::speech::ConsoleSynthesis;

pub struct App {
    pub assistant: Assistant,
    pub show_thinking: bool,
    pub speech: Option<SpeechOutput>,
    /// Voice input settings; `None` when speech is disabled.
    pub recognition: Option<RecognitionSettings>,
    pub quiz: QuizConfig,
}

impl App {
    pub fn new(config: &NovaConfig, backend: Arc<dyn GenerativeBackend>) -> Self {
        let assistant = Assistant::new(backend)
            .with_persona(persona(&config.assistant))
            .with_interceptor(interceptor(&config.assistant))
            .with_enhancement(config.assistant.enhance_responses);
        Self {
            assistant,
            show_thinking: config.assistant.show_thinking,
            speech: speech_output(&config.speech),
            recognition: config
                .speech
                .enabled
                .then(|| recognition_settings(&config.speech)),
            quiz: config.quiz.clone(),
        }
    }

    /// Build an app backed by the Gemini API.
    pub fn connect(config: &NovaConfig, api_key: String) -> Result<Self, NovaError> {
        let client = GeminiClient::new(gemini_config(&config.gemini, api_key))?;
        Ok(Self::new(config, Arc::new(client)))
    }
}

pub fn persona(config: &AssistantConfig) -> Persona {
    Persona::new(&config.name, &config.creator)
}

pub fn interceptor(config: &AssistantConfig) -> Interceptor {
    Interceptor::new()
        .with_literal(&config.literal_token, &config.literal_reply)
        .with_creator_reply(&config.creator_reply)
}

pub fn gemini_config(settings: &GeminiSettings, api_key: String) -> GeminiConfig {
    GeminiConfig::new(api_key)
        .with_model(&settings.model)
        .with_image_model(&settings.image_model)
        .with_vision_model(&settings.vision_model)
        .with_temperature(settings.temperature)
        .with_max_output_tokens(settings.max_output_tokens)
        .with_base_url(&settings.base_url)
}

/// `--api-key` wins; otherwise the environment variable named in config.
pub fn resolve_api_key(flag: Option<String>, env_name: &str) -> Result<String, NovaError> {
    flag.filter(|k| !k.trim().is_empty())
        .or_else(|| std::env::var(env_name).ok().filter(|k| !k.trim().is_empty()))
        .ok_or_else(|| {
            NovaError::Other(format!(
                "no Gemini API key: set {env_name} or pass --api-key"
            ))
        })
}

pub fn recognition_settings(config: &SpeechConfig) -> RecognitionSettings {
    RecognitionSettings {
        continuous: config.continuous,
        interim_results: config.interim_results,
        lang: config.lang.clone(),
    }
}

pub fn speech_output(config: &SpeechConfig) -> Option<SpeechOutput> {
    if !config.enabled {
        return None;
    }
    let speaker = Speaker::new(Arc::new(ConsoleSynthesis::default()))
        .with_chunk_limit(config.chunk_limit as usize);
    let params = SpeechParams::new(config.rate as f32, config.pitch as f32, config.volume as f32);
    Some(SpeechOutput::local(speaker).with_params(params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use nova_ai::gemini::{Content, GenerateContentResponse};
    use nova_ai::{AiError, ModelKind};

    struct Unreachable;

    #[async_trait]
    impl GenerativeBackend for Unreachable {
        async fn generate(
            &self,
            _kind: ModelKind,
            _contents: Vec<Content>,
        ) -> Result<GenerateContentResponse, AiError> {
            panic!("backend must not be called");
        }
    }

    #[test]
    fn gemini_config_follows_settings() {
        let settings = GeminiSettings {
            model: "gemini-test".into(),
            base_url: "http://localhost:9000/".into(),
            temperature: 0.2,
            ..GeminiSettings::default()
        };
        let config = gemini_config(&settings, "k".into());
        assert_eq!(config.model, "gemini-test");
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.temperature, 0.2);
    }

    #[test]
    fn api_key_flag_takes_precedence() {
        let key = resolve_api_key(Some("from-flag".into()), "NOVA_TEST_UNSET_KEY_VAR").unwrap();
        assert_eq!(key, "from-flag");
    }

    #[test]
    fn missing_api_key_names_the_variable() {
        let err = resolve_api_key(None, "NOVA_TEST_UNSET_KEY_VAR").unwrap_err();
        assert!(err.to_string().contains("NOVA_TEST_UNSET_KEY_VAR"));
    }

    #[test]
    fn speech_disabled_by_default() {
        assert!(speech_output(&SpeechConfig::default()).is_none());
        let enabled = SpeechConfig {
            enabled: true,
            ..SpeechConfig::default()
        };
        assert!(speech_output(&enabled).is_some());
    }

    #[test]
    fn recognition_settings_follow_speech_config() {
        let config = SpeechConfig {
            enabled: true,
            lang: "fil-PH".into(),
            continuous: false,
            interim_results: false,
            ..SpeechConfig::default()
        };
        let settings = recognition_settings(&config);
        assert_eq!(settings.lang, "fil-PH");
        assert!(!settings.continuous);
        assert!(!settings.interim_results);
    }

    #[test]
    fn recognition_only_when_speech_enabled() {
        let mut config = NovaConfig::default();
        assert!(App::new(&config, Arc::new(Unreachable)).recognition.is_none());

        config.speech.enabled = true;
        config.speech.lang = "es-ES".into();
        let app = App::new(&config, Arc::new(Unreachable));
        assert_eq!(app.recognition.unwrap().lang, "es-ES");
    }

    #[tokio::test]
    async fn configured_literal_token_is_intercepted() {
        let mut config = NovaConfig::default();
        config.assistant.literal_token = "Endpoint".into();
        config.assistant.literal_reply = "wss://example.test".into();
        let app = App::new(&config, Arc::new(Unreachable));

        let reply = app.assistant.send_message(&[], " endpoint ").await.unwrap();
        assert_eq!(reply.response_text, "wss://example.test");
    }
}
