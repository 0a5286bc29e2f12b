//! Full configuration validation.
//!
//! Validates numeric ranges and required strings, collecting every error
//! into a single `ConfigError`.

mod helpers;


use crate::schema::NovaConfig;
use nova_common::ConfigError;

use helpers::{validate_non_empty, validate_range, validate_range_f64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &NovaConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_assistant(&mut errors, config);
    validate_gemini(&mut errors, config);
    validate_speech(&mut errors, config);
    validate_range(
        &mut errors,
        "quiz.default_count",
        config.quiz.default_count,
        1,
        50,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_assistant(errors: &mut Vec<String>, config: &NovaConfig) {
    validate_non_empty(errors, "assistant.name", &config.assistant.name);
    validate_non_empty(errors, "assistant.creator_reply", &config.assistant.creator_reply);
    validate_non_empty(errors, "assistant.literal_token", &config.assistant.literal_token);
}

fn validate_gemini(errors: &mut Vec<String>, config: &NovaConfig) {
    let gemini = &config.gemini;
    validate_non_empty(errors, "gemini.model", &gemini.model);
    validate_non_empty(errors, "gemini.image_model", &gemini.image_model);
    validate_non_empty(errors, "gemini.vision_model", &gemini.vision_model);
    validate_non_empty(errors, "gemini.api_key_env", &gemini.api_key_env);
    validate_range_f64(errors, "gemini.temperature", gemini.temperature, 0.0, 2.0);
    validate_range(
        errors,
        "gemini.max_output_tokens",
        gemini.max_output_tokens,
        1,
        65536,
    );
    if !gemini.base_url.starts_with("http://") && !gemini.base_url.starts_with("https://") {
        errors.push(format!(
            "gemini.base_url = {:?} must start with http:// or https://",
            gemini.base_url
        ));
    }
}

fn validate_speech(errors: &mut Vec<String>, config: &NovaConfig) {
    let speech = &config.speech;
    validate_non_empty(errors, "speech.lang", &speech.lang);
    validate_range_f64(errors, "speech.rate", speech.rate, 0.1, 10.0);
    validate_range_f64(errors, "speech.pitch", speech.pitch, 0.0, 2.0);
    validate_range_f64(errors, "speech.volume", speech.volume, 0.0, 1.0);
    validate_range(errors, "speech.chunk_limit", speech.chunk_limit, 100, 32000);
}
