//! Speech recognition and synthesis configuration types.

use serde::{Deserialize, Serialize};

/// Speech input/output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub enabled: bool,
    /// Recognition locale.
    pub lang: String,
    pub continuous: bool,
    pub interim_results: bool,
    /// Valid range: 0.1-10.0.
    pub rate: f64,
    /// Valid range: 0.0-2.0.
    pub pitch: f64,
    /// Valid range: 0.0-1.0.
    pub volume: f64,
    /// Longest text handed to the synthesis engine as one utterance.
    pub chunk_limit: u32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            lang: "en-US".into(),
            continuous: true,
            interim_results: true,
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
            chunk_limit: 4000,
        }
    }
}
