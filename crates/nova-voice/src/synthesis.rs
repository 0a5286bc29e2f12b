//! Speech output.
//!
//! The engine behaves like a global utterance queue: at most one utterance
//! plays at a time system-wide, and `Speaker::speak` cancels whatever is in
//! flight before queueing new text.

use std::sync::Arc;

use nova_common::{SpeechError, UtteranceId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::chunk::{chunk_text, DEFAULT_CHUNK_LIMIT};

/// A synthesis voice as reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    pub lang: String,
    #[serde(default)]
    pub default: bool,
}

impl Voice {
    pub fn new(name: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lang: lang.into(),
            default: false,
        }
    }
}

/// Playback parameters, always within engine ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeechParams {
    rate: f32,
    pitch: f32,
    volume: f32,
}

impl Default for SpeechParams {
    fn default() -> Self {
        Self {
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

fn clamp_or(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

impl SpeechParams {
    /// Rate is clamped to 0.1-10, pitch to 0-2, volume to 0-1.
    pub fn new(rate: f32, pitch: f32, volume: f32) -> Self {
        Self {
            rate: clamp_or(rate, 0.1, 10.0, 1.0),
            pitch: clamp_or(pitch, 0.0, 2.0, 1.0),
            volume: clamp_or(volume, 0.0, 1.0, 1.0),
        }
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }
}

/// One unit of synthesized speech handed to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    /// Shared by every chunk of one `speak` call.
    pub id: UtteranceId,
    pub text: String,
    /// `None` lets the engine use its default voice.
    pub voice: Option<Voice>,
    pub params: SpeechParams,
}

/// Platform speech synthesizer.
pub trait SynthesisEngine: Send + Sync {
    /// Currently available voices; may be empty until the engine loads them.
    fn voices(&self) -> Vec<Voice>;
    /// Queue an utterance after any already queued.
    fn speak(&self, utterance: Utterance) -> Result<(), SpeechError>;
    /// Drop the playing utterance and everything queued.
    fn cancel(&self);
    fn is_speaking(&self) -> bool;
}

/// Preferred voice: a Google English voice, then any "Female" voice.
/// `None` means the engine default.
pub fn select_voice(voices: &[Voice]) -> Option<&Voice> {
    voices
        .iter()
        .find(|v| v.name.contains("Google") && v.lang.contains("en"))
        .or_else(|| voices.iter().find(|v| v.name.contains("Female")))
}

/// Speaks text through a `SynthesisEngine`, one utterance at a time.
#[derive(Clone)]
pub struct Speaker {
    engine: Arc<dyn SynthesisEngine>,
    chunk_limit: usize,
}

impl std::fmt::Debug for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Speaker")
            .field("chunk_limit", &self.chunk_limit)
            .finish_non_exhaustive()
    }
}

impl Speaker {
    pub fn new(engine: Arc<dyn SynthesisEngine>) -> Self {
        Self {
            engine,
            chunk_limit: DEFAULT_CHUNK_LIMIT,
        }
    }

    pub fn with_chunk_limit(mut self, limit: usize) -> Self {
        self.chunk_limit = limit.max(1);
        self
    }

    /// Cancel anything in flight, then queue `text` as sequential chunks.
    /// The returned handle names every chunk of this call.
    pub fn speak(&self, text: &str, params: SpeechParams) -> Result<UtteranceId, SpeechError> {
        self.engine.cancel();

        let id = UtteranceId::new();
        let voice = select_voice(&self.engine.voices()).cloned();
        let chunks = chunk_text(text, self.chunk_limit);
        debug!(
            utterance = %id,
            chunks = chunks.len(),
            voice = voice.as_ref().map(|v| v.name.as_str()).unwrap_or("default"),
            "speaking"
        );

        for chunk in chunks {
            self.engine.speak(Utterance {
                id: id.clone(),
                text: chunk,
                voice: voice.clone(),
                params,
            })?;
        }
        Ok(id)
    }

    /// Cancel all speech. Safe to call when nothing is playing.
    pub fn stop_speaking(&self) {
        if self.engine.is_speaking() {
            info!("speech cancelled");
        }
        self.engine.cancel();
    }

    pub fn is_speaking(&self) -> bool {
        self.engine.is_speaking()
    }
}
