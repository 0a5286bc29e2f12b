//! Speech recognition session.
//!
//! The host wires engine callbacks into `SpeechSession::handle_event`. For
//! each result batch, final segments are emitted one by one in engine order,
//! then any interim text is emitted once as a combined transcript.

use nova_common::SpeechError;
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionSettings {
    pub continuous: bool,
    pub interim_results: bool,
    pub lang: String,
}

impl Default for RecognitionSettings {
    fn default() -> Self {
        Self {
            continuous: true,
            interim_results: true,
            lang: "en-US".to_string(),
        }
    }
}

/// One entry of an engine result batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionResult {
    pub transcript: String,
    pub is_final: bool,
}

impl RecognitionResult {
    pub fn final_text(text: impl Into<String>) -> Self {
        Self {
            transcript: text.into(),
            is_final: true,
        }
    }

    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            transcript: text.into(),
            is_final: false,
        }
    }
}

/// Callbacks a recognition engine delivers to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    Results(Vec<RecognitionResult>),
    /// Engine error payload, e.g. `"no-speech"` or `"not-allowed"`.
    Error(String),
    End,
}

/// Text handed to the caller's result callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    pub text: String,
    pub is_final: bool,
}

/// A platform recognizer instance.
pub trait RecognitionEngine: Send {
    fn configure(&mut self, settings: &RecognitionSettings);
    fn start(&mut self) -> Result<(), SpeechError>;
    fn stop(&mut self);
}

/// Factory for recognizers. `None` means the platform has no recognizer.
pub trait RecognitionBackend {
    fn create(&self) -> Option<Box<dyn RecognitionEngine>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechState {
    Idle,
    Listening,
}

type ResultCallback = Box<dyn FnMut(Transcript) + Send>;
type ErrorCallback = Box<dyn FnMut(SpeechError) + Send>;

pub struct SpeechSession {
    engine: Box<dyn RecognitionEngine>,
    state: SpeechState,
    on_result: ResultCallback,
    on_error: ErrorCallback,
}

impl std::fmt::Debug for SpeechSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechSession")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Create and start a session.
///
/// Returns `None` when the backend has no recognizer. A recognizer that
/// fails to start reports through `on_error` and the session stays idle.
pub fn start_listening(
    backend: &dyn RecognitionBackend,
    settings: &RecognitionSettings,
    on_result: impl FnMut(Transcript) + Send + 'static,
    on_error: impl FnMut(SpeechError) + Send + 'static,
) -> Option<SpeechSession> {
    let Some(mut engine) = backend.create() else {
        warn!("speech recognition not supported on this platform");
        return None;
    };
    engine.configure(settings);

    let mut session = SpeechSession {
        engine,
        state: SpeechState::Idle,
        on_result: Box::new(on_result),
        on_error: Box::new(on_error),
    };
    if let Err(e) = session.start() {
        (session.on_error)(e);
    }
    Some(session)
}

impl SpeechSession {
    pub fn state(&self) -> SpeechState {
        self.state
    }

    pub fn is_listening(&self) -> bool {
        self.state == SpeechState::Listening
    }

    /// Idle -> Listening. A no-op while already listening.
    pub fn start(&mut self) -> Result<(), SpeechError> {
        if self.is_listening() {
            return Ok(());
        }
        self.engine.start()?;
        self.state = SpeechState::Listening;
        info!("listening");
        Ok(())
    }

    /// Listening -> Idle. A no-op while idle.
    pub fn stop(&mut self) {
        if !self.is_listening() {
            return;
        }
        self.engine.stop();
        self.state = SpeechState::Idle;
        info!("stopped listening");
    }

    pub fn handle_event(&mut self, event: RecognitionEvent) {
        match event {
            RecognitionEvent::Results(batch) => {
                if !self.is_listening() {
                    debug!(results = batch.len(), "results while idle dropped");
                    return;
                }
                self.emit_batch(batch);
            }
            RecognitionEvent::Error(payload) => {
                warn!(error = %payload, "speech recognition error");
                self.state = SpeechState::Idle;
                (self.on_error)(SpeechError::Engine(payload));
            }
            RecognitionEvent::End => {
                if self.is_listening() {
                    debug!("recognizer ended on its own");
                }
                self.state = SpeechState::Idle;
            }
        }
    }

    fn emit_batch(&mut self, batch: Vec<RecognitionResult>) {
        let mut interim = String::new();
        for result in batch {
            if result.is_final {
                (self.on_result)(Transcript {
                    text: result.transcript,
                    is_final: true,
                });
            } else {
                interim.push_str(&result.transcript);
            }
        }
        if !interim.is_empty() {
            (self.on_result)(Transcript {
                text: interim,
                is_final: false,
            });
        }
    }
}
