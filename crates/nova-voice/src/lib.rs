//! Speech input and output for Nova.
//!
//! - `recognition`: listening state machine fed by engine events
//! - `synthesis`: single-utterance speaker with voice preference
//! - `chunk`: sentence-aligned splitting of long text
//! - `voice_call`: optional call provider with local fallback
//!
//! Engines are traits so hosts can plug in a platform backend; nothing here
//! assumes a browser.

pub mod chunk;
pub mod recognition;
pub mod synthesis;
pub mod voice_call;

pub use chunk::{chunk_text, DEFAULT_CHUNK_LIMIT};
pub use recognition::{
    start_listening, RecognitionBackend, RecognitionEngine, RecognitionEvent, RecognitionResult,
    RecognitionSettings, SpeechSession, SpeechState, Transcript,
};
pub use synthesis::{select_voice, SpeechParams, Speaker, SynthesisEngine, Utterance, Voice};
pub use voice_call::{Delivery, NoVoiceCall, SpeechOutput, VoiceCall, VoiceCallProvider};
