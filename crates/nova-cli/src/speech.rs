//! Terminal stand-ins for the speech engines.
//!
//! `ConsoleSynthesis` echoes each queued utterance to stderr so spoken output
//! stays visible and separate from the answer on stdout. A terminal has no
//! microphone recognizer, so `TerminalRecognition` reports none.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use nova_common::SpeechError;
use nova_voice::{RecognitionBackend, RecognitionEngine, SynthesisEngine, Utterance, Voice};

#[derive(Debug, Default)]
pub struct ConsoleSynthesis {
    speaking: AtomicBool,
}

impl SynthesisEngine for ConsoleSynthesis {
    fn voices(&self) -> Vec<Voice> {
        Vec::new()
    }

    fn speak(&self, utterance: Utterance) -> Result<(), SpeechError> {
        self.speaking.store(true, Ordering::SeqCst);
        let mut err = std::io::stderr().lock();
        writeln!(err, "[speech] {}", utterance.text)
            .map_err(|e| SpeechError::Engine(e.to_string()))?;
        // Output is synchronous, so the utterance has finished by now.
        self.speaking.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn cancel(&self) {
        self.speaking.store(false, Ordering::SeqCst);
    }

    fn is_speaking(&self) -> bool {
        self.speaking.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Default)]
pub struct TerminalRecognition;

impl RecognitionBackend for TerminalRecognition {
    fn create(&self) -> Option<Box<dyn RecognitionEngine>> {
        None
    }
}
