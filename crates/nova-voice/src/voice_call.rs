//! Optional voice-call delivery with local fallback.

use std::sync::Arc;

use async_trait::async_trait;
use nova_common::{SpeechError, UtteranceId};
use tracing::{info, warn};

use crate::synthesis::{SpeechParams, Speaker};

/// An established call that can speak text to the remote party.
#[async_trait]
pub trait VoiceCall: Send {
    async fn say(&mut self, text: &str) -> Result<(), SpeechError>;
    async fn hang_up(&mut self) -> Result<(), SpeechError>;
}

/// Source of voice calls, chosen at startup.
#[async_trait]
pub trait VoiceCallProvider: Send + Sync {
    async fn connect(&self) -> Result<Box<dyn VoiceCall>, SpeechError>;
}

/// Provider used when no call SDK is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVoiceCall;

#[async_trait]
impl VoiceCallProvider for NoVoiceCall {
    async fn connect(&self) -> Result<Box<dyn VoiceCall>, SpeechError> {
        Err(SpeechError::NotSupported("voice calls".into()))
    }
}

/// How a reply was spoken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Call,
    Local(UtteranceId),
}

/// Speaks replies over a voice call when possible, locally otherwise.
#[derive(Clone)]
pub struct SpeechOutput {
    provider: Arc<dyn VoiceCallProvider>,
    speaker: Speaker,
    params: SpeechParams,
}

impl std::fmt::Debug for SpeechOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechOutput")
            .field("speaker", &self.speaker)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl SpeechOutput {
    pub fn new(provider: Arc<dyn VoiceCallProvider>, speaker: Speaker) -> Self {
        Self {
            provider,
            speaker,
            params: SpeechParams::default(),
        }
    }

    /// Local playback only.
    pub fn local(speaker: Speaker) -> Self {
        Self::new(Arc::new(NoVoiceCall), speaker)
    }

    pub fn with_params(mut self, params: SpeechParams) -> Self {
        self.params = params;
        self
    }

    pub fn speaker(&self) -> &Speaker {
        &self.speaker
    }

    async fn try_call(&self, text: &str) -> Result<(), SpeechError> {
        let mut call = self.provider.connect().await?;
        call.say(text).await?;
        if let Err(e) = call.hang_up().await {
            warn!(error = %e, "voice call hang-up failed");
        }
        Ok(())
    }

    /// Deliver `text`; any call failure falls back to the local speaker.
    pub async fn deliver(&self, text: &str) -> Result<Delivery, SpeechError> {
        match self.try_call(text).await {
            Ok(()) => {
                info!("reply delivered over voice call");
                Ok(Delivery::Call)
            }
            Err(SpeechError::NotSupported(_)) => {
                self.speaker.speak(text, self.params).map(Delivery::Local)
            }
            Err(e) => {
                warn!(error = %e, "voice call unavailable, speaking locally");
                self.speaker.speak(text, self.params).map(Delivery::Local)
            }
        }
    }

    pub fn stop(&self) {
        self.speaker.stop_speaking();
    }
}
