use std::time::Duration;

use uuid::Uuid;

use crate::domain::audio::{AudioFormat, EncodedAudio};

use super::settings::Pitch;

/// Fully resolved parameters handed to the synthesis provider.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice_id: String,
    pub instruction: String,
    pub speed: f32,
    pub pitch: Pitch,
}

/// One `generate` call. Unset fields fall back to the persisted settings;
/// set fields also update them.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub text: String,
    pub voice_label: Option<String>,
    pub speed: Option<f32>,
    pub pitch: Option<Pitch>,
    pub format: AudioFormat,
    pub play: bool,
}

impl GenerationRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice_label: None,
            speed: None,
            pitch: None,
            format: AudioFormat::Mp3,
            play: true,
        }
    }
}

/// What a successful generation produced.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub entry_id: Uuid,
    pub voice_label: String,
    pub char_count: usize,
    pub duration: Duration,
    pub audio: EncodedAudio,
    /// Playback generation number when audio was started, `None` for
    /// encode-only runs.
    pub playback_generation: Option<u64>,
}

/// What starting a preview produced.
#[derive(Debug, Clone)]
pub struct PreviewOutcome {
    pub voice_label: String,
    pub duration: Duration,
    pub playback_generation: u64,
}
