use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::voice::{self, VoicePersona};

pub const MIN_SPEED: f32 = 0.5;
pub const MAX_SPEED: f32 = 2.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pitch {
    Low,
    #[default]
    Normal,
    High,
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pitch::Low => write!(f, "low"),
            Pitch::Normal => write!(f, "normal"),
            Pitch::High => write!(f, "high"),
        }
    }
}

/// Last-used generation parameters, persisted across sessions and updated on
/// every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechSettings {
    pub speed: f32,
    pub pitch: Pitch,
    pub voice_id: String,
    pub voice_label: String,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        let persona = voice::default_persona();
        Self {
            speed: 1.0,
            pitch: Pitch::Normal,
            voice_id: persona.voice_id.to_string(),
            voice_label: persona.label.to_string(),
        }
    }
}

impl SpeechSettings {
    /// Resolve the stored voice against the catalog. Both id and label must
    /// match, so a selection that no longer ships falls back to the default
    /// persona instead of silently changing voices.
    pub fn persona(&self) -> &'static VoicePersona {
        voice::PERSONAS
            .iter()
            .find(|persona| {
                persona.label == self.voice_label && persona.voice_id == self.voice_id
            })
            .unwrap_or_else(|| voice::default_persona())
    }

    pub fn select_persona(&mut self, persona: &VoicePersona) {
        self.voice_id = persona.voice_id.to_string();
        self.voice_label = persona.label.to_string();
    }
}
