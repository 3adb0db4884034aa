use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Neutral,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Neutral => write!(f, "neutral"),
        }
    }
}

/// One voice persona: a prebuilt synthesis voice paired with an acting
/// direction that shapes its delivery.
///
/// `voice_id` names the provider's prebuilt voice and may repeat across
/// personas; `label` is the unique key users select by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoicePersona {
    pub voice_id: &'static str,
    pub label: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub gender: Gender,
    pub instruction: &'static str,
}

impl VoicePersona {
    /// Introduction line spoken when the user previews this persona.
    pub fn preview_text(&self) -> String {
        format!(
            "Hello! I am your {} voice. I am designed to be {}. How can I help you today?",
            self.label,
            self.name.to_lowercase()
        )
    }
}
