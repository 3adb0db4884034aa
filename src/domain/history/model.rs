use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::audio::EncodedAudio;

/// Most recent generations the log keeps before evicting the oldest.
pub const HISTORY_LIMIT: usize = 10;

/// Characters of source text kept on an entry.
const TEXT_PREVIEW_CHARS: usize = 100;

/// One past generation. The encoded audio stays in memory for replay and
/// export during the session but is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub text: String,
    pub voice_label: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub audio: Option<EncodedAudio>,
}

impl HistoryEntry {
    pub fn new(text: &str, voice_label: &str, audio: EncodedAudio) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: preview_text(text),
            voice_label: voice_label.to_string(),
            created_at: Utc::now(),
            audio: Some(audio),
        }
    }
}

fn preview_text(text: &str) -> String {
    let mut preview: String = text.chars().take(TEXT_PREVIEW_CHARS).collect();
    if text.chars().count() > TEXT_PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}

/// Newest-first list of past generations, capped at [`HISTORY_LIMIT`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new(entries: Vec<HistoryEntry>) -> Self {
        let mut log = Self { entries };
        log.entries.truncate(HISTORY_LIMIT);
        log
    }

    /// Prepend an entry, evicting the oldest once the cap is reached.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_LIMIT);
    }

    /// Remove the entry with the given id. Returns whether anything changed.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn find(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
