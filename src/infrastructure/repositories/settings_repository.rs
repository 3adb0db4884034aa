use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::speech::SpeechSettings;

use super::StorageError;

const SETTINGS_FILE: &str = "settings.json";

/// JSON-file store for the last-used generation settings.
pub struct SettingsRepository {
    path: PathBuf,
}

impl SettingsRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SETTINGS_FILE),
        }
    }

    /// Load persisted settings. A missing file means first run; a corrupt or
    /// unreadable file is logged and treated the same, so startup never
    /// fails on it.
    pub fn load(&self) -> SpeechSettings {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return SpeechSettings::default(),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to read settings, using defaults"
                );
                return SpeechSettings::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "settings file is corrupt, using defaults"
                );
                SpeechSettings::default()
            }
        }
    }

    pub fn save(&self, settings: &SpeechSettings) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
