use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::history::HistoryLog;

use super::StorageError;

const HISTORY_FILE: &str = "history.json";

/// JSON-file store for the generation history.
///
/// Only metadata is written; audio payloads live on the in-memory entries
/// and are skipped during serialization.
pub struct HistoryRepository {
    path: PathBuf,
}

impl HistoryRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(HISTORY_FILE),
        }
    }

    /// Load persisted history, empty on first run or when the file cannot be
    /// read or parsed.
    pub fn load(&self) -> HistoryLog {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return HistoryLog::default(),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to read history, starting empty"
                );
                return HistoryLog::default();
            }
        };

        match serde_json::from_str::<HistoryLog>(&contents) {
            Ok(log) => HistoryLog::new(log.entries().to_vec()),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "history file is corrupt, starting empty"
                );
                HistoryLog::default()
            }
        }
    }

    pub fn save(&self, log: &HistoryLog) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(log)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
