pub mod gemini_synthesis_repository;
pub mod history_repository;
pub mod settings_repository;
pub mod synthesis_repository;

pub use gemini_synthesis_repository::GeminiSynthesisRepository;
pub use history_repository::HistoryRepository;
pub use settings_repository::SettingsRepository;
pub use synthesis_repository::{
    SynthesisError, SynthesisRepository, UnconfiguredSynthesisRepository, SYNTHESIS_CHANNELS,
    SYNTHESIS_SAMPLE_RATE,
};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
