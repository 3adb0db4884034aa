use crate::domain::audio::AudioError;
use crate::error::AppError;
use crate::infrastructure::playback::PlaybackError;
use crate::infrastructure::repositories::SynthesisError;

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
    #[error(transparent)]
    Audio(#[from] AudioError),
    #[error(transparent)]
    Playback(#[from] PlaybackError),
    #[error("storage error: {0}")]
    Storage(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<SpeechServiceError> for AppError {
    fn from(err: SpeechServiceError) -> Self {
        match err {
            SpeechServiceError::Invalid(msg) => AppError::InvalidInput(msg),
            SpeechServiceError::Synthesis(SynthesisError::MissingAudio) => AppError::MissingAudio,
            SpeechServiceError::Synthesis(e) => AppError::Transport(e.to_string()),
            SpeechServiceError::Audio(e) => e.into(),
            SpeechServiceError::Playback(e) => AppError::Playback(e.to_string()),
            SpeechServiceError::Storage(msg) => AppError::Storage(msg),
            SpeechServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
