/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Speech API request failed: {0}")]
    Transport(String),

    #[error("No audio data received from the speech API.")]
    MissingAudio,

    #[error("Could not decode the audio payload: {0}")]
    Decode(String),

    #[error("MP3 encoder unavailable: {0}")]
    EncoderUnavailable(String),

    #[error("Audio playback failed: {0}")]
    Playback(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Process exit code for this error. Usage errors exit with 2 so shell
    /// scripts can tell them apart from runtime failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) => 2,
            _ => 1,
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
