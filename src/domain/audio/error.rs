use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("pcm framing error: {0}")]
    Framing(String),
    #[error("mp3 encoder unavailable: {0}")]
    EncoderUnavailable(String),
    #[error("encode error: {0}")]
    Encode(String),
}

impl From<AudioError> for AppError {
    fn from(err: AudioError) -> Self {
        match err {
            AudioError::Base64(e) => AppError::Decode(format!("invalid base64 payload: {}", e)),
            AudioError::Framing(msg) => AppError::Decode(msg),
            AudioError::EncoderUnavailable(msg) => AppError::EncoderUnavailable(msg),
            AudioError::Encode(msg) => AppError::Internal(msg),
        }
    }
}
