pub mod rodio_player;

pub use rodio_player::RodioPlayer;

use crate::error::AppError;

use crate::domain::audio::AudioBuffer;

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("no audio output device available: {0}")]
    DeviceUnavailable(String),
    #[error("playback stream error: {0}")]
    Stream(String),
}

impl From<PlaybackError> for AppError {
    fn from(err: PlaybackError) -> Self {
        AppError::Playback(err.to_string())
    }
}

/// Emitted when a playback runs to its natural end. Stopped playbacks do not
/// emit, though a completion racing a stop can still arrive; consumers tell
/// the two apart by generation number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    Finished { generation: u64 },
}

/// Single-slot audio output.
///
/// Starting a new playback silences whatever was playing. Every start gets a
/// fresh generation number, returned to the caller and echoed in the
/// Finished event, so a stale completion can never be mistaken for the
/// current one.
pub trait AudioPlayer: Send + Sync {
    fn play(&self, buffer: AudioBuffer) -> Result<u64, PlaybackError>;
    fn stop(&self);
}

/// Playback stub for commands that never reach the audio device, so they
/// can run on machines without one.
pub struct NullPlayer;

impl AudioPlayer for NullPlayer {
    fn play(&self, _buffer: AudioBuffer) -> Result<u64, PlaybackError> {
        Err(PlaybackError::DeviceUnavailable(
            "playback is not enabled for this command".to_string(),
        ))
    }

    fn stop(&self) {}
}
