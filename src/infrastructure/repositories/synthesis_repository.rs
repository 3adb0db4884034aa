use async_trait::async_trait;

use crate::domain::speech::SynthesisRequest;

/// Sample rate of the PCM audio the synthesis API returns.
pub const SYNTHESIS_SAMPLE_RATE: u32 = 24_000;

/// The synthesis API returns mono audio.
pub const SYNTHESIS_CHANNELS: u16 = 1;

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("synthesis request failed: {0}")]
    Transport(String),
    #[error("synthesis API returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("No audio data received from the speech API.")]
    MissingAudio,
}

/// Repository for speech synthesis.
/// Abstracts the hosted provider behind one call so the rest of the
/// application never sees provider wire formats.
///
/// Implementations are responsible for:
/// - Building the provider's prompt/request from the resolved parameters
/// - Authentication and transport
/// - Extracting the audio payload and mapping provider failures
#[async_trait]
pub trait SynthesisRepository: Send + Sync {
    /// Synthesize speech for a fully resolved request.
    ///
    /// Returns the provider's base64-encoded 16-bit PCM payload (24 kHz
    /// mono); decoding happens in the audio pipeline, not here.
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<String, SynthesisError>;
}

/// Synthesis stub injected for commands that never call the speech API,
/// so they work without an API key.
pub struct UnconfiguredSynthesisRepository;

#[async_trait]
impl SynthesisRepository for UnconfiguredSynthesisRepository {
    async fn synthesize(&self, _request: &SynthesisRequest) -> Result<String, SynthesisError> {
        Err(SynthesisError::Transport(
            "synthesis is not configured for this command".to_string(),
        ))
    }
}
