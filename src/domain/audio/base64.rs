use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::error::AudioError;

/// Decode the base64 audio payload returned by the synthesis API.
pub fn decode(payload: &str) -> Result<Vec<u8>, AudioError> {
    Ok(STANDARD.decode(payload)?)
}
