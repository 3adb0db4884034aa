use super::buffer::AudioBuffer;
use super::error::AudioError;

pub const BYTES_PER_SAMPLE: usize = 2;

/// Decode interleaved signed 16-bit little-endian PCM into a normalized buffer.
///
/// Each i16 maps to f32 by dividing by 32768.0, putting results in
/// [-1.0, 1.0). Channels are de-interleaved: sample `n` of the byte stream
/// lands in channel `n % channel_count`.
pub fn decode(
    bytes: &[u8],
    sample_rate: u32,
    channel_count: u16,
) -> Result<AudioBuffer, AudioError> {
    if channel_count == 0 {
        return Err(AudioError::Framing(
            "channel count must be at least 1".to_string(),
        ));
    }

    let frame_size = BYTES_PER_SAMPLE * channel_count as usize;
    if bytes.len() % frame_size != 0 {
        return Err(AudioError::Framing(format!(
            "{} bytes is not a whole number of {}-byte frames",
            bytes.len(),
            frame_size
        )));
    }

    let frame_count = bytes.len() / frame_size;
    let mut channels = vec![Vec::with_capacity(frame_count); channel_count as usize];

    for (index, sample_bytes) in bytes.chunks_exact(BYTES_PER_SAMPLE).enumerate() {
        let sample = i16::from_le_bytes([sample_bytes[0], sample_bytes[1]]);
        channels[index % channel_count as usize].push(sample as f32 / 32768.0);
    }

    Ok(AudioBuffer::new(channels, sample_rate))
}
