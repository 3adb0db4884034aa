use super::buffer::AudioBuffer;
use super::error::AudioError;
use super::format::{AudioFormat, EncodedAudio};

/// MPEG-1 Layer III frame size in samples per channel.
pub const SAMPLES_PER_BLOCK: usize = 1152;

/// Fixed encoding bitrate.
pub const BITRATE_KBPS: u32 = 128;

/// Creates stateful block encoders for one encoding session.
///
/// Implementations probe their backing capability when the factory itself is
/// constructed, so a missing encoder surfaces while the application is being
/// wired instead of in the middle of an encode.
pub trait Mp3EncoderFactory: Send + Sync {
    fn create(
        &self,
        sample_rate: u32,
        channel_count: u16,
    ) -> Result<Box<dyn Mp3BlockEncoder>, AudioError>;
}

/// One encoding session. Blocks are fed in order; `finish` drains whatever
/// the encoder still buffers and must be called once, after the last block.
pub trait Mp3BlockEncoder {
    /// Encode one block of quantized samples. `right` is present for stereo
    /// sessions and always as long as `left`.
    fn encode_block(&mut self, left: &[i16], right: Option<&[i16]>)
        -> Result<Vec<u8>, AudioError>;

    fn finish(&mut self) -> Result<Vec<u8>, AudioError>;
}

/// Encode a buffer as MP3 at a fixed 128 kbps.
///
/// Samples are re-quantized to i16 and fed to the encoder in 1152-sample
/// blocks (the final block may be shorter), left and right jointly for
/// stereo. The encoder's flush output is appended after the last block.
pub fn encode(
    buffer: &AudioBuffer,
    factory: &dyn Mp3EncoderFactory,
) -> Result<EncodedAudio, AudioError> {
    let channel_count = buffer.channel_count();
    if channel_count > 2 {
        return Err(AudioError::Framing(format!(
            "mp3 supports mono or stereo, got {} channels",
            channel_count
        )));
    }

    let mut encoder = factory.create(buffer.sample_rate(), channel_count)?;

    let left = quantize_channel(buffer.channel(0));
    let right = if channel_count == 2 {
        Some(quantize_channel(buffer.channel(1)))
    } else {
        None
    };

    let frame_count = buffer.frame_count();
    let mut bytes = Vec::new();
    let mut offset = 0;
    while offset < frame_count {
        let end = (offset + SAMPLES_PER_BLOCK).min(frame_count);
        let chunk = encoder.encode_block(
            &left[offset..end],
            right.as_deref().map(|samples| &samples[offset..end]),
        )?;
        bytes.extend(chunk);
        offset = end;
    }

    bytes.extend(encoder.finish()?);

    Ok(EncodedAudio {
        format: AudioFormat::Mp3,
        bytes,
    })
}

/// Float→i16 scaling is asymmetric: negatives use the full -32768, positives
/// top out at 32767, so both extremes stay inside i16 without clipping.
fn quantize_channel(samples: &[f32]) -> Vec<i16> {
    samples
        .iter()
        .map(|&sample| {
            let scaled = if sample < 0.0 {
                sample * 32768.0
            } else {
                sample * 32767.0
            };
            scaled as i16
        })
        .collect()
}
