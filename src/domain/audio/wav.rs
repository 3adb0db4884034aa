use std::io::Cursor;

use hound::{SampleFormat, WavSpec, WavWriter};

use super::buffer::AudioBuffer;
use super::error::AudioError;
use super::format::{AudioFormat, EncodedAudio};

/// Encode a buffer as a 16-bit PCM RIFF/WAVE stream.
///
/// Floats are re-quantized with `(sample * 32768.0).round()` saturated to the
/// i16 range (round half away from zero). The writer carries no timestamps or
/// tool tags, so the same buffer always produces identical bytes.
pub fn encode(buffer: &AudioBuffer) -> Result<EncodedAudio, AudioError> {
    let spec = WavSpec {
        channels: buffer.channel_count(),
        sample_rate: buffer.sample_rate(),
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = WavWriter::new(&mut cursor, spec).map_err(wav_error)?;
    for sample in buffer.interleaved() {
        writer.write_sample(quantize(sample)).map_err(wav_error)?;
    }
    writer.finalize().map_err(wav_error)?;

    Ok(EncodedAudio {
        format: AudioFormat::Wav,
        bytes: cursor.into_inner(),
    })
}

fn quantize(sample: f32) -> i16 {
    (sample * 32768.0).round().clamp(i16::MIN as f32, i16::MAX as f32) as i16
}

fn wav_error(err: hound::Error) -> AudioError {
    AudioError::Encode(format!("wav write failed: {}", err))
}
