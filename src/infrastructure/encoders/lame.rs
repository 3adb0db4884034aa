use mp3lame_encoder::{
    max_required_buffer_size, Bitrate, Builder, DualPcm, Encoder, FlushNoGap, MonoPcm, Quality,
};

use crate::domain::audio::{AudioError, Mp3BlockEncoder, Mp3EncoderFactory};

/// LAME-backed implementation of the MP3 encoding capability.
pub struct LameMp3EncoderFactory;

impl LameMp3EncoderFactory {
    /// Probe the LAME builder once so a missing backend surfaces as a
    /// configuration error during wiring, not mid-encode.
    pub fn new() -> Result<Self, AudioError> {
        Builder::new().ok_or_else(|| {
            AudioError::EncoderUnavailable("failed to initialize LAME".to_string())
        })?;
        Ok(Self)
    }
}

impl Mp3EncoderFactory for LameMp3EncoderFactory {
    fn create(
        &self,
        sample_rate: u32,
        channel_count: u16,
    ) -> Result<Box<dyn Mp3BlockEncoder>, AudioError> {
        let mut builder = Builder::new().ok_or_else(|| {
            AudioError::EncoderUnavailable("failed to initialize LAME".to_string())
        })?;
        builder
            .set_num_channels(channel_count as u8)
            .map_err(build_error)?;
        builder.set_sample_rate(sample_rate).map_err(build_error)?;
        // Kbps128 is the enum spelling of mp3::BITRATE_KBPS
        builder.set_brate(Bitrate::Kbps128).map_err(build_error)?;
        builder.set_quality(Quality::Good).map_err(build_error)?;
        let encoder = builder.build().map_err(build_error)?;

        Ok(Box::new(LameBlockEncoder { encoder }))
    }
}

struct LameBlockEncoder {
    encoder: Encoder,
}

impl Mp3BlockEncoder for LameBlockEncoder {
    fn encode_block(
        &mut self,
        left: &[i16],
        right: Option<&[i16]>,
    ) -> Result<Vec<u8>, AudioError> {
        // encode_to_vec/flush_to_vec write only into the Vec's spare
        // capacity, and LAME treats a zero-sized output buffer as "no size
        // check", so the worst-case capacity must be reserved up front.
        let mut out = Vec::with_capacity(max_required_buffer_size(left.len()));
        match right {
            Some(right) => {
                self.encoder
                    .encode_to_vec(DualPcm { left, right }, &mut out)
                    .map_err(encode_error)?;
            }
            None => {
                self.encoder
                    .encode_to_vec(MonoPcm(left), &mut out)
                    .map_err(encode_error)?;
            }
        }
        Ok(out)
    }

    fn finish(&mut self) -> Result<Vec<u8>, AudioError> {
        let mut out = Vec::with_capacity(max_required_buffer_size(0));
        self.encoder
            .flush_to_vec::<FlushNoGap>(&mut out)
            .map_err(encode_error)?;
        Ok(out)
    }
}

fn build_error(err: mp3lame_encoder::BuildError) -> AudioError {
    AudioError::EncoderUnavailable(format!("lame build failed: {:?}", err))
}

fn encode_error(err: mp3lame_encoder::EncodeError) -> AudioError {
    AudioError::Encode(format!("lame encode failed: {:?}", err))
}
