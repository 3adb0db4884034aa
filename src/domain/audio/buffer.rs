use std::time::Duration;

/// Decoded audio: normalized f32 samples in [-1.0, 1.0], one vec per channel.
///
/// Channels are stored de-interleaved and always hold the same number of
/// frames. Buffers are produced by the PCM decoder and treated as immutable
/// afterwards; playback and the container encoders only read from them.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    channels: Vec<Vec<f32>>,
    sample_rate: u32,
}

impl AudioBuffer {
    pub fn new(channels: Vec<Vec<f32>>, sample_rate: u32) -> Self {
        debug_assert!(!channels.is_empty(), "buffer needs at least one channel");
        debug_assert!(
            channels.windows(2).all(|pair| pair[0].len() == pair[1].len()),
            "all channels must hold the same number of frames"
        );
        Self {
            channels,
            sample_rate,
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channel_count(&self) -> u16 {
        self.channels.len() as u16
    }

    pub fn channel(&self, index: usize) -> &[f32] {
        &self.channels[index]
    }

    /// Number of samples per channel.
    pub fn frame_count(&self) -> usize {
        self.channels.first().map(|samples| samples.len()).unwrap_or(0)
    }

    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.frame_count() as f64 / self.sample_rate as f64)
    }

    /// Samples re-interleaved frame by frame (L R L R ...), the layout the
    /// playback device and WAV writer consume.
    pub fn interleaved(&self) -> Vec<f32> {
        let frame_count = self.frame_count();
        let mut samples = Vec::with_capacity(frame_count * self.channels.len());
        for frame in 0..frame_count {
            for channel in &self.channels {
                samples.push(channel[frame]);
            }
        }
        samples
    }
}
