use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tokio::sync::mpsc::UnboundedSender;

use voxpro::domain::audio::AudioBuffer;
use voxpro::infrastructure::playback::{AudioPlayer, PlaybackError, PlaybackEvent};

/// One playback the recording player accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayedAudio {
    pub generation: u64,
    pub frame_count: usize,
    pub sample_rate: u32,
}

/// Stands in for the audio device: records what it was asked to play and
/// reports every playback as finished immediately.
pub struct RecordingPlayer {
    events: UnboundedSender<PlaybackEvent>,
    next_generation: AtomicU64,
    stops: AtomicUsize,
    played: Mutex<Vec<PlayedAudio>>,
}

impl RecordingPlayer {
    pub fn new(events: UnboundedSender<PlaybackEvent>) -> Self {
        Self {
            events,
            next_generation: AtomicU64::new(0),
            stops: AtomicUsize::new(0),
            played: Mutex::new(Vec::new()),
        }
    }

    pub fn played(&self) -> Vec<PlayedAudio> {
        self.played.lock().unwrap().clone()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }
}

impl AudioPlayer for RecordingPlayer {
    fn play(&self, buffer: AudioBuffer) -> Result<u64, PlaybackError> {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.played.lock().unwrap().push(PlayedAudio {
            generation,
            frame_count: buffer.frame_count(),
            sample_rate: buffer.sample_rate(),
        });
        let _ = self.events.send(PlaybackEvent::Finished { generation });
        Ok(generation)
    }

    fn stop(&self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }
}

/// Base64 payload of `frame_count` little-endian mono i16 samples, the
/// shape the speech API streams back.
pub fn pcm_payload(frame_count: usize) -> String {
    let bytes: Vec<u8> = (0..frame_count)
        .flat_map(|index| (((index % 200) as i16 - 100) * 250).to_le_bytes())
        .collect();
    STANDARD.encode(bytes)
}
