use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStreamBuilder, Sink};
use tokio::sync::mpsc::UnboundedSender;

use crate::domain::audio::AudioBuffer;

use super::{AudioPlayer, PlaybackError, PlaybackEvent};

/// How often the worker polls the active sink for completion while idle on
/// the command channel.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

enum PlayerCommand {
    Play {
        samples: Vec<f32>,
        channel_count: u16,
        sample_rate: u32,
        generation: u64,
        ack: Sender<()>,
    },
    Stop,
}

/// Playback on a dedicated worker thread.
///
/// The rodio output stream is not `Send`, so one thread owns it for the
/// lifetime of the player and everything else talks to it over a command
/// channel. Natural completions are reported on the event channel handed to
/// the constructor; dropping the player shuts the worker down.
pub struct RodioPlayer {
    commands: Sender<PlayerCommand>,
    generation: AtomicU64,
}

impl RodioPlayer {
    pub fn new(events: UnboundedSender<PlaybackEvent>) -> Result<Self, PlaybackError> {
        let (command_tx, command_rx) = std::sync::mpsc::channel();
        let (ready_tx, ready_rx) = std::sync::mpsc::channel();

        std::thread::Builder::new()
            .name("voxpro-playback".to_string())
            .spawn(move || worker_loop(command_rx, ready_tx, events))
            .map_err(|e| {
                PlaybackError::Stream(format!("failed to spawn playback thread: {}", e))
            })?;

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(Self {
                commands: command_tx,
                generation: AtomicU64::new(0),
            }),
            Ok(Err(message)) => Err(PlaybackError::DeviceUnavailable(message)),
            Err(_) => Err(PlaybackError::Stream(
                "playback thread exited during startup".to_string(),
            )),
        }
    }
}

impl AudioPlayer for RodioPlayer {
    fn play(&self, buffer: AudioBuffer) -> Result<u64, PlaybackError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let (ack_tx, ack_rx) = std::sync::mpsc::channel();

        self.commands
            .send(PlayerCommand::Play {
                samples: buffer.interleaved(),
                channel_count: buffer.channel_count(),
                sample_rate: buffer.sample_rate(),
                generation,
                ack: ack_tx,
            })
            .map_err(|_| PlaybackError::Stream("playback thread is gone".to_string()))?;

        // Wait until the worker has picked the command up so generations
        // start in the order the callers observe.
        ack_rx.recv().map_err(|_| {
            PlaybackError::Stream("playback thread dropped the request".to_string())
        })?;
        Ok(generation)
    }

    fn stop(&self) {
        // A closed channel means the worker is already gone; nothing to stop.
        let _ = self.commands.send(PlayerCommand::Stop);
    }
}

fn worker_loop(
    commands: Receiver<PlayerCommand>,
    ready: Sender<Result<(), String>>,
    events: UnboundedSender<PlaybackEvent>,
) {
    let stream = match OutputStreamBuilder::open_default_stream() {
        Ok(stream) => stream,
        Err(e) => {
            let _ = ready.send(Err(e.to_string()));
            return;
        }
    };
    let _ = ready.send(Ok(()));

    let mut active: Option<(Sink, u64)> = None;

    loop {
        match commands.recv_timeout(POLL_INTERVAL) {
            Ok(PlayerCommand::Play {
                samples,
                channel_count,
                sample_rate,
                generation,
                ack,
            }) => {
                if let Some((sink, preempted)) = active.take() {
                    tracing::debug!(generation = preempted, "preempting active playback");
                    sink.stop();
                }
                let sink = Sink::connect_new(stream.mixer());
                sink.append(SamplesBuffer::new(channel_count, sample_rate, samples));
                active = Some((sink, generation));
                let _ = ack.send(());
            }
            Ok(PlayerCommand::Stop) => {
                if let Some((sink, generation)) = active.take() {
                    tracing::debug!(generation, "playback stopped");
                    sink.stop();
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        let drained = matches!(&active, Some((sink, _)) if sink.empty());
        if drained {
            if let Some((_, generation)) = active.take() {
                tracing::debug!(generation, "playback finished");
                let _ = events.send(PlaybackEvent::Finished { generation });
            }
        }
    }
}
