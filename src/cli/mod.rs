pub mod history;
pub mod preview;
pub mod settings;
pub mod speak;
pub mod voices;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tokio::sync::mpsc::UnboundedReceiver;
use uuid::Uuid;

use crate::domain::audio::AudioFormat;
use crate::domain::speech::{Pitch, SpeechService};
use crate::error::AppResult;
use crate::infrastructure::playback::PlaybackEvent;

#[derive(Debug, Parser)]
#[command(name = "voxpro")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Persona-driven text-to-speech from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert text to speech, play it, and record it in history
    Speak(SpeakArgs),
    /// Play a short sample of a voice persona
    Preview(PreviewArgs),
    /// List the available voice personas
    Voices(VoicesArgs),
    /// Inspect or prune the generation history
    History(HistoryArgs),
    /// Show or change the persisted speech settings
    Settings(SettingsArgs),
}

#[derive(Debug, Args)]
pub struct SpeakArgs {
    /// Text to convert. Reads stdin when omitted
    pub text: Option<String>,

    #[arg(long, help = "Voice persona label, e.g. \"Storyteller\"")]
    pub voice: Option<String>,

    #[arg(long, help = "Delivery speed between 0.5 and 2.0")]
    pub speed: Option<f32>,

    #[arg(long, value_enum)]
    pub pitch: Option<PitchArg>,

    #[arg(long, value_enum, default_value_t = FormatArg::Mp3)]
    pub format: FormatArg,

    /// Write the encoded audio to a file. The flag without a path picks a
    /// default name for the chosen format
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    pub output: Option<PathBuf>,

    /// Skip playback; still encodes and records the generation
    #[arg(long)]
    pub no_play: bool,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Voice persona label to sample
    pub voice: String,
}

#[derive(Debug, Args)]
pub struct VoicesArgs {
    /// Also print each persona's full acting instruction
    #[arg(long)]
    pub full: bool,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: HistoryCommands,
}

#[derive(Debug, Subcommand)]
pub enum HistoryCommands {
    /// List the recorded generations, newest first
    List,
    /// Remove one entry by its id
    Delete { id: Uuid },
    /// Remove every entry
    Clear,
}

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommands,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommands {
    /// Print the persisted settings
    Show,
    /// Change one or more settings
    Set(SettingsSetArgs),
}

#[derive(Debug, Args)]
pub struct SettingsSetArgs {
    #[arg(long, help = "Voice persona label")]
    pub voice: Option<String>,

    #[arg(long, help = "Delivery speed between 0.5 and 2.0")]
    pub speed: Option<f32>,

    #[arg(long, value_enum)]
    pub pitch: Option<PitchArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Mp3,
    Wav,
}

impl From<FormatArg> for AudioFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Mp3 => AudioFormat::Mp3,
            FormatArg::Wav => AudioFormat::Wav,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PitchArg {
    Low,
    Normal,
    High,
}

impl From<PitchArg> for Pitch {
    fn from(pitch: PitchArg) -> Self {
        match pitch {
            PitchArg::Low => Pitch::Low,
            PitchArg::Normal => Pitch::Normal,
            PitchArg::High => Pitch::High,
        }
    }
}

/// Blocks until the given playback generation finishes, feeding every
/// completion back into the service. Ctrl-C stops playback and returns.
pub async fn wait_for_playback(
    service: &mut SpeechService,
    events: &mut UnboundedReceiver<PlaybackEvent>,
    generation: u64,
) -> AppResult<()> {
    loop {
        tokio::select! {
            maybe_event = events.recv() => {
                match maybe_event {
                    Some(event) => {
                        let done = matches!(
                            event,
                            PlaybackEvent::Finished { generation: finished } if finished == generation
                        );
                        service.handle_playback_event(event);
                        if done {
                            return Ok(());
                        }
                    }
                    // The player thread is gone; nothing left to wait for
                    None => return Ok(()),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("interrupted, stopping playback");
                service.stop();
                return Ok(());
            }
        }
    }
}
