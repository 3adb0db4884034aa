use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::domain::audio::AudioFormat;
use crate::domain::speech::{GenerationRequest, Pitch, SpeechService};
use crate::error::{AppError, AppResult};
use crate::infrastructure::playback::PlaybackEvent;

use super::{wait_for_playback, SpeakArgs};

pub async fn run(
    service: &mut SpeechService,
    events: &mut UnboundedReceiver<PlaybackEvent>,
    args: SpeakArgs,
) -> AppResult<()> {
    let text = read_text(args.text)?;

    let mut request = GenerationRequest::new(text);
    request.voice_label = args.voice;
    request.speed = args.speed;
    request.pitch = args.pitch.map(Pitch::from);
    request.format = args.format.into();
    request.play = !args.no_play;

    let outcome = service.generate(request).await?;
    println!(
        "Generated {:.1}s of speech with {} ({} characters).",
        outcome.duration.as_secs_f32(),
        outcome.voice_label,
        outcome.char_count
    );

    if let Some(path) = args.output {
        let path = resolve_output_path(path, outcome.audio.format);
        std::fs::write(&path, &outcome.audio.bytes).map_err(|e| {
            AppError::Storage(format!("could not write {}: {}", path.display(), e))
        })?;
        println!(
            "Wrote {} bytes to {}.",
            outcome.audio.bytes.len(),
            path.display()
        );
    }

    if let Some(generation) = outcome.playback_generation {
        wait_for_playback(service, events, generation).await?;
    }

    Ok(())
}

fn read_text(arg: Option<String>) -> AppResult<String> {
    if let Some(text) = arg {
        return Ok(text);
    }
    if io::stdin().is_terminal() {
        return Err(AppError::InvalidInput(
            "Provide text as an argument or pipe it through stdin.".to_string(),
        ));
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| AppError::Internal(format!("could not read stdin: {}", e)))?;
    Ok(buf)
}

fn resolve_output_path(path: PathBuf, format: AudioFormat) -> PathBuf {
    if path.as_os_str().is_empty() {
        PathBuf::from(format.default_export_filename())
    } else {
        path
    }
}
