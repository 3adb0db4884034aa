use tokio::sync::mpsc::UnboundedReceiver;

use crate::domain::speech::SpeechService;
use crate::error::AppResult;
use crate::infrastructure::playback::PlaybackEvent;

use super::{wait_for_playback, PreviewArgs};

pub async fn run(
    service: &mut SpeechService,
    events: &mut UnboundedReceiver<PlaybackEvent>,
    args: PreviewArgs,
) -> AppResult<()> {
    let outcome = service.preview(&args.voice).await?;
    println!(
        "Previewing {} ({:.1}s)...",
        outcome.voice_label,
        outcome.duration.as_secs_f32()
    );
    wait_for_playback(service, events, outcome.playback_generation).await
}
