use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver};

use voxpro::domain::speech::SpeechService;
use voxpro::infrastructure::encoders::LameMp3EncoderFactory;
use voxpro::infrastructure::playback::PlaybackEvent;
use voxpro::infrastructure::repositories::{
    GeminiSynthesisRepository, HistoryRepository, SettingsRepository,
};

pub mod fixtures;
pub mod stub_api;

use fixtures::RecordingPlayer;
use stub_api::StubSpeechApi;

pub struct TestContext {
    pub service: SpeechService,
    pub api: StubSpeechApi,
    pub player: Arc<RecordingPlayer>,
    pub events: UnboundedReceiver<PlaybackEvent>,
    pub data_dir: PathBuf,
    _dir: tempfile::TempDir,
}

impl TestContext {
    pub async fn new() -> Self {
        let api = StubSpeechApi::start().await;
        let dir = tempfile::tempdir().expect("Failed to create temp data dir");
        let data_dir = dir.path().to_path_buf();

        let (events_tx, events) = mpsc::unbounded_channel();
        let player = Arc::new(RecordingPlayer::new(events_tx));

        let service = build_service(api.base_url(), &data_dir, player.clone());

        Self {
            service,
            api,
            player,
            events,
            data_dir,
            _dir: dir,
        }
    }

    /// Builds a second service over the same data directory and stub API,
    /// the way a fresh process start would.
    pub fn restart(&self) -> SpeechService {
        let (events_tx, _events) = mpsc::unbounded_channel();
        build_service(
            self.api.base_url(),
            &self.data_dir,
            Arc::new(RecordingPlayer::new(events_tx)),
        )
    }
}

fn build_service(
    base_url: String,
    data_dir: &Path,
    player: Arc<RecordingPlayer>,
) -> SpeechService {
    let synthesis = Arc::new(
        GeminiSynthesisRepository::new(
            Some("test-api-key".to_string()),
            base_url,
            "gemini-test-model".to_string(),
        )
        .expect("Failed to create synthesis repository"),
    );
    let mp3_factory =
        Arc::new(LameMp3EncoderFactory::new().expect("Failed to create MP3 encoder factory"));

    SpeechService::new(
        synthesis,
        player,
        mp3_factory,
        Arc::new(SettingsRepository::new(data_dir)),
        Arc::new(HistoryRepository::new(data_dir)),
        true,
    )
}
