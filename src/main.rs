use std::sync::Arc;

use clap::Parser;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use voxpro::cli::{self, Cli, Commands};
use voxpro::domain::speech::SpeechService;
use voxpro::error::AppError;
use voxpro::infrastructure::config::{Config, LogFormat};
use voxpro::infrastructure::encoders::LameMp3EncoderFactory;
use voxpro::infrastructure::playback::{AudioPlayer, NullPlayer, RodioPlayer};
use voxpro::infrastructure::repositories::{
    GeminiSynthesisRepository, HistoryRepository, SettingsRepository, SynthesisRepository,
    UnconfiguredSynthesisRepository,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    init_logging(&config);

    if let Err(e) = run(cli, config).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli, config: Config) -> Result<(), AppError> {
    tracing::debug!(data_dir = %config.data_dir.display(), "starting voxpro");

    let needs_synthesis = matches!(cli.command, Commands::Speak(_) | Commands::Preview(_));
    let needs_playback = match &cli.command {
        Commands::Speak(args) => !args.no_play,
        Commands::Preview(_) => true,
        _ => false,
    };

    let (events_tx, mut events_rx) = mpsc::unbounded_channel();

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Persisted stores under the data directory
    let settings_store = Arc::new(SettingsRepository::new(&config.data_dir));
    let history_store = Arc::new(HistoryRepository::new(&config.data_dir));

    // 2. Synthesis repository; only commands that synthesize need the API key
    let synthesis: Arc<dyn SynthesisRepository> = if needs_synthesis {
        Arc::new(GeminiSynthesisRepository::new(
            config.api_key.clone(),
            config.api_base_url.clone(),
            config.tts_model.clone(),
        )?)
    } else {
        Arc::new(UnconfiguredSynthesisRepository)
    };

    // 3. Audio output and the MP3 encoder
    let player: Arc<dyn AudioPlayer> = if needs_playback {
        Arc::new(RodioPlayer::new(events_tx.clone())?)
    } else {
        Arc::new(NullPlayer)
    };
    let mp3_factory = Arc::new(LameMp3EncoderFactory::new()?);

    // 4. The speech service ties it all together
    let mut service = SpeechService::new(
        synthesis,
        player,
        mp3_factory,
        settings_store,
        history_store,
        config.preview_cache_enabled,
    );

    match cli.command {
        Commands::Speak(args) => cli::speak::run(&mut service, &mut events_rx, args).await,
        Commands::Preview(args) => cli::preview::run(&mut service, &mut events_rx, args).await,
        Commands::Voices(args) => {
            cli::voices::run(service.settings(), args);
            Ok(())
        }
        Commands::History(args) => cli::history::run(&mut service, args.command),
        Commands::Settings(args) => cli::settings::run(&mut service, args.command),
    }
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voxpro=info".into()),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voxpro=info".into()),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
