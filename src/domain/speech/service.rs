use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use uuid::Uuid;

use crate::domain::audio::{self, AudioBuffer, AudioFormat, EncodedAudio, Mp3EncoderFactory};
use crate::domain::history::{HistoryEntry, HistoryLog};
use crate::domain::voice::{self, VoicePersona};
use crate::infrastructure::playback::{AudioPlayer, PlaybackEvent};
use crate::infrastructure::repositories::{
    HistoryRepository, SettingsRepository, SynthesisRepository, SYNTHESIS_CHANNELS,
    SYNTHESIS_SAMPLE_RATE,
};

use super::dto::{GenerationOutcome, GenerationRequest, PreviewOutcome, SynthesisRequest};
use super::error::SpeechServiceError;
use super::settings::{Pitch, SpeechSettings, MAX_SPEED, MIN_SPEED};
use super::status::GenerationStatus;

const PREVIEW_CACHE_CAPACITY: u64 = 32;
const PREVIEW_CACHE_IDLE: Duration = Duration::from_secs(30 * 60);

/// Coordinates the whole text-to-speech flow: synthesis, decoding,
/// container encoding, playback, history and persisted settings.
///
/// The service is single-writer. All mutating operations take `&mut self`,
/// so a caller that owns the service can never overlap two generations;
/// the `Generating` status guard exists for callers that queue requests.
pub struct SpeechService {
    synthesis: Arc<dyn SynthesisRepository>,
    player: Arc<dyn AudioPlayer>,
    mp3_factory: Arc<dyn Mp3EncoderFactory>,
    settings_store: Arc<SettingsRepository>,
    history_store: Arc<HistoryRepository>,
    settings: SpeechSettings,
    history: HistoryLog,
    status: GenerationStatus,
    last_error: Option<String>,
    active_generation: Option<u64>,
    preview_cache: Option<Cache<String, Arc<AudioBuffer>>>,
}

impl SpeechService {
    pub fn new(
        synthesis: Arc<dyn SynthesisRepository>,
        player: Arc<dyn AudioPlayer>,
        mp3_factory: Arc<dyn Mp3EncoderFactory>,
        settings_store: Arc<SettingsRepository>,
        history_store: Arc<HistoryRepository>,
        preview_cache_enabled: bool,
    ) -> Self {
        let settings = settings_store.load();
        let history = history_store.load();

        // Preview audio is deterministic per persona, so short-lived repeats
        // can skip the API round-trip entirely.
        let preview_cache = if preview_cache_enabled {
            Some(
                Cache::builder()
                    .max_capacity(PREVIEW_CACHE_CAPACITY)
                    .time_to_idle(PREVIEW_CACHE_IDLE)
                    .build(),
            )
        } else {
            None
        };

        Self {
            synthesis,
            player,
            mp3_factory,
            settings_store,
            history_store,
            settings,
            history,
            status: GenerationStatus::Idle,
            last_error: None,
            active_generation: None,
            preview_cache,
        }
    }

    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn settings(&self) -> &SpeechSettings {
        &self.settings
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Runs one full generation:
    ///
    /// 1. Validates the text and any settings overrides
    /// 2. Synthesizes speech through the repository
    /// 3. Decodes the PCM payload into a normalized buffer
    /// 4. Encodes the export container (MP3 or WAV)
    /// 5. Records the history entry and persists it
    /// 6. Starts playback unless the request opted out
    ///
    /// Any failure after validation moves the status to `Error` and records
    /// the message; validation failures leave the state untouched.
    pub async fn generate(
        &mut self,
        request: GenerationRequest,
    ) -> Result<GenerationOutcome, SpeechServiceError> {
        if request.text.trim().is_empty() {
            return Err(SpeechServiceError::Invalid(
                "Please enter some text to convert.".to_string(),
            ));
        }
        if self.status == GenerationStatus::Generating {
            return Err(SpeechServiceError::Invalid(
                "A generation is already in progress.".to_string(),
            ));
        }
        self.apply_overrides(&request)?;

        let persona = self.settings.persona();
        self.last_error = None;
        self.set_status(GenerationStatus::Generating);

        match self.run_generation(&request, persona).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                tracing::warn!(error = %e, "speech generation failed");
                self.last_error = Some(e.to_string());
                self.set_status(GenerationStatus::Error);
                Err(e)
            }
        }
    }

    async fn run_generation(
        &mut self,
        request: &GenerationRequest,
        persona: &'static VoicePersona,
    ) -> Result<GenerationOutcome, SpeechServiceError> {
        let char_count = request.text.chars().count();
        tracing::info!(
            voice = persona.label,
            voice_id = persona.voice_id,
            speed = self.settings.speed,
            pitch = %self.settings.pitch,
            char_count,
            format = %request.format,
            "starting speech generation"
        );

        let synthesis_request = SynthesisRequest {
            text: request.text.clone(),
            voice_id: persona.voice_id.to_string(),
            instruction: persona.instruction.to_string(),
            speed: self.settings.speed,
            pitch: self.settings.pitch,
        };
        let payload = self.synthesis.synthesize(&synthesis_request).await?;

        let pcm_bytes = audio::base64::decode(&payload)?;
        let buffer = audio::pcm::decode(&pcm_bytes, SYNTHESIS_SAMPLE_RATE, SYNTHESIS_CHANNELS)?;
        let duration = buffer.duration();
        tracing::debug!(
            frames = buffer.frame_count(),
            duration_ms = duration.as_millis() as u64,
            "audio decoded"
        );

        let encoded = self.encode(&buffer, request.format)?;

        let entry = HistoryEntry::new(&request.text, persona.label, encoded.clone());
        let entry_id = entry.id;
        self.history.push(entry);
        self.persist_history()?;

        // Playback preempts whatever was on the device; the generation
        // number keeps the stale completion from flipping the new status.
        let playback_generation = if request.play {
            let generation = self.player.play(buffer)?;
            self.active_generation = Some(generation);
            self.set_status(GenerationStatus::Playing);
            Some(generation)
        } else {
            self.set_status(GenerationStatus::Idle);
            None
        };

        Ok(GenerationOutcome {
            entry_id,
            voice_label: persona.label.to_string(),
            char_count,
            duration,
            audio: encoded,
            playback_generation,
        })
    }

    /// Plays a short fixed sample of the persona so users can compare voices.
    ///
    /// Previews always use neutral delivery (speed 1.0, normal pitch), never
    /// touch history or settings, and do not participate in the status
    /// machine beyond releasing a `Playing` state they preempt.
    pub async fn preview(&mut self, label: &str) -> Result<PreviewOutcome, SpeechServiceError> {
        let persona = voice::find_by_label(label)
            .ok_or_else(|| SpeechServiceError::Invalid(format!("Unknown voice: {}", label)))?;

        if self.status == GenerationStatus::Playing {
            self.stop();
        }

        let buffer = self.preview_buffer(persona).await?;
        let duration = buffer.duration();
        let generation = self.player.play((*buffer).clone())?;
        tracing::info!(voice = persona.label, generation, "previewing voice");

        Ok(PreviewOutcome {
            voice_label: persona.label.to_string(),
            duration,
            playback_generation: generation,
        })
    }

    async fn preview_buffer(
        &self,
        persona: &'static VoicePersona,
    ) -> Result<Arc<AudioBuffer>, SpeechServiceError> {
        if let Some(cache) = &self.preview_cache {
            if let Some(cached) = cache.get(persona.label).await {
                tracing::debug!(voice = persona.label, "preview cache hit");
                return Ok(cached);
            }
        }

        let request = SynthesisRequest {
            text: persona.preview_text(),
            voice_id: persona.voice_id.to_string(),
            instruction: persona.instruction.to_string(),
            speed: 1.0,
            pitch: Pitch::Normal,
        };
        let payload = self.synthesis.synthesize(&request).await?;
        let bytes = audio::base64::decode(&payload)?;
        let buffer = Arc::new(audio::pcm::decode(
            &bytes,
            SYNTHESIS_SAMPLE_RATE,
            SYNTHESIS_CHANNELS,
        )?);

        if let Some(cache) = &self.preview_cache {
            cache.insert(persona.label.to_string(), buffer.clone()).await;
        }

        Ok(buffer)
    }

    /// Stops playback and returns the status to `Idle`. Safe to call at any
    /// time; stopping while nothing plays is a no-op.
    pub fn stop(&mut self) {
        self.player.stop();
        self.active_generation = None;
        if self.status == GenerationStatus::Playing {
            self.set_status(GenerationStatus::Idle);
        }
    }

    /// Feeds a playback completion back into the status machine. Completions
    /// for anything but the active generation are ignored; the player keeps
    /// emitting them for preempted and previewed audio.
    pub fn handle_playback_event(&mut self, event: PlaybackEvent) {
        match event {
            PlaybackEvent::Finished { generation } => {
                if self.active_generation == Some(generation) {
                    self.active_generation = None;
                    if self.status == GenerationStatus::Playing {
                        self.set_status(GenerationStatus::Idle);
                    }
                } else {
                    tracing::debug!(generation, "ignoring stale playback completion");
                }
            }
        }
    }

    pub fn set_speed(&mut self, speed: f32) -> Result<(), SpeechServiceError> {
        validate_speed(speed)?;
        self.settings.speed = speed;
        self.persist_settings()
    }

    pub fn set_pitch(&mut self, pitch: Pitch) -> Result<(), SpeechServiceError> {
        self.settings.pitch = pitch;
        self.persist_settings()
    }

    pub fn set_voice(&mut self, label: &str) -> Result<&'static VoicePersona, SpeechServiceError> {
        let persona = voice::find_by_label(label)
            .ok_or_else(|| SpeechServiceError::Invalid(format!("Unknown voice: {}", label)))?;
        self.settings.select_persona(persona);
        self.persist_settings()?;
        Ok(persona)
    }

    pub fn delete_history_entry(&mut self, id: Uuid) -> Result<bool, SpeechServiceError> {
        let removed = self.history.delete(id);
        if removed {
            self.persist_history()?;
        }
        Ok(removed)
    }

    pub fn clear_history(&mut self) -> Result<usize, SpeechServiceError> {
        let removed = self.history.len();
        if removed > 0 {
            self.history.clear();
            self.persist_history()?;
        }
        Ok(removed)
    }

    fn apply_overrides(&mut self, request: &GenerationRequest) -> Result<(), SpeechServiceError> {
        let mut updated = self.settings.clone();
        if let Some(label) = &request.voice_label {
            let persona = voice::find_by_label(label)
                .ok_or_else(|| SpeechServiceError::Invalid(format!("Unknown voice: {}", label)))?;
            updated.select_persona(persona);
        }
        if let Some(speed) = request.speed {
            validate_speed(speed)?;
            updated.speed = speed;
        }
        if let Some(pitch) = request.pitch {
            updated.pitch = pitch;
        }
        if updated != self.settings {
            self.settings = updated;
            self.persist_settings()?;
        }
        Ok(())
    }

    fn encode(
        &self,
        buffer: &AudioBuffer,
        format: AudioFormat,
    ) -> Result<EncodedAudio, SpeechServiceError> {
        let encoded = match format {
            AudioFormat::Wav => audio::wav::encode(buffer)?,
            AudioFormat::Mp3 => audio::mp3::encode(buffer, self.mp3_factory.as_ref())?,
        };
        tracing::debug!(
            format = %encoded.format,
            size_bytes = encoded.bytes.len(),
            "audio encoded"
        );
        Ok(encoded)
    }

    fn persist_settings(&self) -> Result<(), SpeechServiceError> {
        self.settings_store
            .save(&self.settings)
            .map_err(|e| SpeechServiceError::Storage(e.to_string()))
    }

    fn persist_history(&self) -> Result<(), SpeechServiceError> {
        self.history_store
            .save(&self.history)
            .map_err(|e| SpeechServiceError::Storage(e.to_string()))
    }

    fn set_status(&mut self, status: GenerationStatus) {
        if self.status != status {
            tracing::debug!(from = %self.status, to = %status, "status transition");
            self.status = status;
        }
    }
}

fn validate_speed(speed: f32) -> Result<(), SpeechServiceError> {
    if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
        return Err(SpeechServiceError::Invalid(format!(
            "Speed must be between {} and {}.",
            MIN_SPEED, MAX_SPEED
        )));
    }
    Ok(())
}
