use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::speech::SynthesisRequest;
use crate::error::AppError;

use super::synthesis_repository::{SynthesisError, SynthesisRepository};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-tts";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const NATURALNESS_INSTRUCTIONS: &str = "\
1. BREATHING: Incorporate subtle, natural breath patterns between sentences and long phrases, just as a human speaker would.
2. PROSODY: Avoid any robotic or synthesized rhythm. Use natural pitch variation and volume shifts to emphasize key words based on the context of the text.
3. ARTICULATION: Ensure smooth, fluid transitions between words. Do not clip consonants too harshly.
4. EMOTIONAL INTELLIGENCE: Infuse the voice with the subtle emotional subtext implied by the text (e.g., a slight smile in the voice for friendly content, or a serious weight for warnings).
5. PUNCTUATION: Carefully interpret punctuation for timing. A comma is a brief lift, a period is a definitive breath and drop, and an ellipsis is a contemplative pause.
6. NO ROBOTIC ARTIFACTS: Every word must sound like it is being spoken by a professional voice actor in a studio environment.";

/// Gemini implementation of the synthesis repository, talking to the
/// `generateContent` REST endpoint with the AUDIO response modality.
pub struct GeminiSynthesisRepository {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiSynthesisRepository {
    /// Build the repository. The API key is checked here, when the
    /// application is wired, so a missing key fails the command before any
    /// work starts. No request timeout is configured: synthesis of long
    /// texts can legitimately take a while.
    pub fn new(
        api_key: Option<String>,
        base_url: String,
        model: String,
    ) -> Result<Self, AppError> {
        let api_key = api_key.filter(|key| !key.trim().is_empty()).ok_or_else(|| {
            AppError::Config(
                "GEMINI_API_KEY is not set. Add it to the environment or a .env file to enable synthesis.".to_string(),
            )
        })?;

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            base_url,
            model,
        })
    }
}

#[async_trait]
impl SynthesisRepository for GeminiSynthesisRepository {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<String, SynthesisError> {
        let start_time = std::time::Instant::now();
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let prompt = build_prompt(request);

        tracing::info!(
            model = %self.model,
            voice = %request.voice_id,
            speed = request.speed,
            pitch = %request.pitch,
            text_length = request.text.len(),
            "calling speech synthesis API"
        );

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![TextPart { text: &prompt }],
            }],
            generation_config: GenerationConfig {
                response_modalities: ["AUDIO"],
                speech_config: SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: &request.voice_id,
                        },
                    },
                },
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "synthesis request failed");
                SynthesisError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = parse_api_error(&body).unwrap_or_else(|| snippet(&body));
            tracing::error!(
                status = status.as_u16(),
                message = %message,
                "synthesis API returned an error"
            );
            return Err(SynthesisError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| SynthesisError::Transport(format!("invalid response body: {}", e)))?;
        let payload = extract_audio_payload(parsed)?;

        tracing::info!(
            provider = "gemini",
            model = %self.model,
            voice = %request.voice_id,
            latency_ms = start_time.elapsed().as_millis() as u64,
            payload_size = payload.len(),
            "synthesis completed"
        );

        Ok(payload)
    }
}

/// Wrap the text in the acting prompt: persona direction, delivery
/// parameters, and the fixed naturalness directions.
fn build_prompt(request: &SynthesisRequest) -> String {
    format!(
        "Task: High-Fidelity Human-Like Speech Synthesis.\n\n\
         Voice Acting Persona:\n{instruction}\n\n\
         Audio Parameters:\n\
         - Delivery Speed: {speed}x (relative to a natural baseline)\n\
         - Vocal Pitch: {pitch}\n\n\
         CRITICAL INSTRUCTIONS FOR NATURALNESS:\n{naturalness}\n\n\
         Text to convert:\n{text}",
        instruction = request.instruction,
        speed = request.speed,
        pitch = request.pitch,
        naturalness = NATURALNESS_INSTRUCTIONS,
        text = request.text,
    )
}

fn extract_audio_payload(response: GenerateContentResponse) -> Result<String, SynthesisError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.inline_data)
        .and_then(|inline| inline.data)
        .filter(|data| !data.is_empty())
        .ok_or(SynthesisError::MissingAudio)
}

fn parse_api_error(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorResponse>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .and_then(|detail| detail.message)
}

fn snippet(body: &str) -> String {
    body.chars().take(300).collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_modalities: [&'a str; 1],
    speech_config: SpeechConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig<'a> {
    voice_config: VoiceConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig<'a> {
    prebuilt_voice_config: PrebuiltVoiceConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig<'a> {
    voice_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CandidatePart {
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    data: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}
