use serial_test::serial;

use voxpro::domain::speech::{Pitch, SynthesisRequest};
use voxpro::infrastructure::repositories::{
    GeminiSynthesisRepository, SynthesisError, SynthesisRepository,
};

use crate::helpers::fixtures::pcm_payload;
use crate::helpers::stub_api::{StubResponse, StubSpeechApi};

fn repository_for(api: &StubSpeechApi) -> GeminiSynthesisRepository {
    GeminiSynthesisRepository::new(
        Some("test-api-key".to_string()),
        api.base_url(),
        "gemini-test-model".to_string(),
    )
    .unwrap()
}

fn synthesis_request(text: &str) -> SynthesisRequest {
    SynthesisRequest {
        text: text.to_string(),
        voice_id: "Puck".to_string(),
        instruction: "Energetic and enthusiastic delivery".to_string(),
        speed: 1.5,
        pitch: Pitch::Low,
    }
}

#[tokio::test]
#[serial]
async fn it_should_send_the_gemini_wire_format() {
    let api = StubSpeechApi::start().await;
    api.respond_with(StubResponse::Audio(pcm_payload(48)));
    let repository = repository_for(&api);

    repository
        .synthesize(&synthesis_request("Check the envelope"))
        .await
        .unwrap();

    let recorded = api.requests();
    assert_eq!(recorded.len(), 1);
    assert_eq!(
        recorded[0].uri,
        "/v1beta/models/gemini-test-model:generateContent"
    );
    assert_eq!(recorded[0].api_key.as_deref(), Some("test-api-key"));

    let body = &recorded[0].body;
    assert_eq!(body["generationConfig"]["responseModalities"][0], "AUDIO");
    assert_eq!(
        body["generationConfig"]["speechConfig"]["voiceConfig"]["prebuiltVoiceConfig"]
            ["voiceName"],
        "Puck"
    );

    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Check the envelope"));
    assert!(prompt.contains("Energetic and enthusiastic delivery"));
    assert!(prompt.contains("- Delivery Speed: 1.5x"));
    assert!(prompt.contains("- Vocal Pitch: low"));
}

#[tokio::test]
#[serial]
async fn it_should_extract_the_audio_payload() {
    let api = StubSpeechApi::start().await;
    let payload = pcm_payload(480);
    api.respond_with(StubResponse::Audio(payload.clone()));
    let repository = repository_for(&api);

    let received = repository
        .synthesize(&synthesis_request("payload please"))
        .await
        .unwrap();

    assert_eq!(received, payload);
}

#[tokio::test]
#[serial]
async fn it_should_map_api_errors() {
    let api = StubSpeechApi::start().await;
    api.respond_with(StubResponse::Error(
        429,
        "Resource has been exhausted".to_string(),
    ));
    let repository = repository_for(&api);

    let result = repository.synthesize(&synthesis_request("too many")).await;

    match result {
        Err(SynthesisError::Api { status, message }) => {
            assert_eq!(status, 429);
            assert!(message.contains("Resource has been exhausted"));
        }
        other => panic!("expected an API error, got {:?}", other),
    }
}

#[tokio::test]
#[serial]
async fn it_should_report_missing_audio() {
    let api = StubSpeechApi::start().await;
    api.respond_with(StubResponse::Empty);
    let repository = repository_for(&api);

    let result = repository.synthesize(&synthesis_request("no audio")).await;

    assert!(matches!(result, Err(SynthesisError::MissingAudio)));
}
