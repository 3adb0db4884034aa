use serial_test::serial;

use voxpro::domain::audio::AudioFormat;
use voxpro::domain::history::HISTORY_LIMIT;
use voxpro::domain::speech::{GenerationRequest, GenerationStatus, SpeechServiceError};
use voxpro::infrastructure::playback::PlaybackEvent;

use crate::helpers::fixtures::pcm_payload;
use crate::helpers::stub_api::StubResponse;
use crate::helpers::TestContext;

#[tokio::test]
#[serial]
async fn it_should_speak_text_through_the_full_pipeline() {
    let mut ctx = TestContext::new().await;
    ctx.api.respond_with(StubResponse::Audio(pcm_payload(2400)));

    let mut request = GenerationRequest::new("Hello from the terminal");
    request.format = AudioFormat::Wav;
    let outcome = ctx.service.generate(request).await.unwrap();

    assert_eq!(outcome.voice_label, "YouTube Narrator");
    assert_eq!(outcome.duration.as_millis(), 100);
    assert_eq!(&outcome.audio.bytes[..4], b"RIFF");
    assert_eq!(ctx.service.status(), GenerationStatus::Playing);

    let played = ctx.player.played();
    assert_eq!(played.len(), 1);
    assert_eq!(played[0].frame_count, 2400);
    assert_eq!(played[0].sample_rate, 24000);

    // History reached the disk, not just memory
    assert!(ctx.data_dir.join("history.json").exists());
    assert_eq!(
        ctx.service.history().entries()[0].text,
        "Hello from the terminal"
    );

    let event = ctx.events.recv().await.expect("playback completion");
    ctx.service.handle_playback_event(event);
    assert_eq!(ctx.service.status(), GenerationStatus::Idle);
}

#[tokio::test]
#[serial]
async fn it_should_encode_mp3_with_the_bundled_encoder() {
    let mut ctx = TestContext::new().await;
    ctx.api.respond_with(StubResponse::Audio(pcm_payload(4800)));

    let mut request = GenerationRequest::new("mp3 is the default format");
    request.play = false;
    let outcome = ctx.service.generate(request).await.unwrap();

    assert_eq!(outcome.audio.format, AudioFormat::Mp3);
    let bytes = &outcome.audio.bytes;
    assert!(!bytes.is_empty());
    // MPEG frame sync: eleven set bits at a frame boundary
    let sync = bytes
        .windows(2)
        .any(|pair| pair[0] == 0xFF && pair[1] & 0xE0 == 0xE0);
    assert!(sync, "no MPEG frame sync in encoder output");
}

#[tokio::test]
#[serial]
async fn it_should_reject_empty_text_before_calling_the_api() {
    let mut ctx = TestContext::new().await;

    let result = ctx.service.generate(GenerationRequest::new("   \n")).await;

    assert!(matches!(result, Err(SpeechServiceError::Invalid(_))));
    assert_eq!(ctx.api.request_count(), 0);
    assert_eq!(ctx.service.status(), GenerationStatus::Idle);
}

#[tokio::test]
#[serial]
async fn it_should_cap_history_at_ten_entries() {
    let mut ctx = TestContext::new().await;
    ctx.api.respond_with(StubResponse::Audio(pcm_payload(48)));

    for index in 0..12 {
        let mut request = GenerationRequest::new(format!("take {}", index));
        request.play = false;
        ctx.service.generate(request).await.unwrap();
    }

    assert_eq!(ctx.service.history().len(), HISTORY_LIMIT);
    assert_eq!(ctx.service.history().entries()[0].text, "take 11");

    // The cap also holds through a reload from disk
    let restarted = ctx.restart();
    assert_eq!(restarted.history().len(), HISTORY_LIMIT);
    assert_eq!(restarted.history().entries()[0].text, "take 11");
}

#[tokio::test]
#[serial]
async fn it_should_preview_with_neutral_delivery() {
    let mut ctx = TestContext::new().await;
    ctx.api.respond_with(StubResponse::Audio(pcm_payload(240)));
    ctx.service.set_speed(1.6).unwrap();

    let outcome = ctx.service.preview("Zen Guide").await.unwrap();
    assert_eq!(outcome.voice_label, "Zen Guide");

    let recorded = ctx.api.requests();
    assert_eq!(recorded.len(), 1);
    let body = &recorded[0].body;
    assert_eq!(
        body["generationConfig"]["speechConfig"]["voiceConfig"]["prebuiltVoiceConfig"]
            ["voiceName"],
        "Zephyr"
    );
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("I am your Zen Guide voice"));
    // The persisted 1.6x speed must not leak into the preview
    assert!(prompt.contains("- Delivery Speed: 1x"));

    // A repeat is served from the cache and still reaches the player
    ctx.service.preview("Zen Guide").await.unwrap();
    assert_eq!(ctx.api.request_count(), 1);
    assert_eq!(ctx.player.played().len(), 2);

    assert!(ctx.service.history().is_empty());
    assert_eq!(ctx.service.settings().speed, 1.6);
}

#[tokio::test]
#[serial]
async fn it_should_surface_api_failures_as_error_status() {
    let mut ctx = TestContext::new().await;
    ctx.api
        .respond_with(StubResponse::Error(500, "backend exploded".to_string()));

    let result = ctx
        .service
        .generate(GenerationRequest::new("will fail"))
        .await;

    assert!(matches!(result, Err(SpeechServiceError::Synthesis(_))));
    assert_eq!(ctx.service.status(), GenerationStatus::Error);
    assert!(ctx
        .service
        .last_error()
        .unwrap()
        .contains("backend exploded"));
    assert!(ctx.service.history().is_empty());
    assert!(ctx.player.played().is_empty());
}

#[tokio::test]
#[serial]
async fn it_should_stop_playback_and_ignore_the_late_completion() {
    let mut ctx = TestContext::new().await;
    ctx.api.respond_with(StubResponse::Audio(pcm_payload(240)));

    let first = ctx
        .service
        .generate(GenerationRequest::new("first"))
        .await
        .unwrap();
    ctx.service.stop();
    assert_eq!(ctx.service.status(), GenerationStatus::Idle);
    assert_eq!(ctx.player.stop_count(), 1);

    ctx.service
        .generate(GenerationRequest::new("second"))
        .await
        .unwrap();
    assert_eq!(ctx.service.status(), GenerationStatus::Playing);

    // The completion for the stopped playback is already queued; it must
    // not end the one now running
    let stale = ctx.events.recv().await.expect("stale completion");
    assert_eq!(
        stale,
        PlaybackEvent::Finished {
            generation: first.playback_generation.unwrap()
        }
    );
    ctx.service.handle_playback_event(stale);
    assert_eq!(ctx.service.status(), GenerationStatus::Playing);

    let current = ctx.events.recv().await.expect("current completion");
    ctx.service.handle_playback_event(current);
    assert_eq!(ctx.service.status(), GenerationStatus::Idle);
}

#[tokio::test]
#[serial]
async fn it_should_persist_settings_overrides_across_instances() {
    let mut ctx = TestContext::new().await;
    ctx.api.respond_with(StubResponse::Audio(pcm_payload(240)));

    let mut request = GenerationRequest::new("make it dramatic");
    request.voice_label = Some("Storyteller".to_string());
    request.speed = Some(1.25);
    request.play = false;
    ctx.service.generate(request).await.unwrap();

    let restarted = ctx.restart();
    assert_eq!(restarted.settings().voice_label, "Storyteller");
    assert_eq!(restarted.settings().voice_id, "Kore");
    assert_eq!(restarted.settings().speed, 1.25);
}
