//! Refresh cycles driven through the HTTP client

use crate::integration::mock_server::{MockServerFixture, FAKE_MP3};
use amharic_tts::catalog::SampleCategory;
use amharic_tts::session::{AudioView, FormInput, SessionState, SubmissionController};
use amharic_tts::tts::VoiceId;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[tokio::test]
async fn test_submit_then_replay_on_empty_text() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_audio(FAKE_MP3, 1).await;
    let mut controller = SubmissionController::new(fixture.create_test_client());
    let mut session = SessionState::new();

    let first = controller
        .refresh(&mut session, FormInput::new("ሰላም", VoiceId::Mekdes, 1.0))
        .await;
    assert!(matches!(first.audio, AudioView::Fresh(_)));

    for speed in [0.8, 1.4, 2.0] {
        let pass = controller
            .refresh(&mut session, FormInput::new("", VoiceId::Ameha, speed))
            .await;
        let html = pass.audio.embed_html().unwrap();
        assert!(matches!(pass.audio, AudioView::Replay(_)));
        assert!(html.contains("data:audio/mp3;base64,"));
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_failed_synthesis_keeps_last_good_clip() {
    let fixture = MockServerFixture::new().await;
    let mut controller = SubmissionController::new(fixture.create_test_client());
    let mut session = SessionState::new();

    let ok = fixture.mock_audio(FAKE_MP3, 1).await;
    controller
        .refresh(&mut session, FormInput::new("ሰላም", VoiceId::Mekdes, 1.0))
        .await;
    ok.assert_async().await;
    ok.remove_async().await;

    let _err = fixture.mock_error_response(503, "busy").await;
    let pass = controller
        .refresh(&mut session, FormInput::new("ይቅርታ", VoiceId::Mekdes, 1.0))
        .await;

    assert!(pass.audio.error_message().unwrap().contains("busy"));
    assert_eq!(session.last_artifact().unwrap().bytes(), FAKE_MP3);
}

#[tokio::test]
async fn test_random_sample_is_synthesized_on_next_refresh() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_audio(FAKE_MP3, 1).await;
    let mut controller = SubmissionController::new(fixture.create_test_client());
    let mut session = SessionState::new();
    let mut rng = StdRng::seed_from_u64(42);

    let sample = session
        .request_sample(SampleCategory::Sentences, &mut rng)
        .to_string();
    let pass = controller
        .refresh(&mut session, FormInput::new("", VoiceId::Mekdes, 1.0))
        .await;
    assert_eq!(pass.text_field.value, sample);
    assert!(pass.text_field.prefilled);

    // Next refresh with the box cleared: no prefill, replay only.
    let pass = controller
        .refresh(&mut session, FormInput::new("", VoiceId::Mekdes, 1.0))
        .await;
    assert!(!pass.text_field.prefilled);
    assert!(matches!(pass.audio, AudioView::Replay(_)));
    mock.assert_async().await;
}
