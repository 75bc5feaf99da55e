//! Provider request shape and successful synthesis

use crate::integration::mock_server::{MockServerFixture, FAKE_MP3, SYNTH_PATH};
use amharic_tts::tts::{SpeechSynthesisClient, SynthesisRequest, VoiceId};
use mockito::Matcher;

#[tokio::test]
async fn test_synthesize_returns_provider_audio() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_audio(FAKE_MP3, 1).await;
    let client = fixture.create_test_client();

    let request = SynthesisRequest::new("ሰላም", VoiceId::Mekdes, 1.0).unwrap();
    let artifact = client.synthesize(&request).await.unwrap();

    assert_eq!(artifact.bytes(), FAKE_MP3);
    assert_eq!(artifact.mime_type(), "audio/mp3");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_carries_voice_rate_and_headers() {
    let fixture = MockServerFixture::new().await;
    let mock = {
        let mut server = fixture.server.lock().await;
        server
            .mock("POST", SYNTH_PATH)
            .match_header("content-type", "application/ssml+xml")
            .match_header("ocp-apim-subscription-key", "test-key")
            .match_header(
                "x-microsoft-outputformat",
                "audio-24khz-48kbitrate-mono-mp3",
            )
            .match_header("x-requestid", Matcher::Regex("^[0-9a-f-]{36}$".to_string()))
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex("<voice name='am-ET-AmehaNeural'>".to_string()),
                Matcher::Regex("<prosody rate='-50%'>".to_string()),
                Matcher::Regex("xml:lang='am-ET'".to_string()),
            ]))
            .with_status(200)
            .with_body(FAKE_MP3)
            .expect(1)
            .create_async()
            .await
    };
    let client = fixture.create_test_client();

    let request = SynthesisRequest::new("ጤና ይስጥልኝ", VoiceId::Ameha, 0.5).unwrap();
    client.synthesize(&request).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_text_is_escaped_in_body() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_audio_for_body("<prosody rate='\\+100%'>1 &lt; 2 &amp; 3</prosody>", FAKE_MP3)
        .await;
    let client = fixture.create_test_client();

    let request = SynthesisRequest::new("1 < 2 & 3", VoiceId::Mekdes, 2.0).unwrap();
    client.synthesize(&request).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_same_request_twice_hits_provider_twice() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_audio(FAKE_MP3, 2).await;
    let client = fixture.create_test_client();

    let request = SynthesisRequest::new("አመሰግናለሁ", VoiceId::Mekdes, 1.0).unwrap();
    client.synthesize(&request).await.unwrap();
    client.synthesize(&request).await.unwrap();
    mock.assert_async().await;
}
