//! Integration tests for provider failures: surfaced once, never retried

use crate::integration::mock_server::MockServerFixture;
use amharic_tts::tts::{HttpSynthesisClient, SpeechSynthesisClient, SynthesisRequest, VoiceId};

fn request() -> SynthesisRequest {
    SynthesisRequest::new("ሰላም", VoiceId::Mekdes, 1.0).unwrap()
}

#[tokio::test]
async fn test_http_error_is_synthesis_failure_without_retry() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture.mock_error_response(500, "backend exploded").await;
    let client = fixture.create_test_client();

    let err = client.synthesize(&request()).await.unwrap_err();
    assert!(err.is_synthesis());
    assert_eq!(err.status(), Some(500));
    assert!(err.user_message().contains("backend exploded"));
    // expect(1): exactly one attempt
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unauthorized_without_body_uses_reason_phrase() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_error_response(401, "").await;
    let client = fixture.create_test_client();

    let err = client.synthesize(&request()).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(err.to_string().contains("Unauthorized"));
}

#[tokio::test]
async fn test_empty_audio_body_is_failure() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_audio(b"", 1).await;
    let client = fixture.create_test_client();

    let err = client.synthesize(&request()).await.unwrap_err();
    assert!(err.is_synthesis());
    assert!(err.to_string().contains("no audio"));
}

#[tokio::test]
async fn test_connection_refused_is_failure() {
    // Bind then drop to get a port with nothing listening.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = HttpSynthesisClient::builder()
        .endpoint(format!("http://127.0.0.1:{}/cognitiveservices/v1", port))
        .timeout_secs(2)
        .build()
        .unwrap();

    let err = client.synthesize(&request()).await.unwrap_err();
    assert!(err.is_synthesis());
    assert_eq!(err.status(), None);
    assert!(err.user_message().starts_with("Error generating speech:"));
}
