//! Mock HTTP server setup for integration tests

use amharic_tts::tts::HttpSynthesisClient;
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::sync::Arc;
use tokio::sync::Mutex;

pub const SYNTH_PATH: &str = "/cognitiveservices/v1";

/// A few bytes that look like the start of an MP3 file.
pub const FAKE_MP3: &[u8] = b"ID3\x04\x00\x00\x00\x00\x00\x00\xff\xfb\x90\x64";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, SYNTH_PATH)
    }

    /// Create a client pointed at the mock server
    pub fn create_test_client(&self) -> HttpSynthesisClient {
        HttpSynthesisClient::builder()
            .endpoint(self.endpoint())
            .api_key("test-key")
            .timeout_secs(5)
            .build()
            .expect("client should build against mock endpoint")
    }

    /// Successful synthesis returning `audio`, expected to be hit `hits` times
    pub async fn mock_audio(&self, audio: &[u8], hits: usize) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", SYNTH_PATH)
            .match_header("content-type", "application/ssml+xml")
            .with_status(200)
            .with_header("content-type", "audio/mpeg")
            .with_body(audio)
            .expect(hits)
            .create_async()
            .await
    }

    /// Successful synthesis only when the SSML body matches `pattern`
    pub async fn mock_audio_for_body(&self, pattern: &str, audio: &[u8]) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", SYNTH_PATH)
            .match_body(Matcher::Regex(pattern.to_string()))
            .with_status(200)
            .with_body(audio)
            .expect(1)
            .create_async()
            .await
    }

    /// Create a mock for an error response
    pub async fn mock_error_response(&self, status: usize, error_body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", SYNTH_PATH)
            .with_status(status)
            .with_body(error_body)
            .expect(1)
            .create_async()
            .await
    }
}
