//! TTS (Text-to-Speech) client.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::Instrument;

use super::ssml::build_ssml;
use super::staging::StagedAudio;
use super::types::{AudioArtifact, SynthesisRequest};
use crate::config::{SynthesisConfig, DEFAULT_OUTPUT_FORMAT, DEFAULT_TIMEOUT_SECS};
use crate::{Error, ErrorContext, Result};

/// Turns one utterance into one audio artifact.
///
/// Implementations make at most one attempt per call; retries, if any, are the
/// caller's decision.
#[async_trait]
pub trait SpeechSynthesisClient: Send + Sync {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioArtifact>;

    fn name(&self) -> &'static str;
}

#[async_trait]
impl<T: SpeechSynthesisClient + ?Sized> SpeechSynthesisClient for Arc<T> {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioArtifact> {
        (**self).synthesize(request).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Client for a neural TTS provider that accepts SSML over HTTP POST.
pub struct HttpSynthesisClient {
    http_client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    output_format: String,
    user_agent: String,
}

impl HttpSynthesisClient {
    pub fn builder() -> HttpSynthesisClientBuilder {
        HttpSynthesisClientBuilder::new()
    }

    pub fn from_config(config: &SynthesisConfig) -> Result<Self> {
        let mut builder = Self::builder()
            .endpoint(config.endpoint.clone())
            .output_format(config.output_format.clone())
            .timeout_secs(config.timeout_secs)
            .user_agent(config.user_agent.clone());
        if let Some(key) = &config.api_key {
            builder = builder.api_key(key.clone());
        }
        builder.build()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, request: &SynthesisRequest, request_id: &str) -> Result<AudioArtifact> {
        let body = build_ssml(request);
        let mut req = self
            .http_client
            .post(&self.endpoint)
            .header("Content-Type", "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", &self.output_format)
            .header("User-Agent", &self.user_agent)
            .header("X-RequestId", request_id)
            .body(body);
        if let Some(key) = &self.api_key {
            req = req.header("Ocp-Apim-Subscription-Key", key);
        }

        let response = req.send().await.map_err(|e| {
            Error::synthesis_with_context(
                format!("TTS request failed: {}", e),
                None,
                ErrorContext::new().with_source("tts_client"),
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            let body_str = response.text().await.unwrap_or_default();
            let message = if body_str.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("provider error")
                    .to_string()
            } else {
                body_str
            };
            return Err(Error::synthesis_with_context(
                format!("TTS API error: {}", message),
                Some(status.as_u16()),
                ErrorContext::new().with_source("tts_client"),
            ));
        }

        let mut stage = StagedAudio::create()?;
        tracing::debug!(path = %stage.path().display(), "staging provider audio");
        stage.write_stream(response.bytes_stream()).await?;
        if stage.written() == 0 {
            return Err(Error::synthesis_with_context(
                "Provider returned no audio",
                Some(status.as_u16()),
                ErrorContext::new().with_source("tts_client"),
            ));
        }
        let data = stage.finish().await?;
        Ok(AudioArtifact::new(data))
    }
}

#[async_trait]
impl SpeechSynthesisClient for HttpSynthesisClient {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<AudioArtifact> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let span = tracing::info_span!(
            "synthesize",
            request_id = %request_id,
            voice = %request.voice(),
            rate = %request.rate(),
        );
        async {
            tracing::debug!(chars = request.text().chars().count(), "sending utterance");
            match self.send(request, &request_id).await {
                Ok(artifact) => {
                    tracing::info!(bytes = artifact.len(), "synthesis complete");
                    Ok(artifact)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "synthesis failed");
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

pub struct HttpSynthesisClientBuilder {
    endpoint: Option<String>,
    api_key: Option<String>,
    output_format: Option<String>,
    user_agent: Option<String>,
    timeout_secs: u64,
}

impl HttpSynthesisClientBuilder {
    pub fn new() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            output_format: None,
            user_agent: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
    pub fn output_format(mut self, format: impl Into<String>) -> Self {
        self.output_format = Some(format.into());
        self
    }
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn build(self) -> Result<HttpSynthesisClient> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| Error::configuration("Endpoint must be specified"))?;
        let mut config = SynthesisConfig::new(endpoint)
            .with_timeout_secs(self.timeout_secs)
            .with_output_format(
                self.output_format
                    .unwrap_or_else(|| DEFAULT_OUTPUT_FORMAT.to_string()),
            );
        if let Some(agent) = self.user_agent {
            config.user_agent = agent;
        }
        config.validate()?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(HttpSynthesisClient {
            http_client,
            endpoint: config.endpoint,
            api_key: self.api_key,
            output_format: config.output_format,
            user_agent: config.user_agent,
        })
    }
}

impl Default for HttpSynthesisClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
