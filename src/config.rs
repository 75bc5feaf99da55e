//! Provider configuration.
//!
//! Loaded from YAML or from the environment:
//! - `AMHARIC_TTS_ENDPOINT` (required)
//! - `AMHARIC_TTS_API_KEY` (falls back to the OS keyring)
//! - `AMHARIC_TTS_TIMEOUT_SECS` (default 30)
//! - `AMHARIC_TTS_OUTPUT_FORMAT` (default `audio-24khz-48kbitrate-mono-mp3`)

use keyring::Entry;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::{Error, ErrorContext, Result};

pub const ENV_ENDPOINT: &str = "AMHARIC_TTS_ENDPOINT";
pub const ENV_API_KEY: &str = "AMHARIC_TTS_API_KEY";
pub const ENV_TIMEOUT_SECS: &str = "AMHARIC_TTS_TIMEOUT_SECS";
pub const ENV_OUTPUT_FORMAT: &str = "AMHARIC_TTS_OUTPUT_FORMAT";

const KEYRING_SERVICE: &str = "amharic-tts";
const KEYRING_USER: &str = "speech";

pub const DEFAULT_OUTPUT_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_output_format() -> String {
    DEFAULT_OUTPUT_FORMAT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    format!("amharic-tts/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Full URL the SSML request is POSTed to.
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_output_format")]
    pub output_format: String,
    /// Transport timeout; the controller never enforces one itself.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl SynthesisConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            output_format: default_output_format(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_output_format(mut self, format: impl Into<String>) -> Self {
        self.output_format = format.into();
        self
    }

    pub fn from_env() -> Result<Self> {
        let endpoint = env::var(ENV_ENDPOINT).map_err(|_| {
            Error::configuration_with_context(
                "Synthesis endpoint is not configured",
                ErrorContext::new().with_field_path(ENV_ENDPOINT),
            )
        })?;
        let mut config = Self::new(endpoint);
        config.api_key = env::var(ENV_API_KEY).ok().or_else(keyring_api_key);
        if let Some(secs) = env::var(ENV_TIMEOUT_SECS)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.timeout_secs = secs;
        }
        if let Ok(format) = env::var(ENV_OUTPUT_FORMAT) {
            config.output_format = format;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(self.endpoint.trim()).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid endpoint URL: {}", e),
                ErrorContext::new()
                    .with_field_path("endpoint")
                    .with_details(self.endpoint.clone()),
            )
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                "Endpoint must use http or https",
                ErrorContext::new()
                    .with_field_path("endpoint")
                    .with_details(url.scheme().to_string()),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(Error::configuration_with_context(
                "Timeout must be at least one second",
                ErrorContext::new().with_field_path("timeout_secs"),
            ));
        }
        if self.output_format.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "Output format must not be empty",
                ErrorContext::new().with_field_path("output_format"),
            ));
        }
        Ok(())
    }
}

fn keyring_api_key() -> Option<String> {
    Entry::new(KEYRING_SERVICE, KEYRING_USER)
        .ok()
        .and_then(|entry| entry.get_password().ok())
}
