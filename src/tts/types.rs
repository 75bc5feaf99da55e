//! TTS (Text-to-Speech) types.

use base64::Engine;
use bytes::Bytes;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Error, ErrorContext, Result};

pub const MIN_SPEED: f64 = 0.5;
pub const MAX_SPEED: f64 = 2.0;
pub const MIN_RATE_PERCENT: i32 = -50;
pub const MAX_RATE_PERCENT: i32 = 100;

/// Slider values arrive as floats; allow for accumulated step error at the edges.
const SPEED_EPSILON: f64 = 1e-9;

static RATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?)(\d{1,3})%\s*$").expect("static rate pattern"));

/// Neural voices offered for Amharic synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceId {
    #[default]
    Mekdes,
    Ameha,
}

impl VoiceId {
    pub const ALL: [VoiceId; 2] = [VoiceId::Mekdes, VoiceId::Ameha];

    /// Human-readable label shown in the voice picker.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mekdes => "Mekdes (Female)",
            Self::Ameha => "Ameha (Male)",
        }
    }

    /// Token the provider uses to select the speaker persona.
    pub fn provider_id(&self) -> &'static str {
        match self {
            Self::Mekdes => "am-ET-MekdesNeural",
            Self::Ameha => "am-ET-AmehaNeural",
        }
    }

    /// BCP-47 locale of the voice.
    pub fn locale(&self) -> &'static str {
        "am-ET"
    }
}

impl std::fmt::Display for VoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.provider_id())
    }
}

impl std::str::FromStr for VoiceId {
    type Err = Error;

    /// Accepts either the picker label or the provider id.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        VoiceId::ALL
            .into_iter()
            .find(|v| v.label() == s || v.provider_id().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                Error::validation_with_context(
                    format!("Unsupported voice: {}", s),
                    ErrorContext::new()
                        .with_field_path("voice")
                        .with_details("expected Mekdes (Female) or Ameha (Male)"),
                )
            })
    }
}

/// Signed percentage adjustment to the default speaking speed, in [-50, +100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpeechRate(i32);

impl SpeechRate {
    pub const NORMAL: SpeechRate = SpeechRate(0);

    /// Derive the rate from a speed multiplier: `round((speed - 1) * 100)`.
    pub fn from_speed(speed: f64) -> Result<Self> {
        if !speed.is_finite()
            || speed < MIN_SPEED - SPEED_EPSILON
            || speed > MAX_SPEED + SPEED_EPSILON
        {
            return Err(Error::validation_with_context(
                format!("Speech speed must be between {} and {}", MIN_SPEED, MAX_SPEED),
                ErrorContext::new()
                    .with_field_path("speed")
                    .with_details(format!("got {}", speed)),
            ));
        }
        let percent = ((speed - 1.0) * 100.0).round() as i32;
        Self::from_percent(percent.clamp(MIN_RATE_PERCENT, MAX_RATE_PERCENT))
    }

    pub fn from_percent(percent: i32) -> Result<Self> {
        if !(MIN_RATE_PERCENT..=MAX_RATE_PERCENT).contains(&percent) {
            return Err(Error::validation_with_context(
                format!(
                    "Speech rate must be between {}% and +{}%",
                    MIN_RATE_PERCENT, MAX_RATE_PERCENT
                ),
                ErrorContext::new()
                    .with_field_path("rate")
                    .with_details(format!("got {}%", percent)),
            ));
        }
        Ok(Self(percent))
    }

    pub fn percent(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for SpeechRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}%", self.0)
    }
}

impl std::str::FromStr for SpeechRate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || {
            Error::validation_with_context(
                format!("Malformed speech rate: {:?}", s),
                ErrorContext::new()
                    .with_field_path("rate")
                    .with_details("expected a signed percentage such as +10% or -25%"),
            )
        };
        let caps = RATE_PATTERN.captures(s).ok_or_else(malformed)?;
        let magnitude: i32 = caps[2].parse().map_err(|_| malformed())?;
        let percent = if &caps[1] == "-" { -magnitude } else { magnitude };
        Self::from_percent(percent)
    }
}

/// One utterance, ready to be sent to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    text: String,
    voice: VoiceId,
    rate: SpeechRate,
}

impl SynthesisRequest {
    /// Build a request from the form inputs. Rejects text that is empty after trimming.
    pub fn new(text: impl Into<String>, voice: VoiceId, speed: f64) -> Result<Self> {
        Self::with_rate(text, voice, SpeechRate::from_speed(speed)?)
    }

    pub fn with_rate(text: impl Into<String>, voice: VoiceId, rate: SpeechRate) -> Result<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(Error::validation_with_context(
                "Text must not be empty",
                ErrorContext::new().with_field_path("text"),
            ));
        }
        Ok(Self { text, voice, rate })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn voice(&self) -> VoiceId {
        self.voice
    }

    pub fn rate(&self) -> SpeechRate {
        self.rate
    }
}

/// Binary audio produced by one synthesis call. Immutable once created;
/// clones share the underlying buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioArtifact {
    bytes: Bytes,
}

impl AudioArtifact {
    pub const MIME_TYPE: &'static str = "audio/mp3";

    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &'static str {
        Self::MIME_TYPE
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }

    /// `data:` URI suitable for an inline `<source src=...>`.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", Self::MIME_TYPE, self.to_base64())
    }
}
