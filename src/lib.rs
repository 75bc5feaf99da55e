//! # amharic-tts
//!
//! Request/response lifecycle for Amharic text-to-speech: turns typed text into
//! exactly one playable audio clip per submission, and keeps the last clip
//! around so a UI that redraws on every interaction can replay it without
//! calling the provider again.
//!
//! ## Overview
//!
//! Speech itself comes from an external neural voice provider. This crate owns
//! the part around it: building the request, the single provider call, the
//! session's artifact slot, and the rule that decides whether a refresh
//! synthesizes or replays.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use amharic_tts::session::{FormInput, SessionState, SubmissionController};
//! use amharic_tts::tts::{HttpSynthesisClient, VoiceId};
//! use amharic_tts::SynthesisConfig;
//!
//! #[tokio::main]
//! async fn main() -> amharic_tts::Result<()> {
//!     amharic_tts::logging::init();
//!     let client = HttpSynthesisClient::from_config(&SynthesisConfig::from_env()?)?;
//!     let mut controller = SubmissionController::new(client);
//!     let mut session = SessionState::new();
//!
//!     let pass = controller
//!         .refresh(&mut session, FormInput::new("ሰላም", VoiceId::Mekdes, 1.0))
//!         .await;
//!     if let Some(html) = pass.audio.embed_html() {
//!         println!("{html}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`tts`] | Request types, SSML body, provider client |
//! | [`session`] | Artifact slot, session state, submission controller |
//! | [`catalog`] | Voices, speed slider, sample texts |
//! | [`render`] | Inline autoplay audio markup |
//! | [`config`] | Provider configuration (YAML / environment) |
//! | [`logging`] | Tracing subscriber setup |

pub mod catalog;
pub mod config;
pub mod logging;
pub mod render;
pub mod session;
pub mod tts;

pub use config::SynthesisConfig;
pub use session::{AudioArtifactStore, SessionState, SubmissionController};
pub use tts::{AudioArtifact, SpeechRate, SpeechSynthesisClient, SynthesisRequest, VoiceId};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
