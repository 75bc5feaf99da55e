//! TTS module: sends one utterance to a neural voice provider and returns the audio it produced.

mod client;
pub mod ssml;
mod staging;
mod types;

pub use client::{HttpSynthesisClient, HttpSynthesisClientBuilder, SpeechSynthesisClient};
pub use staging::StagedAudio;
pub use types::{
    AudioArtifact, SpeechRate, SynthesisRequest, VoiceId, MAX_RATE_PERCENT, MAX_SPEED,
    MIN_RATE_PERCENT, MIN_SPEED,
};
