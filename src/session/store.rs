//! Single-slot holder for the most recent audio artifact.

use crate::tts::AudioArtifact;

/// Holds at most one artifact. `set` overwrites; no history is kept.
#[derive(Debug, Clone, Default)]
pub struct AudioArtifactStore {
    slot: Option<AudioArtifact>,
}

impl AudioArtifactStore {
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Replace whatever was stored before.
    pub fn set(&mut self, artifact: AudioArtifact) {
        self.slot = Some(artifact);
    }

    /// Side-effect free; clones share the artifact's buffer.
    pub fn get(&self) -> Option<AudioArtifact> {
        self.slot.clone()
    }

    pub fn peek(&self) -> Option<&AudioArtifact> {
        self.slot.as_ref()
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
