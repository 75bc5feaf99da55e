//! Per-session state carried between UI refreshes.

use rand::Rng;

use super::store::AudioArtifactStore;
use crate::catalog::SampleCategory;
use crate::tts::AudioArtifact;

/// Owned by exactly one session. Starts empty.
///
/// - the artifact slot is overwritten on each successful synthesis
/// - a pending sample is set by [`request_sample`](Self::request_sample) and
///   consumed by the next refresh
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    store: AudioArtifactStore,
    pending_sample: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &AudioArtifactStore {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut AudioArtifactStore {
        &mut self.store
    }

    pub fn last_artifact(&self) -> Option<AudioArtifact> {
        self.store.get()
    }

    /// "Try Random Sample": pick a sample from `category` and queue it for the text field.
    pub fn request_sample<R: Rng + ?Sized>(
        &mut self,
        category: SampleCategory,
        rng: &mut R,
    ) -> &str {
        let sample = category.random_sample(rng);
        tracing::debug!(category = category.label(), "sample text queued");
        self.pending_sample.insert(sample.to_string())
    }

    pub fn set_pending_sample(&mut self, text: impl Into<String>) {
        self.pending_sample = Some(text.into());
    }

    pub fn pending_sample(&self) -> Option<&str> {
        self.pending_sample.as_deref()
    }

    /// Take the queued sample, leaving nothing behind. Empty samples count as none.
    pub fn take_pending_sample(&mut self) -> Option<String> {
        self.pending_sample.take().filter(|s| !s.is_empty())
    }
}
