//! Submission lifecycle: decides, per refresh, whether to synthesize or replay.
//!
//! ```text
//! Idle -> Synthesizing -> Rendered -> Idle
//!              |
//!              +--------> Failed ---> Idle
//! ```
//!
//! Text presence gates the provider call. A refresh caused by an unrelated
//! widget (moving the speed slider with an empty text box, say) replays the
//! stored clip instead of synthesizing again.

use super::state::SessionState;
use crate::render;
use crate::tts::{AudioArtifact, SpeechSynthesisClient, SynthesisRequest, VoiceId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Synthesizing,
    Rendered,
    Failed,
}

impl SubmissionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Synthesizing => "synthesizing",
            Self::Rendered => "rendered",
            Self::Failed => "failed",
        }
    }
}

/// Values read from the form on one refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInput {
    pub text: String,
    pub voice: VoiceId,
    pub speed: f64,
}

impl FormInput {
    pub fn new(text: impl Into<String>, voice: VoiceId, speed: f64) -> Self {
        Self {
            text: text.into(),
            voice,
            speed,
        }
    }
}

/// What the UI shell should put in the audio slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioView {
    /// Clip produced by this submission.
    Fresh(AudioArtifact),
    /// Previously stored clip, shown again without a provider call.
    Replay(AudioArtifact),
    /// Inline error message; the stored clip (if any) is untouched.
    Failed { message: String },
    /// Nothing synthesized yet in this session.
    Empty,
}

impl AudioView {
    pub fn artifact(&self) -> Option<&AudioArtifact> {
        match self {
            Self::Fresh(a) | Self::Replay(a) => Some(a),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Autoplaying `<audio>` element for playable views.
    pub fn embed_html(&self) -> Option<String> {
        self.artifact().map(render::audio_embed)
    }
}

/// Text box contents for this refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub value: String,
    /// Set when a queued sample replaced the typed text.
    pub prefilled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPass {
    pub text_field: TextField,
    pub audio: AudioView,
}

pub struct SubmissionController<C> {
    client: C,
    phase: SubmissionPhase,
    last_outcome: Option<SubmissionPhase>,
}

impl<C: SpeechSynthesisClient> SubmissionController<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            phase: SubmissionPhase::Idle,
            last_outcome: None,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Terminal phase of the most recent synthesis attempt, if any.
    pub fn last_outcome(&self) -> Option<SubmissionPhase> {
        self.last_outcome
    }

    /// One UI refresh: consume a queued sample, then synthesize or replay.
    pub async fn refresh(&mut self, session: &mut SessionState, form: FormInput) -> RenderPass {
        let (value, prefilled) = match session.take_pending_sample() {
            Some(sample) => (sample, true),
            None => (form.text, false),
        };
        let audio = self.submit(session, &value, form.voice, form.speed).await;
        RenderPass {
            text_field: TextField { value, prefilled },
            audio,
        }
    }

    /// Explicit submit event.
    ///
    /// Non-empty text always produces a fresh provider call, even when the inputs
    /// match the previous submission. Empty text replays the stored clip.
    pub async fn submit(
        &mut self,
        session: &mut SessionState,
        text: &str,
        voice: VoiceId,
        speed: f64,
    ) -> AudioView {
        if text.trim().is_empty() {
            return self.redraw(session);
        }

        let request = match SynthesisRequest::new(text, voice, speed) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "rejected submission");
                self.finish(SubmissionPhase::Failed);
                return AudioView::Failed {
                    message: e.user_message(),
                };
            }
        };

        self.transition(SubmissionPhase::Synthesizing);
        match self.client.synthesize(&request).await {
            Ok(artifact) => {
                session.store_mut().set(artifact.clone());
                self.finish(SubmissionPhase::Rendered);
                AudioView::Fresh(artifact)
            }
            Err(e) => {
                tracing::warn!(
                    client = self.client.name(),
                    error = %e,
                    kept_previous = !session.store().is_empty(),
                    "synthesis failed"
                );
                self.finish(SubmissionPhase::Failed);
                AudioView::Failed {
                    message: e.user_message(),
                }
            }
        }
    }

    /// Show the stored clip again without recomputing anything.
    pub fn redraw(&self, session: &SessionState) -> AudioView {
        match session.last_artifact() {
            Some(artifact) => AudioView::Replay(artifact),
            None => AudioView::Empty,
        }
    }

    fn transition(&mut self, next: SubmissionPhase) {
        tracing::debug!(from = self.phase.as_str(), to = next.as_str(), "phase");
        self.phase = next;
    }

    fn finish(&mut self, terminal: SubmissionPhase) {
        self.transition(terminal);
        self.last_outcome = Some(terminal);
        self.transition(SubmissionPhase::Idle);
    }
}
