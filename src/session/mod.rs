//! Session module: the per-session artifact slot, pending sample text, and the
//! controller that runs one submission at a time against them.

mod controller;
mod state;
mod store;

pub use controller::{
    AudioView, FormInput, RenderPass, SubmissionController, SubmissionPhase, TextField,
};
pub use state::SessionState;
pub use store::AudioArtifactStore;
