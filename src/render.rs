//! Inline audio markup.

use crate::tts::AudioArtifact;

/// Autoplaying `<audio>` element with the clip base64-inlined. Rewinds to the
/// start when playback ends so the next play starts from the beginning.
pub fn audio_embed(artifact: &AudioArtifact) -> String {
    format!(
        r#"<audio autoplay="true" onended="this.currentTime=0;"><source src="{}" type="{}"></audio>"#,
        artifact.data_uri(),
        artifact.mime_type(),
    )
}
