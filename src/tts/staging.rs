//! Transient on-disk staging for provider audio.
//!
//! The provider's audio stream is written to a temporary `.mp3` file and read
//! back in full once the stream ends. The file is removed when the stage is
//! finished or dropped, so a failure at any point leaves nothing behind.

use bytes::Bytes;
use futures::{Stream, StreamExt};
use std::path::Path;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;

use crate::{Error, ErrorContext, Result};

pub struct StagedAudio {
    file: NamedTempFile,
    written: usize,
}

impl StagedAudio {
    pub fn create() -> Result<Self> {
        let file = tempfile::Builder::new()
            .prefix("amharic-tts-")
            .suffix(".mp3")
            .tempfile()?;
        Ok(Self { file, written: 0 })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn written(&self) -> usize {
        self.written
    }

    /// Drain a chunk stream into the staging file.
    pub async fn write_stream<S, E>(&mut self, chunks: S) -> Result<()>
    where
        S: Stream<Item = std::result::Result<Bytes, E>>,
        E: std::fmt::Display,
    {
        let mut chunks = Box::pin(chunks);
        let mut out = tokio::fs::File::from_std(self.file.reopen()?);
        while let Some(chunk) = chunks.next().await {
            let chunk = chunk.map_err(|e| {
                Error::synthesis_with_context(
                    format!("Failed to read audio stream: {}", e),
                    None,
                    ErrorContext::new().with_source("staging"),
                )
            })?;
            out.write_all(&chunk).await?;
            self.written += chunk.len();
        }
        out.flush().await?;
        Ok(())
    }

    /// Read the staged audio back and delete the file.
    pub async fn finish(self) -> Result<Bytes> {
        let data = tokio::fs::read(self.file.path()).await?;
        self.file.close()?;
        Ok(Bytes::from(data))
    }
}
