//! Clip writer port interface

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::domain::clip::{AudioClip, ClipFormat};

/// Write errors
#[derive(Debug, Clone, Error)]
pub enum WriteError {
    #[error("Failed to write file: {0}")]
    Io(String),

    #[error("WAV encoding failed: {0}")]
    Wav(String),

    #[error("FLAC config error: {0}")]
    FlacConfig(String),

    #[error("FLAC encoding failed: {0}")]
    FlacEncode(String),
}

/// Port for writing a captured clip to disk in a specific format
#[async_trait]
pub trait ClipWriter: Send + Sync {
    /// Write the clip to the given path.
    ///
    /// # Arguments
    /// * `clip` - The clip to encode and write
    /// * `path` - Destination file path
    async fn write(&self, clip: &AudioClip, path: &Path) -> Result<(), WriteError>;

    /// The format this writer produces.
    fn format(&self) -> ClipFormat;
}

/// Blanket implementation for boxed writer types
#[async_trait]
impl ClipWriter for Box<dyn ClipWriter> {
    async fn write(&self, clip: &AudioClip, path: &Path) -> Result<(), WriteError> {
        self.as_ref().write(clip, path).await
    }

    fn format(&self) -> ClipFormat {
        self.as_ref().format()
    }
}
