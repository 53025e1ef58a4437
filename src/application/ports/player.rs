//! Playback port interface

use async_trait::async_trait;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::clip::AudioClip;

/// Playback errors
#[derive(Debug, Clone, Error)]
pub enum PlaybackError {
    #[error("No output device available")]
    NoOutputDevice,

    #[error("Failed to open output stream: {0}")]
    OpenFailed(String),

    #[error("Failed to start playback: {0}")]
    StartFailed(String),

    #[error("Playback failed: {0}")]
    Failed(String),

    #[error("Playback was cancelled")]
    Cancelled,
}

/// Port for playing a captured clip through the speakers
#[async_trait]
pub trait ClipPlayer: Send + Sync {
    /// Play the clip from start to finish.
    ///
    /// # Arguments
    /// * `clip` - The clip to play
    /// * `cancel` - Flag that aborts playback when set
    ///
    /// # Returns
    /// Ok(()) once the clip has fully drained, error otherwise
    async fn play(&self, clip: &AudioClip, cancel: Arc<AtomicBool>) -> Result<(), PlaybackError>;
}
