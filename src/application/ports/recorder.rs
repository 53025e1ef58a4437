//! Recording port interface

use async_trait::async_trait;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::clip::{AudioClip, ClipSpec};

/// Recording errors
#[derive(Debug, Clone, Error)]
pub enum RecordingError {
    #[error("No input device available")]
    NoInputDevice,

    #[error("Failed to open input stream: {0}")]
    OpenFailed(String),

    #[error("Failed to start recording: {0}")]
    StartFailed(String),

    #[error("Recording failed: {0}")]
    Failed(String),

    #[error("Recording was cancelled")]
    Cancelled,

    #[error("No audio was captured")]
    NoAudioCaptured,
}

/// Progress callback type for reporting capture progress.
/// Parameters: (frames_captured, total_frames)
pub type ProgressCallback = Arc<dyn Fn(u64, u64) + Send + Sync>;

/// Port for bounded audio capture into a fixed-size buffer
#[async_trait]
pub trait ClipRecorder: Send + Sync {
    /// Record until the capture buffer described by `spec` is full.
    ///
    /// # Arguments
    /// * `spec` - Sample rate, channel count, and buffer capacity
    /// * `cancel` - Flag that aborts the capture when set
    /// * `on_progress` - Optional callback for progress updates
    ///
    /// # Returns
    /// The captured clip or an error
    async fn record(
        &self,
        spec: ClipSpec,
        cancel: Arc<AtomicBool>,
        on_progress: Option<ProgressCallback>,
    ) -> Result<AudioClip, RecordingError>;
}
