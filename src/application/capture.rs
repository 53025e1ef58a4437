//! Capture clip use case

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

use crate::domain::clip::ClipSpec;

use super::ports::{
    ClipPlayer, ClipRecorder, ClipWriter, PlaybackError, ProgressCallback, RecordingError,
    WriteError,
};

/// Errors from the capture use case
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Recording failed: {0}")]
    Recording(#[from] RecordingError),

    #[error("Playback failed: {0}")]
    Playback(#[from] PlaybackError),

    #[error("Write failed: {0}")]
    Write(#[from] WriteError),
}

impl CaptureError {
    /// True when the failure is a user-requested cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            Self::Recording(RecordingError::Cancelled) | Self::Playback(PlaybackError::Cancelled)
        )
    }
}

/// Input parameters for the capture use case
#[derive(Debug, Clone)]
pub struct CaptureInput {
    /// Sample rate, channel count, and capture buffer capacity
    pub spec: ClipSpec,
    /// Where to save the clip, if anywhere
    pub save_to: Option<PathBuf>,
    /// Whether to play the clip back after capture
    pub play: bool,
}

impl Default for CaptureInput {
    fn default() -> Self {
        Self {
            spec: ClipSpec::default(),
            save_to: None,
            play: true,
        }
    }
}

/// Output from the capture use case
#[derive(Debug, Clone)]
pub struct CaptureOutput {
    /// Number of frames captured
    pub frame_count: usize,
    /// Clip size in human-readable format
    pub clip_size: String,
    /// Path the clip was saved to (if saving was requested)
    pub saved_to: Option<PathBuf>,
    /// Whether the clip was played back
    pub played: bool,
}

/// Callbacks for progress and status updates
#[derive(Default)]
pub struct CaptureCallbacks {
    /// Called during recording with (frames_captured, total_frames)
    pub on_progress: Option<ProgressCallback>,
    /// Called when recording starts
    pub on_recording_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called when recording ends
    pub on_recording_end: Option<Box<dyn Fn(&str) + Send + Sync>>,
    /// Called when the clip starts being written to disk
    pub on_saving_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called when the clip has been written
    pub on_saving_end: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called when playback starts
    pub on_playback_start: Option<Box<dyn Fn() + Send + Sync>>,
    /// Called when playback ends
    pub on_playback_end: Option<Box<dyn Fn() + Send + Sync>>,
}

/// One-shot capture use case: record, optionally save, optionally play back
pub struct CaptureClipUseCase<R, P, W>
where
    R: ClipRecorder,
    P: ClipPlayer,
    W: ClipWriter,
{
    recorder: R,
    player: P,
    writer: W,
    stop_flag: Arc<AtomicBool>,
}

impl<R, P, W> CaptureClipUseCase<R, P, W>
where
    R: ClipRecorder,
    P: ClipPlayer,
    W: ClipWriter,
{
    /// Create a new use case instance
    pub fn new(recorder: R, player: P, writer: W) -> Self {
        Self {
            recorder,
            player,
            writer,
            stop_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the stop flag for external signal handling
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop_flag)
    }

    /// Signal to stop the capture early
    pub fn stop_early(&self) {
        self.stop_flag.store(true, Ordering::SeqCst);
    }

    /// Execute the capture workflow
    pub async fn execute(
        &self,
        input: CaptureInput,
        callbacks: CaptureCallbacks,
    ) -> Result<CaptureOutput, CaptureError> {
        // Reset stop flag
        self.stop_flag.store(false, Ordering::SeqCst);

        if let Some(ref cb) = callbacks.on_recording_start {
            cb();
        }

        // Record until the capture buffer is full
        let clip = self
            .recorder
            .record(
                input.spec,
                Arc::clone(&self.stop_flag),
                callbacks.on_progress,
            )
            .await?;

        let clip_size = clip.human_readable_size();
        let frame_count = clip.frame_count();

        if let Some(ref cb) = callbacks.on_recording_end {
            cb(&clip_size);
        }

        // Save before playback so a write failure surfaces immediately
        let saved_to = if let Some(path) = input.save_to {
            if let Some(ref cb) = callbacks.on_saving_start {
                cb();
            }

            self.writer.write(&clip, &path).await?;

            if let Some(ref cb) = callbacks.on_saving_end {
                cb();
            }

            Some(path)
        } else {
            None
        };

        // Play back through the speakers
        let played = if input.play {
            if let Some(ref cb) = callbacks.on_playback_start {
                cb();
            }

            self.player
                .play(&clip, Arc::clone(&self.stop_flag))
                .await?;

            if let Some(ref cb) = callbacks.on_playback_end {
                cb();
            }

            true
        } else {
            false
        };

        Ok(CaptureOutput {
            frame_count,
            clip_size,
            saved_to,
            played,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clip::{AudioClip, ClipFormat};
    use async_trait::async_trait;
    use std::path::Path;

    // Mock implementations for testing
    struct MockRecorder;

    #[async_trait]
    impl ClipRecorder for MockRecorder {
        async fn record(
            &self,
            spec: ClipSpec,
            _cancel: Arc<AtomicBool>,
            _on_progress: Option<ProgressCallback>,
        ) -> Result<AudioClip, RecordingError> {
            Ok(AudioClip::new(spec, vec![0i16; spec.capacity()]))
        }
    }

    struct CancelledRecorder;

    #[async_trait]
    impl ClipRecorder for CancelledRecorder {
        async fn record(
            &self,
            _spec: ClipSpec,
            _cancel: Arc<AtomicBool>,
            _on_progress: Option<ProgressCallback>,
        ) -> Result<AudioClip, RecordingError> {
            Err(RecordingError::Cancelled)
        }
    }

    struct MockPlayer {
        played: Arc<AtomicBool>,
    }

    #[async_trait]
    impl ClipPlayer for MockPlayer {
        async fn play(
            &self,
            _clip: &AudioClip,
            _cancel: Arc<AtomicBool>,
        ) -> Result<(), PlaybackError> {
            self.played.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    struct MockWriter {
        written: Arc<AtomicBool>,
    }

    #[async_trait]
    impl ClipWriter for MockWriter {
        async fn write(&self, _clip: &AudioClip, _path: &Path) -> Result<(), WriteError> {
            self.written.store(true, Ordering::SeqCst);
            Ok(())
        }

        fn format(&self) -> ClipFormat {
            ClipFormat::Wav
        }
    }

    struct FailingWriter;

    #[async_trait]
    impl ClipWriter for FailingWriter {
        async fn write(&self, _clip: &AudioClip, _path: &Path) -> Result<(), WriteError> {
            Err(WriteError::Io("disk full".to_string()))
        }

        fn format(&self) -> ClipFormat {
            ClipFormat::Wav
        }
    }

    #[tokio::test]
    async fn execute_records_and_plays_by_default() {
        let played = Arc::new(AtomicBool::new(false));
        let written = Arc::new(AtomicBool::new(false));
        let use_case = CaptureClipUseCase::new(
            MockRecorder,
            MockPlayer {
                played: Arc::clone(&played),
            },
            MockWriter {
                written: Arc::clone(&written),
            },
        );

        let input = CaptureInput::default();
        let output = use_case
            .execute(input, CaptureCallbacks::default())
            .await
            .unwrap();

        assert_eq!(output.frame_count, ClipSpec::default().capacity());
        assert!(output.played);
        assert!(output.saved_to.is_none());
        assert!(played.load(Ordering::SeqCst));
        assert!(!written.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn execute_saves_when_path_given() {
        let played = Arc::new(AtomicBool::new(false));
        let written = Arc::new(AtomicBool::new(false));
        let use_case = CaptureClipUseCase::new(
            MockRecorder,
            MockPlayer {
                played: Arc::clone(&played),
            },
            MockWriter {
                written: Arc::clone(&written),
            },
        );

        let input = CaptureInput {
            save_to: Some(PathBuf::from("clip.wav")),
            play: false,
            ..Default::default()
        };
        let output = use_case
            .execute(input, CaptureCallbacks::default())
            .await
            .unwrap();

        assert_eq!(output.saved_to, Some(PathBuf::from("clip.wav")));
        assert!(!output.played);
        assert!(written.load(Ordering::SeqCst));
        assert!(!played.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn write_failure_aborts_before_playback() {
        let played = Arc::new(AtomicBool::new(false));
        let use_case = CaptureClipUseCase::new(
            MockRecorder,
            MockPlayer {
                played: Arc::clone(&played),
            },
            FailingWriter,
        );

        let input = CaptureInput {
            save_to: Some(PathBuf::from("clip.wav")),
            play: true,
            ..Default::default()
        };
        let result = use_case.execute(input, CaptureCallbacks::default()).await;

        assert!(matches!(result, Err(CaptureError::Write(_))));
        assert!(!played.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn cancelled_recording_propagates() {
        let use_case = CaptureClipUseCase::new(
            CancelledRecorder,
            MockPlayer {
                played: Arc::new(AtomicBool::new(false)),
            },
            MockWriter {
                written: Arc::new(AtomicBool::new(false)),
            },
        );

        let result = use_case
            .execute(CaptureInput::default(), CaptureCallbacks::default())
            .await;

        let err = result.err().unwrap();
        assert!(err.is_cancelled());
        assert!(matches!(
            err,
            CaptureError::Recording(RecordingError::Cancelled)
        ));
    }

    #[tokio::test]
    async fn recording_end_callback_reports_size() {
        use std::sync::Mutex;

        let reported = Arc::new(Mutex::new(String::new()));
        let reported_clone = Arc::clone(&reported);

        let use_case = CaptureClipUseCase::new(
            MockRecorder,
            MockPlayer {
                played: Arc::new(AtomicBool::new(false)),
            },
            MockWriter {
                written: Arc::new(AtomicBool::new(false)),
            },
        );

        let callbacks = CaptureCallbacks {
            on_recording_end: Some(Box::new(move |size: &str| {
                *reported_clone.lock().unwrap() = size.to_string();
            })),
            ..Default::default()
        };

        let input = CaptureInput {
            play: false,
            ..Default::default()
        };
        use_case.execute(input, callbacks).await.unwrap();

        // Default spec is 80000 frames of i16, i.e. 160000 bytes
        assert_eq!(&*reported.lock().unwrap(), "156.2 KB");
    }
}
