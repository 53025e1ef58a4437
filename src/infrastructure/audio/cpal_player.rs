//! Speaker playback adapter using cpal
//!
//! Mirror of the capture side: the clip is handed to a playback cursor
//! owned by the output callback, which drains one block per invocation
//! and pads the final block with silence. The host loop stops the
//! stream once the cursor reports completion.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{BufferSize, SampleRate, StreamConfig};

use crate::application::ports::{ClipPlayer, PlaybackError};
use crate::domain::clip::{AudioClip, ClipSpec, FRAMES_PER_BUFFER};
use crate::domain::recording::PlaybackCursor;

/// Cadence of the host-side loop that watches the playback flags
const POLL_INTERVAL_MS: u64 = 100;

/// Speaker player that drains a captured clip via cpal
pub struct CpalClipPlayer;

impl CpalClipPlayer {
    /// Create a new cpal-based player
    pub fn new() -> Self {
        Self
    }

    /// Get the default output device
    fn output_device() -> Result<cpal::Device, PlaybackError> {
        let host = cpal::default_host();
        host.default_output_device()
            .ok_or(PlaybackError::NoOutputDevice)
    }

    /// Build the exact stream config the clip was captured with
    fn stream_config(spec: &ClipSpec) -> StreamConfig {
        StreamConfig {
            channels: spec.channels(),
            sample_rate: SampleRate(spec.sample_rate()),
            buffer_size: BufferSize::Fixed(FRAMES_PER_BUFFER),
        }
    }
}

impl Default for CpalClipPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipPlayer for CpalClipPlayer {
    async fn play(&self, clip: &AudioClip, cancel: Arc<AtomicBool>) -> Result<(), PlaybackError> {
        let spec = clip.spec();
        let samples = clip.samples().to_vec();

        let finished = Arc::new(AtomicBool::new(false));
        let stream_error = Arc::new(StdMutex::new(None::<String>));

        // Clone Arcs for the blocking task
        let finished_task = Arc::clone(&finished);
        let error_task = Arc::clone(&stream_error);
        let cancel_task = Arc::clone(&cancel);

        // Run the stream in a blocking task (cpal::Stream is not Send)
        let play_handle = tokio::task::spawn_blocking(move || {
            let device = CpalClipPlayer::output_device()?;
            let config = CpalClipPlayer::stream_config(&spec);

            // The cursor is owned by the callback; only the completion
            // flag is shared with the host loop.
            let mut cursor = PlaybackCursor::new(samples);
            let finished_cb = Arc::clone(&finished_task);
            let error_cb = Arc::clone(&error_task);

            let stream = device
                .build_output_stream(
                    &config,
                    move |data: &mut [i16], _: &cpal::OutputCallbackInfo| {
                        if cursor.drain(data).is_complete() {
                            finished_cb.store(true, Ordering::SeqCst);
                        }
                    },
                    move |err| {
                        if let Ok(mut slot) = error_cb.lock() {
                            slot.get_or_insert_with(|| err.to_string());
                        }
                    },
                    None,
                )
                .map_err(|e| PlaybackError::OpenFailed(e.to_string()))?;

            stream
                .play()
                .map_err(|e| PlaybackError::StartFailed(e.to_string()))?;

            // Wait until the final padded block has been emitted
            while !finished_task.load(Ordering::SeqCst) && !cancel_task.load(Ordering::SeqCst) {
                if let Ok(slot) = error_task.lock() {
                    if slot.is_some() {
                        break;
                    }
                }
                std::thread::sleep(std::time::Duration::from_millis(POLL_INTERVAL_MS));
            }

            drop(stream);

            Ok::<(), PlaybackError>(())
        });

        play_handle
            .await
            .map_err(|e| PlaybackError::Failed(format!("Task join error: {}", e)))??;

        if let Some(message) = stream_error.lock().unwrap().take() {
            return Err(PlaybackError::Failed(message));
        }

        if cancel.load(Ordering::SeqCst) {
            return Err(PlaybackError::Cancelled);
        }

        Ok(())
    }
}
