//! Microphone capture adapter using cpal
//!
//! Requests the exact stream the clip spec describes (16 kHz, mono,
//! 16-frame callback blocks) and refuses to negotiate: a device that
//! cannot honor the config is a fatal error, not a fallback path.
//!
//! cpal::Stream is not Send, so the stream lives entirely inside a
//! blocking task; the async side only watches atomics.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{BufferSize, SampleRate, StreamConfig};
use tokio::time::{interval, Duration as TokioDuration};

use crate::application::ports::{ClipRecorder, ProgressCallback, RecordingError};
use crate::domain::clip::{AudioClip, ClipSpec, FRAMES_PER_BUFFER};
use crate::domain::recording::CaptureBuffer;

/// Cadence of the host-side loop that watches the capture flags
const POLL_INTERVAL_MS: u64 = 100;

/// Microphone recorder that fills a fixed-capacity buffer via cpal
pub struct CpalClipRecorder;

impl CpalClipRecorder {
    /// Create a new cpal-based recorder
    pub fn new() -> Self {
        Self
    }

    /// Get the default input device
    fn input_device() -> Result<cpal::Device, RecordingError> {
        let host = cpal::default_host();
        host.default_input_device()
            .ok_or(RecordingError::NoInputDevice)
    }

    /// Build the exact stream config the spec calls for
    fn stream_config(spec: &ClipSpec) -> StreamConfig {
        StreamConfig {
            channels: spec.channels(),
            sample_rate: SampleRate(spec.sample_rate()),
            buffer_size: BufferSize::Fixed(FRAMES_PER_BUFFER),
        }
    }
}

impl Default for CpalClipRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipRecorder for CpalClipRecorder {
    async fn record(
        &self,
        spec: ClipSpec,
        cancel: Arc<AtomicBool>,
        on_progress: Option<ProgressCallback>,
    ) -> Result<AudioClip, RecordingError> {
        let buffer = Arc::new(StdMutex::new(CaptureBuffer::new(spec.capacity())));
        let frames_captured = Arc::new(AtomicUsize::new(0));
        let full = Arc::new(AtomicBool::new(false));
        let stream_error = Arc::new(StdMutex::new(None::<String>));

        // Clone Arcs for the blocking task
        let buffer_task = Arc::clone(&buffer);
        let full_task = Arc::clone(&full);
        let frames_task = Arc::clone(&frames_captured);
        let error_task = Arc::clone(&stream_error);
        let cancel_task = Arc::clone(&cancel);

        // Run the stream in a blocking task (cpal::Stream is not Send)
        let record_handle = tokio::task::spawn_blocking(move || {
            let result = (|| {
                let device = CpalClipRecorder::input_device()?;
                let config = CpalClipRecorder::stream_config(&spec);

                let buffer_cb = Arc::clone(&buffer_task);
                let full_cb = Arc::clone(&full_task);
                let frames_cb = Arc::clone(&frames_task);
                let error_cb = Arc::clone(&error_task);

                let stream = device
                    .build_input_stream(
                        &config,
                        move |data: &[i16], _: &cpal::InputCallbackInfo| {
                            if let Ok(mut buffer) = buffer_cb.lock() {
                                let status = buffer.fill(Some(data), data.len());
                                frames_cb.store(buffer.frames_written(), Ordering::SeqCst);
                                if status.is_complete() {
                                    full_cb.store(true, Ordering::SeqCst);
                                }
                            }
                        },
                        move |err| {
                            if let Ok(mut slot) = error_cb.lock() {
                                slot.get_or_insert_with(|| err.to_string());
                            }
                        },
                        None,
                    )
                    .map_err(|e| RecordingError::OpenFailed(e.to_string()))?;

                stream
                    .play()
                    .map_err(|e| RecordingError::StartFailed(e.to_string()))?;

                // Wait until the buffer reports full or the user bails out
                while !full_task.load(Ordering::SeqCst) && !cancel_task.load(Ordering::SeqCst) {
                    if let Ok(slot) = error_task.lock() {
                        if slot.is_some() {
                            break;
                        }
                    }
                    std::thread::sleep(std::time::Duration::from_millis(POLL_INTERVAL_MS));
                }

                drop(stream);
                Ok::<(), RecordingError>(())
            })();

            // Every exit path stops the progress reporter
            full_task.store(true, Ordering::SeqCst);
            result
        });

        // Start progress reporting if callback provided
        if let Some(progress) = on_progress {
            let total_frames = spec.capacity() as u64;
            let frames = Arc::clone(&frames_captured);
            let full = Arc::clone(&full);

            tokio::spawn(async move {
                let mut ticker = interval(TokioDuration::from_millis(POLL_INTERVAL_MS));
                loop {
                    ticker.tick().await;
                    let captured = (frames.load(Ordering::SeqCst) as u64).min(total_frames);
                    progress(captured, total_frames);
                    if full.load(Ordering::SeqCst) {
                        break;
                    }
                }
            });
        }

        // Wait for the capture to complete
        record_handle
            .await
            .map_err(|e| RecordingError::Failed(format!("Task join error: {}", e)))??;

        if let Some(message) = stream_error.lock().unwrap().take() {
            return Err(RecordingError::Failed(message));
        }

        if cancel.load(Ordering::SeqCst) {
            return Err(RecordingError::Cancelled);
        }

        // Take the buffer out of the shared slot; the stream (and with it
        // every callback clone) is gone, so this is the last reference.
        let buffer = {
            let mut guard = buffer.lock().unwrap();
            std::mem::replace(&mut *guard, CaptureBuffer::new(0))
        };

        if buffer.frames_written() == 0 {
            return Err(RecordingError::NoAudioCaptured);
        }

        Ok(AudioClip::new(spec, buffer.into_samples()))
    }
}
