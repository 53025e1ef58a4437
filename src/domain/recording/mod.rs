//! Recording domain: capture duration and the real-time buffer core

mod capture_buffer;
mod duration;
mod playback_cursor;

pub use capture_buffer::{CallbackStatus, CaptureBuffer, SILENCE};
pub use duration::{Duration, DEFAULT_DURATION_SECS};
pub use playback_cursor::PlaybackCursor;
