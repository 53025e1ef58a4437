//! Domain layer: core types and business rules
//!
//! This layer contains the essential model of bounded audio capture:
//! the capture buffer, the playback cursor, clip parameters, and the
//! errors they can produce. It has no dependency on any audio backend,
//! codec, or I/O concern.

pub mod clip;
pub mod config;
pub mod error;
pub mod recording;

pub use clip::{AudioClip, ClipFormat, ClipSpec};
pub use config::AppConfig;
pub use recording::{CallbackStatus, CaptureBuffer, Duration, PlaybackCursor};
