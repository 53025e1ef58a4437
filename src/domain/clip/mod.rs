//! Clip domain: captured audio and its parameters

mod audio_clip;
mod format;
mod spec;

pub use audio_clip::AudioClip;
pub use format::ClipFormat;
pub use spec::{ClipSpec, CHANNEL_COUNT, FRAMES_PER_BUFFER, SAMPLE_RATE};
