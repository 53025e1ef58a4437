//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the audio devices, the codecs, and the filesystem.

pub mod audio;
pub mod config;
pub mod encoding;

// Re-export adapters
pub use audio::{CpalClipPlayer, CpalClipRecorder};
pub use config::XdgConfigStore;
pub use encoding::{create_writer, FlacClipWriter, RawClipWriter, WavClipWriter};
