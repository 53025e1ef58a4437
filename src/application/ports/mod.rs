//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod player;
pub mod recorder;
pub mod writer;

// Re-export common types
pub use config::ConfigStore;
pub use player::{ClipPlayer, PlaybackError};
pub use recorder::{ClipRecorder, ProgressCallback, RecordingError};
pub use writer::{ClipWriter, WriteError};
