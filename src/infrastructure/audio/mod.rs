//! Audio device adapters (capture and playback)

mod cpal_player;
mod cpal_recorder;

pub use cpal_player::CpalClipPlayer;
pub use cpal_recorder::CpalClipRecorder;
