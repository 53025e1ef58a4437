//! Clip encoders, one writer per output format

mod flac;
mod raw;
mod wav;

pub use flac::FlacClipWriter;
pub use raw::RawClipWriter;
pub use wav::WavClipWriter;

use crate::application::ports::ClipWriter;
use crate::domain::clip::ClipFormat;

/// Build the writer for a given output format
pub fn create_writer(format: ClipFormat) -> Box<dyn ClipWriter> {
    match format {
        ClipFormat::Raw => Box::new(RawClipWriter::new()),
        ClipFormat::Wav => Box::new(WavClipWriter::new()),
        ClipFormat::Flac => Box::new(FlacClipWriter::new()),
    }
}
