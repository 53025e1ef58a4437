//! FLAC writer using flacenc
//!
//! Lossless compression of the captured PCM (usually well under half
//! the WAV size for speech). Encoding is pure Rust and CPU-bound, so
//! it runs on a blocking task.

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

use flacenc::bitsink::ByteSink;
use flacenc::component::BitRepr;
use flacenc::config;
use flacenc::error::Verify;
use flacenc::source::MemSource;

use crate::application::ports::{ClipWriter, WriteError};
use crate::domain::clip::{AudioClip, ClipFormat, ClipSpec};

/// Bits per sample (16-bit audio)
const BITS_PER_SAMPLE: usize = 16;

/// Writer producing a FLAC file
pub struct FlacClipWriter;

impl FlacClipWriter {
    /// Create a new FLAC writer
    pub fn new() -> Self {
        Self
    }

    /// Encode PCM samples to FLAC bytes
    fn encode(samples: &[i16], spec: &ClipSpec) -> Result<Vec<u8>, WriteError> {
        // flacenc works on i32 samples internally
        let samples_i32: Vec<i32> = samples.iter().map(|&s| s as i32).collect();

        let config = config::Encoder::default()
            .into_verified()
            .map_err(|(_, e)| WriteError::FlacConfig(format!("{:?}", e)))?;

        let source = MemSource::from_samples(
            &samples_i32,
            spec.channels() as usize,
            BITS_PER_SAMPLE,
            spec.sample_rate() as usize,
        );

        let flac_stream = flacenc::encode_with_fixed_block_size(&config, source, config.block_size)
            .map_err(|e| WriteError::FlacEncode(format!("{:?}", e)))?;

        let mut sink = ByteSink::new();
        flac_stream
            .write(&mut sink)
            .map_err(|e| WriteError::FlacEncode(e.to_string()))?;

        Ok(sink.into_inner())
    }
}

impl Default for FlacClipWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipWriter for FlacClipWriter {
    async fn write(&self, clip: &AudioClip, path: &Path) -> Result<(), WriteError> {
        let spec = clip.spec();
        let samples = clip.samples().to_vec();

        let bytes = tokio::task::spawn_blocking(move || Self::encode(&samples, &spec))
            .await
            .map_err(|e| WriteError::FlacEncode(format!("Task join error: {}", e)))??;

        fs::write(path, bytes)
            .await
            .map_err(|e| WriteError::Io(e.to_string()))
    }

    fn format(&self) -> ClipFormat {
        ClipFormat::Flac
    }
}
