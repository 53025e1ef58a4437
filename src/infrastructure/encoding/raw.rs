//! Raw PCM writer
//!
//! Headerless little-endian 16-bit samples, exactly as captured. The
//! result can be replayed with any tool told the stream parameters,
//! e.g. `ffplay -f s16le -ar 16000 -ch_layout mono recorded.raw`.

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

use crate::application::ports::{ClipWriter, WriteError};
use crate::domain::clip::{AudioClip, ClipFormat};

/// Writer producing headerless s16le PCM
pub struct RawClipWriter;

impl RawClipWriter {
    /// Create a new raw PCM writer
    pub fn new() -> Self {
        Self
    }

    /// Serialize samples as little-endian byte pairs
    fn encode(samples: &[i16]) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(samples.len() * 2);
        for sample in samples {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        bytes
    }
}

impl Default for RawClipWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipWriter for RawClipWriter {
    async fn write(&self, clip: &AudioClip, path: &Path) -> Result<(), WriteError> {
        let bytes = Self::encode(clip.samples());

        fs::write(path, bytes)
            .await
            .map_err(|e| WriteError::Io(e.to_string()))
    }

    fn format(&self) -> ClipFormat {
        ClipFormat::Raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clip::ClipSpec;

    #[test]
    fn encode_is_little_endian() {
        let bytes = RawClipWriter::encode(&[1i16, -2, 0x1234]);
        assert_eq!(bytes, vec![0x01, 0x00, 0xFE, 0xFF, 0x34, 0x12]);
    }

    #[test]
    fn encode_is_two_bytes_per_sample() {
        let bytes = RawClipWriter::encode(&[0i16; 500]);
        assert_eq!(bytes.len(), 1000);
    }

    #[tokio::test]
    async fn write_puts_raw_bytes_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.raw");

        let spec = ClipSpec::new(16_000, 1, 4);
        let clip = AudioClip::new(spec, vec![1i16, 2, 3, 4]);

        RawClipWriter::new().write(&clip, &path).await.unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes, vec![1, 0, 2, 0, 3, 0, 4, 0]);
    }

    #[tokio::test]
    async fn write_to_bad_path_is_an_io_error() {
        let spec = ClipSpec::new(16_000, 1, 1);
        let clip = AudioClip::new(spec, vec![0i16]);

        let result = RawClipWriter::new()
            .write(&clip, Path::new("/nonexistent-dir/clip.raw"))
            .await;

        assert!(matches!(result, Err(WriteError::Io(_))));
    }
}
