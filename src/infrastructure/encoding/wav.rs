//! WAV writer using hound
//!
//! Canonical RIFF/WAVE container around the same 16-bit PCM the raw
//! writer emits, so the file is playable anywhere without knowing the
//! stream parameters up front.

use async_trait::async_trait;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::path::Path;

use crate::application::ports::{ClipWriter, WriteError};
use crate::domain::clip::{AudioClip, ClipFormat, ClipSpec};

/// Writer producing a 16-bit PCM WAV file
pub struct WavClipWriter;

impl WavClipWriter {
    /// Create a new WAV writer
    pub fn new() -> Self {
        Self
    }

    /// Map clip parameters onto a hound WAV spec
    fn wav_spec(spec: &ClipSpec) -> WavSpec {
        WavSpec {
            channels: spec.channels(),
            sample_rate: spec.sample_rate(),
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        }
    }

    fn map_error(e: hound::Error) -> WriteError {
        match e {
            hound::Error::IoError(io) => WriteError::Io(io.to_string()),
            other => WriteError::Wav(other.to_string()),
        }
    }
}

impl Default for WavClipWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipWriter for WavClipWriter {
    async fn write(&self, clip: &AudioClip, path: &Path) -> Result<(), WriteError> {
        let wav_spec = Self::wav_spec(&clip.spec());
        let samples = clip.samples().to_vec();
        let path = path.to_path_buf();

        // hound writes synchronously; keep it off the async runtime
        tokio::task::spawn_blocking(move || {
            let mut writer = WavWriter::create(&path, wav_spec).map_err(Self::map_error)?;

            for sample in samples {
                writer.write_sample(sample).map_err(Self::map_error)?;
            }

            writer.finalize().map_err(Self::map_error)
        })
        .await
        .map_err(|e| WriteError::Io(format!("Task join error: {}", e)))?
    }

    fn format(&self) -> ClipFormat {
        ClipFormat::Wav
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wav_spec_mirrors_clip_spec() {
        let spec = ClipSpec::default();
        let wav_spec = WavClipWriter::wav_spec(&spec);

        assert_eq!(wav_spec.channels, 1);
        assert_eq!(wav_spec.sample_rate, 16_000);
        assert_eq!(wav_spec.bits_per_sample, 16);
        assert_eq!(wav_spec.sample_format, SampleFormat::Int);
    }

    #[tokio::test]
    async fn write_round_trips_through_hound() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.wav");

        let spec = ClipSpec::new(16_000, 1, 4);
        let samples = vec![100i16, -200, 300, -400];
        let clip = AudioClip::new(spec, samples.clone());

        WavClipWriter::new().write(&clip, &path).await.unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().sample_rate, 16_000);
        assert_eq!(reader.spec().channels, 1);

        let read_back: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(read_back, samples);
    }

    #[tokio::test]
    async fn write_to_bad_path_is_an_io_error() {
        let spec = ClipSpec::new(16_000, 1, 1);
        let clip = AudioClip::new(spec, vec![0i16]);

        let result = WavClipWriter::new()
            .write(&clip, Path::new("/nonexistent-dir/clip.wav"))
            .await;

        assert!(matches!(result, Err(WriteError::Io(_))));
    }
}
