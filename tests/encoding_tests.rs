//! End-to-end encoding tests: write clips through the writer factory and
//! verify the bytes that land on disk.

use std::path::Path;

use mic_check::application::ports::ClipWriter;
use mic_check::domain::clip::{AudioClip, ClipFormat, ClipSpec};
use mic_check::infrastructure::create_writer;

/// A one-second 440 Hz sine clip at the capture sample rate
fn test_clip() -> AudioClip {
    let spec = ClipSpec::new(16_000, 1, 16_000);
    let samples: Vec<i16> = (0..16_000)
        .map(|i| {
            let t = i as f32 / 16_000.0;
            ((t * 440.0 * 2.0 * std::f32::consts::PI).sin() * 8_000.0) as i16
        })
        .collect();
    AudioClip::new(spec, samples)
}

async fn write_clip(clip: &AudioClip, format: ClipFormat, path: &Path) {
    let writer = create_writer(format);
    assert_eq!(writer.format(), format);
    writer.write(clip, path).await.unwrap();
}

#[tokio::test]
async fn raw_file_is_bare_little_endian_samples() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clip.raw");
    let clip = test_clip();

    write_clip(&clip, ClipFormat::Raw, &path).await;

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), clip.frame_count() * 2);
    let first = clip.samples()[0].to_le_bytes();
    assert_eq!(&bytes[..2], &first);
}

#[tokio::test]
async fn wav_file_reads_back_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clip.wav");
    let clip = test_clip();

    write_clip(&clip, ClipFormat::Wav, &path).await;

    let mut reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 16_000);
    assert_eq!(spec.bits_per_sample, 16);

    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(samples, clip.samples());
}

#[tokio::test]
async fn flac_file_has_magic_and_compresses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clip.flac");
    let clip = test_clip();

    write_clip(&clip, ClipFormat::Flac, &path).await;

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..4], b"fLaC");
    // A pure tone should compress well below the raw sample size
    assert!(bytes.len() < clip.frame_count() * 2);
}

#[tokio::test]
async fn each_format_gets_its_own_extension() {
    let dir = tempfile::tempdir().unwrap();
    let clip = test_clip();

    for format in [ClipFormat::Raw, ClipFormat::Wav, ClipFormat::Flac] {
        let path = dir.path().join(format!("clip.{}", format.extension()));
        write_clip(&clip, format, &path).await;
        assert_eq!(ClipFormat::from_path(&path), Some(format));
        assert!(path.exists());
    }
}

#[tokio::test]
async fn empty_clip_still_produces_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.wav");
    let clip = AudioClip::new(ClipSpec::new(16_000, 1, 0), Vec::new());

    write_clip(&clip, ClipFormat::Wav, &path).await;

    let reader = hound::WavReader::open(&path).unwrap();
    assert_eq!(reader.len(), 0);
}
