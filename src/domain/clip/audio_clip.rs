//! Audio clip value object

use super::spec::ClipSpec;

/// A completed capture: the stream parameters plus the owned sample storage.
/// Immutable once constructed; consumed by the playback and file-writing
/// adapters after the capture session has ended.
#[derive(Debug, Clone)]
pub struct AudioClip {
    spec: ClipSpec,
    samples: Vec<i16>,
}

impl AudioClip {
    /// Wrap captured samples with their stream parameters
    pub fn new(spec: ClipSpec, samples: Vec<i16>) -> Self {
        Self { spec, samples }
    }

    /// The stream parameters this clip was captured with
    pub fn spec(&self) -> ClipSpec {
        self.spec
    }

    /// The captured samples
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Consume the clip, handing the sample storage to the caller
    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }

    /// Number of frames (one sample per frame in mono)
    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.spec.channels() as usize
    }

    /// Whether the clip holds no samples at all
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Size of the raw 16-bit sample data in bytes
    pub fn size_bytes(&self) -> usize {
        self.samples.len() * std::mem::size_of::<i16>()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}
