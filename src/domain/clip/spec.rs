//! Clip spec value object and the fixed stream parameters

use crate::domain::recording::Duration;

/// Capture sample rate in Hz (speech-band, matches the encoders' target)
pub const SAMPLE_RATE: u32 = 16_000;

/// Channel count (mono)
pub const CHANNEL_COUNT: u16 = 1;

/// Frames delivered per audio callback
pub const FRAMES_PER_BUFFER: u32 = 16;

/// Stream parameters and frame capacity of one capture session.
/// Immutable once created; the capacity is derived from the requested
/// duration at the fixed sample rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipSpec {
    sample_rate: u32,
    channels: u16,
    capacity: usize,
}

impl ClipSpec {
    /// Create a spec with an explicit frame capacity
    pub const fn new(sample_rate: u32, channels: u16, capacity: usize) -> Self {
        Self {
            sample_rate,
            channels,
            capacity,
        }
    }

    /// Spec for a mono capture of the given duration at the fixed rate
    pub const fn for_duration(duration: Duration) -> Self {
        let capacity = (SAMPLE_RATE as u64 * duration.as_millis() / 1000) as usize;
        Self::new(SAMPLE_RATE, CHANNEL_COUNT, capacity)
    }

    /// Sample rate in Hz
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Channel count
    pub const fn channels(&self) -> u16 {
        self.channels
    }

    /// Total frame capacity
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Duration represented by the capacity at this sample rate
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.capacity as u64 * 1000 / self.sample_rate as u64)
    }
}

impl Default for ClipSpec {
    fn default() -> Self {
        Self::for_duration(Duration::default_duration())
    }
}
