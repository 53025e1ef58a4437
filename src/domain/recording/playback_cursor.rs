//! Bounded playback cursor drained by the real-time output callback
//!
//! The mirror image of [`CaptureBuffer`](super::CaptureBuffer): a captured
//! clip is walked front to back, one output block per callback, and the tail
//! of the final block is padded with silence so the device never plays stale
//! memory. The same real-time rules apply: no allocation, blocking, or I/O on
//! the drain path.

use super::capture_buffer::{CallbackStatus, SILENCE};

/// Read cursor over captured samples, advanced one output block at a time.
///
/// Invariant: `0 <= position <= samples.len()`; the cursor never reads past
/// the end. An exhausted cursor keeps emitting all-silence blocks.
#[derive(Debug)]
pub struct PlaybackCursor {
    samples: Vec<i16>,
    position: usize,
}

impl PlaybackCursor {
    /// Take ownership of a clip's samples, positioned at the start
    pub fn new(samples: Vec<i16>) -> Self {
        Self {
            samples,
            position: 0,
        }
    }

    /// Frames played so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Frames left to play
    pub fn frames_remaining(&self) -> usize {
        self.samples.len() - self.position
    }

    /// Whether every captured frame has been handed to the device
    pub fn is_exhausted(&self) -> bool {
        self.position == self.samples.len()
    }

    /// Fill one output block from the cursor position.
    ///
    /// Copies `min(frames_remaining, output.len())` frames and zero-fills
    /// whatever part of `output` that leaves uncovered. Returns
    /// [`CallbackStatus::Continue`] while at least a full block remained,
    /// [`CallbackStatus::Complete`] once the final (possibly padded) block
    /// has been emitted.
    pub fn drain(&mut self, output: &mut [i16]) -> CallbackStatus {
        let frames_requested = output.len();
        let frames_remaining = self.frames_remaining();

        if frames_remaining < frames_requested {
            output[..frames_remaining]
                .copy_from_slice(&self.samples[self.position..]);
            output[frames_remaining..].fill(SILENCE);
            self.position += frames_remaining;
            CallbackStatus::Complete
        } else {
            output.copy_from_slice(&self.samples[self.position..self.position + frames_requested]);
            self.position += frames_requested;
            CallbackStatus::Continue
        }
    }
}
