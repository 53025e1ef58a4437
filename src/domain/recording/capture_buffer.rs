//! Bounded capture buffer filled from the real-time audio callback
//!
//! The buffer is allocated once, up front, at its full capacity; the fill
//! path runs on the audio subsystem's real-time thread and therefore never
//! allocates, blocks, or performs I/O. Each callback invocation copies at
//! most `min(frames_remaining, frames_requested)` frames and reports whether
//! the capture session should keep running.

/// Sample value written when the device delivers no input (silence)
pub const SILENCE: i16 = 0;

/// Verdict returned by the capture and playback callbacks.
///
/// `Continue` keeps the stream running; `Complete` tells the driving loop
/// that the buffer is full (capture) or exhausted (playback) and the stream
/// can be stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackStatus {
    /// More capacity remains than was requested; keep the stream running
    Continue,
    /// Fewer frames remained than requested; the session is over
    Complete,
}

impl CallbackStatus {
    /// Whether the session is finished
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// Fixed-capacity capture buffer with a monotonically advancing write offset.
///
/// Invariant: `0 <= write_offset <= capacity`; the filler never writes past
/// the end. Samples are mono i16 frames, zero-initialized at creation so a
/// short capture still yields a buffer of silence past the written region.
#[derive(Debug)]
pub struct CaptureBuffer {
    samples: Vec<i16>,
    write_offset: usize,
}

impl CaptureBuffer {
    /// Allocate a zeroed buffer holding `capacity` frames
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: vec![SILENCE; capacity],
            write_offset: 0,
        }
    }

    /// Total frame capacity, fixed at creation
    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    /// Frames written so far
    pub fn frames_written(&self) -> usize {
        self.write_offset
    }

    /// Frames of capacity left
    pub fn frames_remaining(&self) -> usize {
        self.samples.len() - self.write_offset
    }

    /// Whether the buffer has reached capacity
    pub fn is_full(&self) -> bool {
        self.write_offset == self.samples.len()
    }

    /// Copy one callback's worth of input into the buffer.
    ///
    /// `input` is the block delivered by the audio subsystem, or `None` when
    /// the device signalled silence; when present it must hold at least
    /// `frames_requested` samples. At most `frames_remaining` frames are
    /// copied; an oversized request is truncated, not an error.
    ///
    /// Returns [`CallbackStatus::Continue`] while at least `frames_requested`
    /// frames of capacity remained before the copy, [`CallbackStatus::Complete`]
    /// otherwise. A full buffer keeps returning `Complete` and copies nothing.
    pub fn fill(&mut self, input: Option<&[i16]>, frames_requested: usize) -> CallbackStatus {
        let frames_remaining = self.frames_remaining();
        let frames_to_copy = frames_remaining.min(frames_requested);

        let dest = &mut self.samples[self.write_offset..self.write_offset + frames_to_copy];
        match input {
            Some(block) => dest.copy_from_slice(&block[..frames_to_copy]),
            None => dest.fill(SILENCE),
        }

        self.write_offset += frames_to_copy;

        if frames_remaining >= frames_requested {
            CallbackStatus::Continue
        } else {
            CallbackStatus::Complete
        }
    }

    /// Read access to the captured region (and the zeroed tail beyond it)
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Consume the buffer, handing the sample storage to the caller
    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }
}
