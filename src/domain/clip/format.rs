//! Output format value object

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::domain::error::InvalidFormatError;

/// Supported output formats for a captured clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipFormat {
    /// Headerless interleaved little-endian 16-bit PCM
    Raw,
    /// RIFF/WAVE container, 16-bit PCM
    Wav,
    /// FLAC, 16-bit lossless
    Flac,
}

impl ClipFormat {
    /// Canonical lowercase name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Wav => "wav",
            Self::Flac => "flac",
        }
    }

    /// Get the file extension
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Wav => "wav",
            Self::Flac => "flac",
        }
    }

    /// Infer a format from a path's extension, if it is recognized
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.to_lowercase().parse().ok())
    }
}

impl FromStr for ClipFormat {
    type Err = InvalidFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "raw" | "pcm" => Ok(Self::Raw),
            "wav" | "wave" => Ok(Self::Wav),
            "flac" => Ok(Self::Flac),
            _ => Err(InvalidFormatError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for ClipFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for ClipFormat {
    fn default() -> Self {
        Self::Wav
    }
}
