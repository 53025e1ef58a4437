//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::clip::ClipFormat;
use crate::domain::recording::Duration;

/// MicCheck - bounded microphone capture with playback and file output
#[derive(Parser, Debug)]
#[command(name = "mic-check")]
#[command(version)]
#[command(about = "Record a short microphone clip, play it back or save it as raw PCM, WAV, or FLAC")]
#[command(long_about = None)]
pub struct Cli {
    /// Capture duration (e.g., 10s, 1m, 2m30s)
    #[arg(short = 'd', long, value_name = "TIME")]
    pub duration: Option<String>,

    /// Write the clip to this file (format inferred from the extension)
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (with no --output, writes recorded.<ext>)
    #[arg(short = 'f', long, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Play the clip back after capture (default when not saving)
    #[arg(short = 'p', long)]
    pub play: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Output format argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Raw,
    Wav,
    Flac,
}

impl From<FormatArg> for ClipFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Raw => ClipFormat::Raw,
            FormatArg::Wav => ClipFormat::Wav,
            FormatArg::Flac => ClipFormat::Flac,
        }
    }
}

impl From<ClipFormat> for FormatArg {
    fn from(format: ClipFormat) -> Self {
        match format {
            ClipFormat::Raw => FormatArg::Raw,
            ClipFormat::Wav => FormatArg::Wav,
            ClipFormat::Flac => FormatArg::Flac,
        }
    }
}

/// Parsed capture options
#[derive(Debug, Clone)]
pub struct CaptureOptions {
    pub duration: Duration,
    pub save_to: Option<PathBuf>,
    pub format: ClipFormat,
    pub play: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["duration", "format", "play"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
