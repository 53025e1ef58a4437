//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::clip::ClipFormat;
use crate::domain::recording::Duration;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub duration: Option<String>,
    pub format: Option<String>,
    pub play: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            duration: Some("5s".to_string()),
            format: Some("wav".to_string()),
            play: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            duration: other.duration.or(self.duration),
            format: other.format.or(self.format),
            play: other.play.or(self.play),
        }
    }

    /// Get duration as parsed Duration, or default if not set/invalid
    pub fn duration_or_default(&self) -> Duration {
        self.duration
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Duration::default_duration)
    }

    /// Get format as parsed ClipFormat, or default if not set/invalid
    pub fn format_or_default(&self) -> ClipFormat {
        self.format
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get play setting, or false if not set
    pub fn play_or_default(&self) -> bool {
        self.play.unwrap_or(false)
    }
}
