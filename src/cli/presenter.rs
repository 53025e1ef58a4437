//! CLI presenter for output formatting

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Create a progress bar for a bounded capture.
    /// Position and length are in seconds; the caller drives the position
    /// from the frames-captured progress callback.
    pub fn recording_bar(&self, total_secs: u64) -> ProgressBar {
        let bar = ProgressBar::new(total_secs);
        bar.set_style(
            ProgressStyle::default_bar()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} Recording... [{bar:20.cyan}] {pos:>3}s / {len}s")
                .unwrap()
                .progress_chars("█░ "),
        );
        bar.enable_steady_tick(std::time::Duration::from_millis(80));
        bar
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (machine-readable output)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_bar_length_is_total_secs() {
        let presenter = Presenter::new();
        let bar = presenter.recording_bar(5);
        assert_eq!(bar.length(), Some(5));
        bar.finish_and_clear();
    }

    #[test]
    fn recording_bar_tracks_position() {
        let presenter = Presenter::new();
        let bar = presenter.recording_bar(10);
        bar.set_position(4);
        assert_eq!(bar.position(), 4);
        bar.finish_and_clear();
    }
}
