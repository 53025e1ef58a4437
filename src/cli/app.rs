//! Main app runner for the one-shot capture

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use colored::Colorize;

use crate::application::ports::ConfigStore;
use crate::application::{CaptureCallbacks, CaptureClipUseCase, CaptureInput};
use crate::domain::clip::{ClipFormat, ClipSpec};
use crate::domain::config::AppConfig;
use crate::infrastructure::{create_writer, CpalClipPlayer, CpalClipRecorder, XdgConfigStore};

use super::args::CaptureOptions;
use super::presenter::Presenter;
use super::signals::ShutdownSignal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Run the one-shot capture
pub async fn run_capture(options: CaptureOptions) -> ExitCode {
    let presenter = Presenter::new();

    // Create adapters
    let recorder = CpalClipRecorder::new();
    let player = CpalClipPlayer::new();
    let writer = create_writer(options.format);

    // Create use case
    let use_case = CaptureClipUseCase::new(recorder, player, writer);

    // Cancel the capture on Ctrl-C
    let shutdown = ShutdownSignal::with_flag(use_case.stop_flag());
    shutdown.setup();

    let spec = ClipSpec::for_duration(options.duration);

    // Create input
    let input = CaptureInput {
        spec,
        save_to: options.save_to.clone(),
        play: options.play,
    };

    // Progress bar in seconds, driven by the frames-captured callback
    let bar = presenter.recording_bar(spec.duration().as_secs());
    let sample_rate = spec.sample_rate() as u64;

    let bar_progress = bar.clone();
    let bar_end = bar.clone();
    let saved_path = options.save_to.clone();

    let callbacks = CaptureCallbacks {
        on_progress: Some(Arc::new(move |frames, _total| {
            bar_progress.set_position(frames / sample_rate);
        })),
        on_recording_end: Some(Box::new(move |size: &str| {
            bar_end.finish_and_clear();
            eprintln!("{} Recording complete ({})", "✓".green(), size);
        })),
        on_saving_end: Some(Box::new(move || {
            if let Some(ref path) = saved_path {
                eprintln!("{} Saved to {}", "✓".green(), path.display());
            }
        })),
        on_playback_start: Some(Box::new(|| {
            eprintln!("{} Playing back...", "⠋".cyan());
        })),
        on_playback_end: Some(Box::new(|| {
            eprintln!("{} Playback complete", "✓".green());
        })),
        ..Default::default()
    };

    // Execute
    match use_case.execute(input, callbacks).await {
        Ok(_) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            bar.finish_and_clear();
            if e.is_cancelled() {
                presenter.warn("Capture cancelled");
            } else {
                presenter.error(&e.to_string());
            }
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Load and merge configuration from file and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Decide where the clip should be written and in which format.
///
/// An explicit --format wins over the output extension; the extension wins
/// over the configured format; --format with no --output writes the fixed
/// filename `recorded.<ext>`; no --output and no --format means no file.
pub fn resolve_save_target(
    output: Option<PathBuf>,
    cli_format: Option<ClipFormat>,
    config_format: ClipFormat,
) -> (Option<PathBuf>, ClipFormat) {
    match (output, cli_format) {
        (Some(path), Some(format)) => (Some(path), format),
        (Some(path), None) => {
            let format = ClipFormat::from_path(&path).unwrap_or(config_format);
            (Some(path), format)
        }
        (None, Some(format)) => {
            let path = PathBuf::from(format!("recorded.{}", format.extension()));
            (Some(path), format)
        }
        (None, None) => (None, config_format),
    }
}
