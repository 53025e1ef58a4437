//! MicCheck CLI entry point

use std::process::ExitCode;

use clap::Parser;

use mic_check::cli::{
    app::{load_merged_config, resolve_save_target, run_capture, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{CaptureOptions, Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use mic_check::domain::clip::ClipFormat;
use mic_check::domain::config::AppConfig;
use mic_check::domain::recording::Duration;
use mic_check::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        duration: cli.duration.clone(),
        format: cli.format.map(|f| ClipFormat::from(f).as_str().to_string()),
        play: if cli.play { Some(true) } else { None },
    };

    // Merge config: defaults < file < cli
    let config = load_merged_config(cli_config).await;

    // Parse duration
    let duration = match config.duration.as_ref() {
        Some(s) => match s.parse::<Duration>() {
            Ok(d) => d,
            Err(e) => {
                presenter.error(&format!("Invalid duration: {}", e));
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        },
        None => Duration::default_duration(),
    };

    // Decide where (and whether) the clip gets written
    let (save_to, format) = resolve_save_target(
        cli.output.clone(),
        cli.format.map(ClipFormat::from),
        config.format_or_default(),
    );

    // Play back when asked to, or when the clip is not being saved
    let play = config.play_or_default() || save_to.is_none();

    let options = CaptureOptions {
        duration,
        save_to,
        format,
        play,
    };

    run_capture(options).await
}
