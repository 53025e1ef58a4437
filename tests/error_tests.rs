use assert_cmd::Command;
use predicates::prelude::*;

fn mic_check_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mic-check"));
    // Keep the user's real config file out of the picture
    cmd.env("HOME", "/nonexistent");
    cmd.env("XDG_CONFIG_HOME", "/nonexistent");
    cmd
}

#[test]
fn config_get_unknown_key() {
    mic_check_bin()
        .args(["config", "get", "api_key"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown key"))
        .stderr(predicate::str::contains("duration, format, play"));
}

#[test]
fn config_set_unknown_key() {
    mic_check_bin()
        .args(["config", "set", "volume", "11"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_invalid_duration() {
    mic_check_bin()
        .args(["config", "set", "duration", "fast"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config value for 'duration'"));
}

#[test]
fn config_set_invalid_format() {
    mic_check_bin()
        .args(["config", "set", "format", "mp3"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid config value for 'format'"))
        .stderr(predicate::str::contains("raw, wav, flac"));
}

#[test]
fn config_set_invalid_play() {
    mic_check_bin()
        .args(["config", "set", "play", "maybe"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Value must be 'true' or 'false'"));
}

#[test]
fn config_get_with_no_file_reports_not_set() {
    mic_check_bin()
        .args(["config", "get", "duration"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn config_list_with_no_file() {
    mic_check_bin()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("duration"))
        .stdout(predicate::str::contains("format"))
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("(not set)"));
}
