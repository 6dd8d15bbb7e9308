//! End-to-end CLI integration tests.
//!
//! Every test runs in a temporary directory holding its own `herald.toml`
//! and with the `TELEGRAM_*` variables cleared, so nothing reaches the real
//! Bot API.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const TOKEN: &str = "123456789:ABCdefGHIjklMNOpqrsTUVwxyz123456789";

fn herald(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("herald").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("TELEGRAM_BOT_TOKEN")
        .env_remove("TELEGRAM_CHAT_ID")
        .env_remove("HERALD_TELEGRAM_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

fn project(telegram_table: &str) -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    fs::write(
        dir.path().join("herald.toml"),
        format!("[plugins.telegram]\n{telegram_table}"),
    )
    .expect("failed to write herald.toml");
    dir
}

fn configured_project() -> TempDir {
    project(&format!("bot_token = \"{TOKEN}\"\nchat_id = \"@releases\"\n"))
}

/// Returns a URL nothing listens on.
fn closed_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

// ============================================================================
// Info
// ============================================================================

#[test]
fn test_info() {
    let dir = TempDir::new().unwrap();
    herald(&dir)
        .arg("info")
        .assert()
        .success()
        .stdout(contains("telegram v"))
        .stdout(contains("Hooks: post-publish, on-success, on-error"))
        .stdout(contains("parse_mode (default: \"MarkdownV2\")"));
}

#[test]
fn test_info_json() {
    let dir = TempDir::new().unwrap();
    herald(&dir)
        .args(["info", "--json"])
        .assert()
        .success()
        .stdout(contains("\"name\": \"telegram\""))
        .stdout(contains("\"config_schema\""));
}

// ============================================================================
// Validate
// ============================================================================

#[test]
fn test_validate_valid_config() {
    let dir = configured_project();
    herald(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(contains("Configuration is valid"));
}

#[test]
fn test_validate_malformed_token() {
    let dir = project("bot_token = \"abc\"\nchat_id = \"@releases\"\n");
    herald(&dir)
        .arg("validate")
        .assert()
        .failure()
        .stdout(contains("bot_token: invalid bot token format [format]"))
        .stderr(contains("configuration is invalid (1 error)"));
}

#[test]
fn test_validate_invalid_parse_mode_json() {
    let dir = project(&format!(
        "bot_token = \"{TOKEN}\"\nchat_id = \"@releases\"\nparse_mode = \"Markdown\"\n"
    ));
    herald(&dir)
        .args(["validate", "--json"])
        .assert()
        .failure()
        .stdout(contains("\"valid\":false"))
        .stdout(contains("\"code\":\"enum\""));
}

#[test]
fn test_validate_missing_everything() {
    let dir = project("");
    herald(&dir)
        .arg("validate")
        .assert()
        .failure()
        .stdout(contains("bot_token: Telegram bot token is required"))
        .stdout(contains("chat_id: Chat ID is required"))
        .stderr(contains("2 errors"));
}

#[test]
fn test_validate_env_fallback() {
    let dir = project("parse_mode = \"HTML\"\n");
    herald(&dir)
        .env("TELEGRAM_BOT_TOKEN", TOKEN)
        .env("TELEGRAM_CHAT_ID", "-1001234567890")
        .arg("validate")
        .assert()
        .success();
}

#[test]
fn test_validate_explicit_config_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        format!("[plugins.telegram]\nbot_token = \"{TOKEN}\"\nchat_id = \"42\"\n"),
    )
    .unwrap();

    herald(&dir)
        .args(["validate", "--config"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_validate_missing_config_path() {
    let dir = TempDir::new().unwrap();
    herald(&dir)
        .args(["validate", "--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(contains("failed to load configuration from nope.toml"));
}

#[test]
fn test_validate_invalid_toml() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("herald.toml"), "[plugins.telegram\n").unwrap();
    herald(&dir)
        .arg("validate")
        .assert()
        .failure()
        .stderr(contains("failed to load configuration"));
}

// ============================================================================
// Notify
// ============================================================================

#[test]
fn test_notify_dry_run_success() {
    let dir = configured_project();
    herald(&dir)
        .args([
            "notify",
            "--hook",
            "post-publish",
            "--release-version",
            "1.2.3",
            "--tag",
            "v1.2.3",
            "--branch",
            "main",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(contains("Would send Telegram success notification"))
        .stdout(contains("chat_id: @releases"))
        .stdout(contains("version: 1.2.3"))
        .stdout(contains("message_length:"));
}

#[test]
fn test_notify_dry_run_error_json() {
    let dir = configured_project();
    herald(&dir)
        .args([
            "notify",
            "--hook",
            "on-error",
            "--release-version",
            "1.2.3",
            "--dry-run",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"success\":true"))
        .stdout(contains("Would send Telegram error notification"))
        .stdout(contains("message_length").not());
}

#[test]
fn test_notify_event_file() {
    let dir = configured_project();
    fs::write(
        dir.path().join("event.json"),
        r#"{"version": "2.0.0", "tag_name": "v2.0.0", "branch": "main", "release_type": "major"}"#,
    )
    .unwrap();

    herald(&dir)
        .args([
            "notify",
            "--hook",
            "on-success",
            "--event",
            "event.json",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(contains("version: 2.0.0"));
}

#[test]
fn test_notify_disabled() {
    let dir = project(&format!(
        "bot_token = \"{TOKEN}\"\nchat_id = \"@releases\"\nnotify_on_success = false\n"
    ));
    herald(&dir)
        .args(["notify", "--hook", "on-success", "--release-version", "1.0.0"])
        .assert()
        .success()
        .stdout(contains("Success notification disabled"));
}

#[test]
fn test_notify_unhandled_hook() {
    let dir = configured_project();
    herald(&dir)
        .args(["notify", "--hook", "pre-bump"])
        .assert()
        .success()
        .stdout(contains("Hook pre-bump not handled"));
}

#[test]
fn test_notify_delivery_failure_exits_non_zero() {
    let dir = configured_project();
    herald(&dir)
        .env("HERALD_TELEGRAM_API_URL", closed_url())
        .args(["notify", "--hook", "on-error", "--release-version", "1.0.0"])
        .assert()
        .failure()
        .stderr(contains("failed to send Telegram message"))
        .stderr(contains(TOKEN).not());
}

#[test]
fn test_notify_missing_chat_exits_non_zero() {
    let dir = project(&format!("bot_token = \"{TOKEN}\"\n"));
    herald(&dir)
        .env("HERALD_TELEGRAM_API_URL", closed_url())
        .args(["notify", "--hook", "on-success", "--release-version", "1.0.0"])
        .assert()
        .failure()
        .stderr(contains("chat_id is required"));
}

#[test]
fn test_notify_requires_hook() {
    let dir = TempDir::new().unwrap();
    herald(&dir).arg("notify").assert().failure();
}

// ============================================================================
// Exec
// ============================================================================

#[test]
fn test_exec_dry_run() {
    let dir = TempDir::new().unwrap();
    herald(&dir)
        .arg("exec")
        .write_stdin(
            r#"{
                "hook": "post-publish",
                "dry_run": true,
                "config": {"chat_id": "@releases"},
                "context": {"version": "1.2.3", "branch": "main"}
            }"#,
        )
        .assert()
        .success()
        .stdout(contains("\"success\":true"))
        .stdout(contains("Would send Telegram success notification"))
        .stdout(contains("\"chat_id\":\"@releases\""));
}

#[test]
fn test_exec_failure_is_data() {
    let dir = TempDir::new().unwrap();
    herald(&dir)
        .env("HERALD_TELEGRAM_API_URL", closed_url())
        .arg("exec")
        .write_stdin(format!(
            r#"{{"hook": "on-error", "config": {{"bot_token": "{TOKEN}", "chat_id": "@x"}}}}"#
        ))
        .assert()
        .success()
        .stdout(contains("\"success\":false"))
        .stdout(contains("failed to send Telegram message"));
}

#[test]
fn test_exec_invalid_request() {
    let dir = TempDir::new().unwrap();
    herald(&dir)
        .arg("exec")
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(contains("invalid request"));
}
