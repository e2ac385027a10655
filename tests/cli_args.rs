//! Tests for the command line, run against the built binary.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{listing_json, sample_images, temp_config};
use std::process::{Command, Output};

fn gallery_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_picsum-gallery"))
}

/// Command with a config path that does not exist, so defaults apply.
fn isolated_cmd(dir: &tempfile::TempDir) -> Command {
    let mut cmd = gallery_cmd();
    cmd.arg("--config").arg(dir.path().join("config.toml"));
    cmd.env_remove("PICSUM_GALLERY_LOG");
    cmd
}

async fn run_blocking(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().expect("Failed to execute command"))
        .await
        .unwrap()
}

#[test]
fn test_help_lists_options() {
    let output = gallery_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--page"));
    assert!(stdout.contains("--print"));
    assert!(stdout.contains("--base-url"));
}

#[test]
fn test_page_zero_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = isolated_cmd(&dir)
        .args(["--page", "0", "--print"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Page 0 is out of range (1-50)"));
}

#[test]
fn test_page_range_follows_config() {
    let (_dir, path) = temp_config("[pagination]\nper_page = 100\n");
    let output = gallery_cmd()
        .arg("--config")
        .arg(&path)
        .args(["--page", "11", "--print"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Page 11 is out of range (1-10)"));
}

#[test]
fn test_broken_config_exits_with_error() {
    let (_dir, path) = temp_config("this is = = not toml");
    let output = gallery_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--print")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"));
}

#[test]
fn test_bad_base_url_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = isolated_cmd(&dir)
        .args(["--base-url", "localhost:1234", "--print"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config validation failed"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_print_lists_page() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(&listing_json(&sample_images(&["41", "42"]))))
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let mut cmd = isolated_cmd(&dir);
    cmd.args(["--print", "--page", "3", "--base-url", &backend.base_url()]);
    let output = run_blocking(cmd).await;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Page 3 / 50"));
    assert!(stdout.contains("Test Author 41"));
    assert!(stdout.contains("https://example.com/download/42"));

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].query.as_deref(), Some("page=3&limit=20"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_print_reports_fetch_failure() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(500, "down"))
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let mut cmd = isolated_cmd(&dir);
    cmd.args(["--print", "--base-url", &backend.base_url()]);
    let output = run_blocking(cmd).await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to fetch images"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_log_file_records_fetch() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(&listing_json(&sample_images(&["7"]))))
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let log_base = dir.path().join("logs").join("gallery.log");
    let mut cmd = isolated_cmd(&dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(["--print", "--base-url", &backend.base_url()]);
    cmd.arg("--log-file").arg(&log_base);
    let output = run_blocking(cmd).await;
    assert!(output.status.success());

    let log_files: Vec<_> = std::fs::read_dir(dir.path().join("logs"))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(log_files.len(), 1);
    let name = log_files[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("gallery.log."));

    let contents = std::fs::read_to_string(&log_files[0]).unwrap();
    assert!(contents.contains("Fetched image page"));
    assert!(!contents.contains("hyper"));
}
