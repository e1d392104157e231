//! End-to-end tests for the cachebust binary.
//!
//! Each test runs the binary with HOME and XDG_CONFIG_HOME pointed at a temp
//! directory so no user configuration leaks in.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run(home: &Path, args: &[&str]) -> Output {
    run_with_env(home, args, &[])
}

fn command(home: &Path, args: &[&str], env: &[(&str, &str)]) -> Command {
    let bin = env!("CARGO_BIN_EXE_cachebust");
    let mut command = Command::new(bin);
    command
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env_remove("CACHEBUST_ENV")
        .env_remove("CACHEBUST_LOG")
        .env_remove("CACHEBUST_FINGERPRINT__LENGTH")
        .env_remove("CACHEBUST_MANIFEST__IGNORE_PATTERNS")
        .args(args);
    for (key, value) in env {
        command.env(key, value);
    }
    command
}

fn run_with_env(home: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    command(home, args, env).output().unwrap()
}

fn run_with_stdin(home: &Path, args: &[&str], input: &[u8]) -> Output {
    let mut child = command(home, args, &[])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input).unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "cachebust should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

#[test]
fn test_content_command() {
    let temp_dir = TempDir::new().unwrap();
    let ws = temp_dir.path().to_string_lossy();
    let output = run(temp_dir.path(), &["--workspace", ws.as_ref(), "content", "hello"]);
    assert_eq!(stdout(&output), "c34a2e");
}

#[test]
fn test_content_command_with_length() {
    let temp_dir = TempDir::new().unwrap();
    let ws = temp_dir.path().to_string_lossy();
    let output = run(
        temp_dir.path(),
        &["--workspace", ws.as_ref(), "content", "hello", "--length", "99"],
    );
    assert_eq!(stdout(&output), "c34a2ed21f522b7c6a276cf9040c982f");
}

#[test]
fn test_salt_command() {
    let temp_dir = TempDir::new().unwrap();
    let ws = temp_dir.path().to_string_lossy();
    let output = run(temp_dir.path(), &["--workspace", ws.as_ref(), "salt", "index"]);
    assert_eq!(stdout(&output), "6a992d");

    let output = run(
        temp_dir.path(),
        &["--workspace", ws.as_ref(), "salt", "--path", "_posts/index.md"],
    );
    assert_eq!(stdout(&output), "6a992d");
}

#[test]
fn test_url_command() {
    let temp_dir = TempDir::new().unwrap();
    let css = temp_dir.path().join("main.css");
    fs::write(&css, "body { color: red; }\n").unwrap();
    let ws = temp_dir.path().to_string_lossy();
    let css_arg = css.to_string_lossy();

    let output = run(
        temp_dir.path(),
        &["--workspace", ws.as_ref(), "url", "/assets/main.css", "--file", css_arg.as_ref()],
    );
    assert_eq!(stdout(&output), "/assets/main.css?v=abc161");
}

#[test]
fn test_workspace_config_sets_length() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("cachebust.toml"),
        "[fingerprint]\nlength = 8\n",
    )
    .unwrap();
    let ws = temp_dir.path().to_string_lossy();

    let output = run(temp_dir.path(), &["--workspace", ws.as_ref(), "content", "hello"]);
    assert_eq!(stdout(&output), "c34a2ed2");
}

#[test]
fn test_environment_overrides_workspace_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("cachebust.toml"),
        "[fingerprint]\nlength = 8\n",
    )
    .unwrap();
    let ws = temp_dir.path().to_string_lossy();

    let output = run_with_env(
        temp_dir.path(),
        &["--workspace", ws.as_ref(), "content", "hello"],
        &[("CACHEBUST_FINGERPRINT__LENGTH", "4")],
    );
    assert_eq!(stdout(&output), "c34a");
}

#[test]
fn test_manifest_json_command() {
    let temp_dir = TempDir::new().unwrap();
    let site = temp_dir.path().join("site");
    fs::create_dir_all(&site).unwrap();
    fs::write(site.join("a.txt"), "a").unwrap();
    let ws = temp_dir.path().to_string_lossy();
    let site_arg = site.to_string_lossy();

    let output = run(
        temp_dir.path(),
        &["--workspace", ws.as_ref(), "manifest", site_arg.as_ref(), "--format", "json"],
    );
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["entries"][0]["url"], "a.txt?v=4124bc");
}

#[test]
fn test_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let ws = temp_dir.path().to_string_lossy();
    let missing = temp_dir.path().join("missing.css");
    let missing_arg = missing.to_string_lossy();

    let output = run(
        temp_dir.path(),
        &["--workspace", ws.as_ref(), "content", "--file", missing_arg.as_ref()],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("error:"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let ws = temp_dir.path().to_string_lossy();
    let output = run(
        temp_dir.path(),
        &["--workspace", ws.as_ref(), "--verbose", "--log-format", "json", "salt", "index"],
    );
    assert_eq!(stdout(&output), "6a992d");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Command finished"));
}

#[test]
fn test_content_from_stdin() {
    let temp_dir = TempDir::new().unwrap();
    let ws = temp_dir.path().to_string_lossy();
    let output = run_with_stdin(
        temp_dir.path(),
        &["--workspace", ws.as_ref(), "content"],
        b"  hello\n",
    );
    assert_eq!(stdout(&output), "c34a2e");
}

#[test]
fn test_binary_content_from_stdin() {
    let temp_dir = TempDir::new().unwrap();
    let ws = temp_dir.path().to_string_lossy();
    let output = run_with_stdin(
        temp_dir.path(),
        &["--workspace", ws.as_ref(), "content"],
        &[0x89, b'P', b'N', b'G', 0xff],
    );
    // md5(89 50 4e 47 ff 89 50 4e) = 56bdc355...
    assert_eq!(stdout(&output), "56bdc3");
}

#[test]
fn test_environment_sets_ignore_patterns() {
    let temp_dir = TempDir::new().unwrap();
    let site = temp_dir.path().join("site");
    fs::create_dir_all(site.join("vendor")).unwrap();
    fs::create_dir_all(site.join("dist")).unwrap();
    fs::write(site.join("vendor/lib.js"), "lib();").unwrap();
    fs::write(site.join("dist/app.js"), "app();").unwrap();
    fs::write(site.join("a.txt"), "a").unwrap();
    let ws = temp_dir.path().to_string_lossy();
    let site_arg = site.to_string_lossy();

    let output = run_with_env(
        temp_dir.path(),
        &["--workspace", ws.as_ref(), "manifest", site_arg.as_ref()],
        &[("CACHEBUST_MANIFEST__IGNORE_PATTERNS", "vendor,dist")],
    );
    assert_eq!(stdout(&output), "4124bc  0cc175  a.txt");

    // Other commands keep working with the list set.
    let output = run_with_env(
        temp_dir.path(),
        &["--workspace", ws.as_ref(), "salt", "index"],
        &[("CACHEBUST_MANIFEST__IGNORE_PATTERNS", "vendor")],
    );
    assert_eq!(stdout(&output), "6a992d");
}

#[test]
fn test_zero_length_flag_fails() {
    let temp_dir = TempDir::new().unwrap();
    let ws = temp_dir.path().to_string_lossy();
    let output = run(
        temp_dir.path(),
        &["--workspace", ws.as_ref(), "content", "hello", "--length", "0"],
    );
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_log_env_without_verbose_stays_quiet() {
    let temp_dir = TempDir::new().unwrap();
    let ws = temp_dir.path().to_string_lossy();
    let output = run_with_env(
        temp_dir.path(),
        &["--workspace", ws.as_ref(), "salt", "index"],
        &[("CACHEBUST_LOG", "debug"), ("CACHEBUST_LOG_FORMAT", "json")],
    );
    assert_eq!(stdout(&output), "6a992d");
    assert!(
        output.stderr.is_empty(),
        "no logs expected without --verbose: {:?}",
        String::from_utf8_lossy(&output.stderr)
    );
}
