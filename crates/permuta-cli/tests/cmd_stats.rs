//! Integration tests for `permuta stats`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::Command;

/// Path to the compiled `permuta` binary.
fn permuta_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    // current_exe is something like .../deps/cmd_stats-<hash>
    // The binary lives in the parent directory.
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("permuta");
    path
}

/// Path to a shared fixture file.
fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    path
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(permuta_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run permuta")
}

#[test]
fn stats_prints_totals_and_rankings() {
    let network = fixture("network.csv");
    let out = run(&["stats", network.to_str().expect("path")]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("participants:\t7\n"), "stdout: {stdout}");
    assert!(stdout.contains("courts:\t10\n"), "stdout: {stdout}");
    assert!(stdout.contains("preferences:\t8\n"), "stdout: {stdout}");
    assert!(stdout.contains("direct swaps:\t2\n"), "stdout: {stdout}");
    assert!(stdout.contains("most requested:\n  TJRJ\t2\n"), "stdout: {stdout}");
}

#[test]
fn stats_normalize_keys_merges_spellings() {
    let network = fixture("network.csv");
    let out = run(&[
        "--format",
        "json",
        "stats",
        network.to_str().expect("path"),
        "--normalize-keys",
        "--top",
        "3",
    ]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    let courts = value["courts"].as_object().expect("courts map");
    assert_eq!(courts.len(), 8);
    assert_eq!(courts["Goiânia"]["connectivity"], 2);
    assert_eq!(value["most_connected"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["summary"]["participants"], 7);
}
