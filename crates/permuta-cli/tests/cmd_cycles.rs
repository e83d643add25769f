//! Integration tests for `permuta cycles`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::Command;

/// Path to the compiled `permuta` binary.
fn permuta_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    // current_exe is something like .../deps/cmd_cycles-<hash>
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
fn cycles_finds_the_triangle() {
    let network = fixture("network.csv");
    let out = run(&["cycles", network.to_str().expect("path"), "--length", "3"]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout,
        "cycle 1:\n  Bia\tIntermediária\tTJRJ → TJMG\n  Caio\tunspecified\tTJMG → TJBA\n  Duda\tInicial\tTJBA → TJRJ\n"
    );
}

#[test]
fn cycles_finds_the_ring_once() {
    let ring = fixture("ring.csv");
    let out = run(&["--format", "json", "cycles", ring.to_str().expect("path"), "-k", "4"]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(value["length"], 4);
    assert_eq!(value["count"], 1);
    let members = value["cycles"][0]["members"].as_array().expect("members");
    assert_eq!(members.len(), 4);
    assert_eq!(members[0]["name"], "A");
    assert_eq!(members[0]["next_hop_court"], "Y");
}

#[test]
fn cycles_route_filter_without_match_is_empty() {
    let ring = fixture("ring.csv");
    let out = run(&[
        "cycles",
        ring.to_str().expect("path"),
        "--length",
        "4",
        "--origin",
        "X",
        "--dest",
        "Z",
    ]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty(), "stdout: {}", String::from_utf8_lossy(&out.stdout));
}

#[test]
fn cycles_above_cap_is_empty_with_warning() {
    let ring = fixture("ring.csv");
    let out = run(&["cycles", ring.to_str().expect("path"), "--length", "7"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("found 0 7-way cycles"), "stderr: {stderr}");
}

#[test]
fn cycles_length_one_is_a_usage_error() {
    let ring = fixture("ring.csv");
    let out = run(&["cycles", ring.to_str().expect("path"), "--length", "1"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn cycles_lone_dest_exits_1() {
    let ring = fixture("ring.csv");
    let out = run(&["cycles", ring.to_str().expect("path"), "--length", "4", "--dest", "X"]);
    assert_eq!(out.status.code(), Some(1));
}
