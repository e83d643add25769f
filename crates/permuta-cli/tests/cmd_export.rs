//! Integration tests for `permuta export`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::Command;

/// Path to the compiled `permuta` binary.
fn permuta_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    // current_exe is something like .../deps/cmd_export-<hash>
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
fn export_to_stdout_is_canonical_csv() {
    let ring = fixture("ring.csv");
    let out = run(&["export", ring.to_str().expect("path")]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let mut lines = stdout.lines();
    assert_eq!(
        lines.next(),
        Some("Nome,Origem,Destino 1,Destino 2,Destino 3,Entrância")
    );
    assert_eq!(lines.next(), Some("A,X,Y,,,unspecified"));
    assert_eq!(stdout.lines().count(), 5);
}

#[test]
fn export_to_xlsx_reads_back() {
    let network = fixture("network.csv");
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("participantes.xlsx");
    let out = run(&[
        "export",
        network.to_str().expect("path"),
        "-o",
        target.to_str().expect("path"),
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(target.exists());

    let again = run(&["swaps", target.to_str().expect("path")]);
    assert!(again.status.success());
    let stderr = String::from_utf8_lossy(&again.stderr);
    assert!(stderr.contains("found 2 direct swaps"), "stderr: {stderr}");
}

#[test]
fn export_to_unsupported_extension_exits_2() {
    let ring = fixture("ring.csv");
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("out.ods");
    let out = run(&[
        "export",
        ring.to_str().expect("path"),
        "-o",
        target.to_str().expect("path"),
    ]);
    assert_eq!(out.status.code(), Some(2));
}
