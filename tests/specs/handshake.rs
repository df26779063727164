//! Behavioral specs for handshake mode.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::Path;
use std::process::Stdio;
use std::thread;
use std::time::{Duration, Instant};

use crate::prelude::*;

fn wait_for(path: &Path, limit: Duration) {
    let started = Instant::now();
    while !path.exists() {
        assert!(started.elapsed() < limit, "{} never appeared", path.display());
        thread::sleep(Duration::from_millis(10));
    }
}

/// Ready is written, matching waits for start, done follows the output
#[test]
fn handshake_round_trip() {
    let temp = Project::with_corpus("hello world hello\n");

    let child = rexbench_cmd()
        .args(["run", "--timeout", "30"])
        .current_dir(temp.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("command should start");

    wait_for(&temp.marker("ready_pipe"), Duration::from_secs(30));
    assert_eq!(std::fs::read_to_string(temp.marker("ready_pipe")).unwrap(), "ready\n");
    assert!(!temp.marker("done_pipe").exists(), "done before start");

    std::fs::write(temp.marker("start_pipe"), "start\n").unwrap();
    let output = child.wait_with_output().expect("command should finish");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Pattern 0: hello\nMatch: hello\nMatch: hello\n\nPattern 1: Pikles\n\n"
    );
    assert_eq!(std::fs::read_to_string(temp.marker("done_pipe")).unwrap(), "done\n");
}

/// A start marker already present lets matching begin immediately
#[test]
fn existing_start_marker_starts_immediately() {
    let temp = Project::with_corpus("Pikles");
    temp.file("regex_engines/start_pipe", "");

    rexbench_cmd()
        .args(["run", "--timeout", "5"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("Pattern 0: hello\n\nPattern 1: Pikles\nMatch: Pikles\n\n");

    assert!(temp.marker("done_pipe").exists());
}

/// No start marker within the timeout exits with code 3 and no output
#[test]
fn start_timeout_exits_with_timeout_code() {
    let temp = Project::with_corpus("hello");

    rexbench_cmd()
        .args(["run", "--timeout", "1", "--poll-interval", "5"])
        .current_dir(temp.path())
        .assert()
        .code(3)
        .stdout("")
        .stderr(predicates::str::contains("timed out"));

    assert!(temp.marker("ready_pipe").exists());
    assert!(!temp.marker("done_pipe").exists());
}

/// `--marker-dir` relocates all three markers
#[test]
fn marker_dir_override() {
    let temp = Project::with_corpus("hello");
    temp.file("pipes/start_pipe", "go");

    rexbench_cmd()
        .args(["run", "--marker-dir", "pipes", "--timeout", "5"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(temp.read("pipes/ready_pipe"), "ready\n");
    assert_eq!(temp.read("pipes/done_pipe"), "done\n");
}

/// Summary is on disk by the time done appears
#[test]
fn summary_written_before_done() {
    let temp = Project::with_corpus("hello");
    temp.file("regex_engines/start_pipe", "");

    rexbench_cmd()
        .args(["run", "--timeout", "5", "--summary", "summary.json"])
        .current_dir(temp.path())
        .assert()
        .success();

    let summary: serde_json::Value = serde_json::from_str(&temp.read("summary.json")).unwrap();
    assert_eq!(summary["mode"], "handshake");
    assert!(summary.get("start_wait_us").is_some());
    assert!(temp.marker("done_pipe").exists());
}
