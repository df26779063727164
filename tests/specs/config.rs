//! Behavioral specs for config loading.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// Patterns and mode come from rexbench.toml
#[test]
fn config_patterns_and_mode_are_used() {
    let temp = Project::with_corpus("alpha beta alpha");
    temp.config(
        r#"version = 1
patterns = ["beta", "alpha"]
mode = "inline"
"#,
    );

    rexbench_cmd()
        .arg("run")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("Match 0: beta\nMatch 1: alpha\nMatch 1: alpha\n");
}

/// Config is discovered from a subdirectory and paths resolve against it
#[test]
fn config_discovered_from_subdirectory() {
    let temp = Project::empty();
    temp.file("corpora/small.txt", "hello");
    temp.file("nested/dir/.keep", "");
    temp.config(
        r#"version = 1
corpus = "corpora/small.txt"
mode = "inline"
"#,
    );

    rexbench_cmd()
        .arg("run")
        .current_dir(temp.path().join("nested/dir"))
        .assert()
        .success()
        .stdout("Match 0: hello\n");
}

/// CLI flags override config values
#[test]
fn cli_flags_override_config() {
    let temp = Project::with_corpus("hello");
    temp.config("version = 1\nmode = \"handshake\"\npatterns = [\"nope\"]\n");

    rexbench_cmd()
        .args(["run", "--mode", "inline", "-p", "hello"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("Match 0: hello\n");
}

/// `-C` selects an explicit config file
#[test]
fn explicit_config_flag() {
    let temp = Project::with_corpus("Pikles");
    temp.file(
        "bench/alt.toml",
        "version = 1\ncorpus = \"../data/test_corpus.txt\"\nmode = \"inline\"\n",
    );

    rexbench_cmd()
        .args(["run", "-C", "bench/alt.toml"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("Match 1: Pikles\n");
}

/// Unknown keys warn but do not fail
#[test]
fn unknown_config_key_warns() {
    let temp = Project::with_corpus("hello");
    temp.config("version = 1\nmode = \"inline\"\nengine = \"java\"\n");

    rexbench_cmd()
        .arg("run")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicates::str::contains("unrecognized key `engine`"));
}

/// Invalid config exits with code 2
#[test]
fn invalid_config_exits_with_config_error() {
    let temp = Project::with_corpus("hello");
    temp.config("version = 1\nmode = \"sideways\"\n");

    rexbench_cmd()
        .arg("run")
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to parse config"));
}
