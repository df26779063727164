//! Behavioral specs for `rexbench init` command.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// rexbench init creates rexbench.toml in current directory
#[test]
fn init_creates_config_in_current_directory() {
    let temp = Project::empty();

    rexbench_cmd()
        .args(["init"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Created rexbench.toml"));

    assert!(temp.read("rexbench.toml").contains("patterns = [\"hello\", \"Pikles\"]"));
}

/// Refuses to overwrite existing rexbench.toml without --force
#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = Project::empty();
    temp.config("version = 1\n# existing\n");

    rexbench_cmd()
        .args(["init"])
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("already exists"))
        .stderr(predicates::str::contains("--force"));

    assert!(temp.read("rexbench.toml").contains("# existing"));
}

/// --force overwrites existing rexbench.toml
#[test]
fn init_force_overwrites_existing_config() {
    let temp = Project::empty();
    temp.config("version = 1\n# existing content\n");

    rexbench_cmd()
        .args(["init", "--force"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(!temp.read("rexbench.toml").contains("# existing content"));
}
