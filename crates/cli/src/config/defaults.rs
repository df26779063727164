// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference.
//! Config structs delegate to these via their `default_*` functions.

/// Name of the config file looked up by discovery.
pub const CONFIG_FILE: &str = "rexbench.toml";

/// Only supported config schema version.
pub const CONFIG_VERSION: i64 = 1;

/// Default corpus location, relative to the config file.
pub const CORPUS: &str = "data/test_corpus.txt";

/// Patterns used when neither the CLI nor the config names any.
pub fn patterns() -> Vec<String> {
    vec!["hello".to_string(), "Pikles".to_string()]
}

/// Default marker-file handshake settings.
pub mod handshake {
    /// Directory holding the three markers.
    pub const DIR: &str = "regex_engines";

    pub const READY: &str = "ready_pipe";
    pub const START: &str = "start_pipe";
    pub const DONE: &str = "done_pipe";

    /// Delay between start-marker checks (10ms).
    pub const POLL_INTERVAL_MS: u64 = 10;

    /// Give up on the start marker after ten minutes. Zero waits forever.
    pub const TIMEOUT_SECS: u64 = 600;
}

/// Contents written by `rexbench init`.
pub fn template() -> String {
    format!(
        r#"version = {CONFIG_VERSION}

# Text searched by every pattern.
corpus = "{CORPUS}"

# Regex sources, matched in order with find-all semantics.
patterns = ["hello", "Pikles"]

# "handshake" waits for the coordinator; "inline" starts immediately.
mode = "handshake"

[handshake]
dir = "{dir}"
ready = "{ready}"
start = "{start}"
done = "{done}"
poll_interval_ms = {poll}
# Seconds to wait for the start marker (0 = forever).
timeout_secs = {timeout}
"#,
        dir = handshake::DIR,
        ready = handshake::READY,
        start = handshake::START,
        done = handshake::DONE,
        poll = handshake::POLL_INTERVAL_MS,
        timeout = handshake::TIMEOUT_SECS,
    )
}
