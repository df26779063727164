// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading for `rexbench.toml`.
//!
//! Precedence is CLI flags, then the config file, then [`defaults`].
//! Relative paths in a config file resolve against the file's directory.

pub mod defaults;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::handshake::{Handshake, Markers};

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("unsupported config version {version} in {} (expected {expected})", path.display())]
    Version { path: PathBuf, version: i64, expected: i64 },
}

/// Harness variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Marker-file handshake with an external coordinator.
    #[default]
    Handshake,
    /// No handshake; match immediately.
    Inline,
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_version")]
    pub version: i64,

    /// Corpus file.
    #[serde(default = "Config::default_corpus")]
    pub corpus: PathBuf,

    /// Ordered pattern sources.
    #[serde(default = "defaults::patterns")]
    pub patterns: Vec<String>,

    #[serde(default)]
    pub mode: Mode,

    #[serde(default)]
    pub handshake: HandshakeConfig,

    /// Directory relative paths resolve against (the config file's parent).
    #[serde(skip)]
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            corpus: Self::default_corpus(),
            patterns: defaults::patterns(),
            mode: Mode::default(),
            handshake: HandshakeConfig::default(),
            root: PathBuf::new(),
        }
    }
}

impl Config {
    fn default_version() -> i64 {
        defaults::CONFIG_VERSION
    }

    fn default_corpus() -> PathBuf {
        PathBuf::from(defaults::CORPUS)
    }

    /// Corpus path resolved against the config root.
    pub fn corpus_path(&self) -> PathBuf {
        self.root.join(&self.corpus)
    }

    /// Marker directory resolved against the config root.
    pub fn marker_dir(&self) -> PathBuf {
        self.root.join(&self.handshake.dir)
    }

    /// Build the handshake driver described by this config.
    pub fn build_handshake(&self) -> Handshake {
        let hs = &self.handshake;
        let markers = Markers::in_dir(&self.marker_dir(), &hs.ready, &hs.start, &hs.done);
        Handshake::new(markers, hs.poll_interval(), hs.timeout())
    }
}

/// `[handshake]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct HandshakeConfig {
    #[serde(default = "HandshakeConfig::default_dir")]
    pub dir: PathBuf,

    #[serde(default = "HandshakeConfig::default_ready")]
    pub ready: String,

    #[serde(default = "HandshakeConfig::default_start")]
    pub start: String,

    #[serde(default = "HandshakeConfig::default_done")]
    pub done: String,

    #[serde(default = "HandshakeConfig::default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Seconds to wait for the start marker; 0 waits forever.
    #[serde(default = "HandshakeConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HandshakeConfig {
    fn default() -> Self {
        Self {
            dir: Self::default_dir(),
            ready: Self::default_ready(),
            start: Self::default_start(),
            done: Self::default_done(),
            poll_interval_ms: Self::default_poll_interval_ms(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

impl HandshakeConfig {
    fn default_dir() -> PathBuf {
        PathBuf::from(defaults::handshake::DIR)
    }

    fn default_ready() -> String {
        defaults::handshake::READY.to_string()
    }

    fn default_start() -> String {
        defaults::handshake::START.to_string()
    }

    fn default_done() -> String {
        defaults::handshake::DONE.to_string()
    }

    fn default_poll_interval_ms() -> u64 {
        defaults::handshake::POLL_INTERVAL_MS
    }

    fn default_timeout_secs() -> u64 {
        defaults::handshake::TIMEOUT_SECS
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// `None` means wait forever.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then_some(Duration::from_secs(self.timeout_secs))
    }
}

const KNOWN_KEYS: &[&str] = &["version", "corpus", "patterns", "mode", "handshake"];
const KNOWN_HANDSHAKE_KEYS: &[&str] =
    &["dir", "ready", "start", "done", "poll_interval_ms", "timeout_secs"];

/// Parse config content. `path` is used for error messages and as the root
/// for relative paths.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(content)
        .map_err(|e| ConfigError::Parse { path: path.to_path_buf(), source: Box::new(e) })?;

    if config.version != defaults::CONFIG_VERSION {
        return Err(ConfigError::Version {
            path: path.to_path_buf(),
            version: config.version,
            expected: defaults::CONFIG_VERSION,
        });
    }

    config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(config)
}

/// Keys in `content` that the config schema does not recognize.
pub fn unknown_keys(content: &str) -> Vec<String> {
    let Ok(table) = toml::from_str::<toml::Table>(content) else {
        return Vec::new();
    };

    let mut unknown = Vec::new();
    for (key, value) in &table {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            unknown.push(key.clone());
        } else if key == "handshake"
            && let toml::Value::Table(hs) = value
        {
            unknown.extend(
                hs.keys()
                    .filter(|k| !KNOWN_HANDSHAKE_KEYS.contains(&k.as_str()))
                    .map(|k| format!("handshake.{k}")),
            );
        }
    }
    unknown
}

/// Load a config file, warning about unrecognized keys.
pub fn load_with_warnings(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;

    for key in unknown_keys(&content) {
        tracing::warn!("unrecognized key `{}` in {}", key, path.display());
    }

    let config = parse(&content, path)?;
    tracing::debug!("loaded config {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
