// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Marker-file handshake with an external coordinator.
//!
//! The harness writes a ready marker once the corpus is loaded, waits for
//! the coordinator to create a start marker, and writes a done marker when
//! matching has finished. Presence of the start marker is the only signal;
//! its content is passed through but never interpreted.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

/// Content written to the ready marker.
pub const READY_CONTENT: &str = "ready\n";

/// Content written to the done marker.
pub const DONE_CONTENT: &str = "done\n";

/// Errors raised while signalling or waiting.
#[derive(Debug, Error)]
pub enum HandshakeError {
    #[error("timed out after {waited:?} waiting for {}", path.display())]
    Timeout { path: PathBuf, waited: Duration },

    #[error("failed to access marker {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl HandshakeError {
    fn io(path: &Path, source: io::Error) -> Self {
        HandshakeError::Io { path: path.to_path_buf(), source }
    }
}

/// A start signal that was observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    /// Whatever the coordinator wrote into the marker (lossy UTF-8).
    pub content: String,
    /// Time spent waiting before the marker became readable.
    pub waited: Duration,
}

/// Locations of the three marker files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub ready: PathBuf,
    pub start: PathBuf,
    pub done: PathBuf,
}

impl Markers {
    /// Markers named `ready`, `start`, and `done` inside `dir`.
    pub fn in_dir(dir: &Path, ready: &str, start: &str, done: &str) -> Self {
        Self { ready: dir.join(ready), start: dir.join(start), done: dir.join(done) }
    }
}

/// Handshake driver for one harness run.
#[derive(Debug, Clone)]
pub struct Handshake {
    markers: Markers,
    poll_interval: Duration,
    timeout: Option<Duration>,
}

impl Handshake {
    /// `timeout = None` waits for the start marker forever.
    pub fn new(markers: Markers, poll_interval: Duration, timeout: Option<Duration>) -> Self {
        Self { markers, poll_interval, timeout }
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Announce that the corpus is loaded.
    ///
    /// A done marker left over from an earlier run is removed first so the
    /// coordinator never mistakes it for this run's completion.
    pub fn signal_ready(&self) -> Result<(), HandshakeError> {
        remove_stale(&self.markers.done)?;
        write_marker(&self.markers.ready, READY_CONTENT)?;
        tracing::debug!("wrote ready marker {}", self.markers.ready.display());
        Ok(())
    }

    /// Block until the coordinator creates the start marker.
    pub fn await_start(&self) -> Result<Signal, HandshakeError> {
        tracing::debug!(
            "waiting for start marker {} (timeout: {:?})",
            self.markers.start.display(),
            self.timeout
        );
        await_signal(&self.markers.start, self.poll_interval, self.timeout)
    }

    /// Announce that matching has completed.
    pub fn signal_done(&self) -> Result<(), HandshakeError> {
        write_marker(&self.markers.done, DONE_CONTENT)?;
        tracing::debug!("wrote done marker {}", self.markers.done.display());
        Ok(())
    }
}

/// Write `content` to `path`, creating parent directories if needed.
pub fn write_marker(path: &Path, content: &str) -> Result<(), HandshakeError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| HandshakeError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| HandshakeError::io(path, e))
}

/// Poll until `path` is readable.
///
/// A missing file means "not yet" and keeps polling; any other read error
/// fails immediately. With `timeout = None` this never gives up.
pub fn await_signal(
    path: &Path,
    poll_interval: Duration,
    timeout: Option<Duration>,
) -> Result<Signal, HandshakeError> {
    let started = Instant::now();

    loop {
        match fs::read(path) {
            Ok(bytes) => {
                let waited = started.elapsed();
                tracing::debug!("observed {} after {:?}", path.display(), waited);
                return Ok(Signal { content: String::from_utf8_lossy(&bytes).into_owned(), waited });
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(HandshakeError::io(path, e)),
        }

        let waited = started.elapsed();
        let nap = match timeout {
            Some(limit) if waited >= limit => {
                return Err(HandshakeError::Timeout { path: path.to_path_buf(), waited });
            }
            Some(limit) => poll_interval.min(limit - waited),
            None => poll_interval,
        };
        thread::sleep(nap);
    }
}

fn remove_stale(path: &Path) -> Result<(), HandshakeError> {
    match fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!("removed stale marker {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(HandshakeError::io(path, e)),
    }
}

#[cfg(test)]
#[path = "handshake_tests.rs"]
mod tests;
