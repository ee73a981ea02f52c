//! Per-client logging configuration.
//!
//! The crate emits `tracing` events and never installs a global subscriber.
//! A client either logs to whatever subscriber is current where it is
//! awaited, or to a [`Dispatch`] it owns, built from a [`LogConfig`] or
//! handed in by the caller.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{Dispatch, Level};
use tracing_subscriber::fmt::writer::MakeWriterExt;

use crate::error::{Error, Result};

/// Verbosity and optional file sink for a client's log output.
///
/// Debug mode lowers the level from INFO to DEBUG, which makes every
/// request and retry visible. Output always goes to stderr; a file, when
/// set, receives the same records without ANSI colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    debug: bool,
    file: Option<PathBuf>,
}

impl LogConfig {
    /// INFO level to stderr.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle DEBUG level output.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Also append records to `path`.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Whether debug output is on.
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// The log file, if any.
    pub fn log_file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    fn level(&self) -> Level {
        if self.debug { Level::DEBUG } else { Level::INFO }
    }

    /// Build a dispatch for this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Logging`] if the log file cannot be opened.
    pub fn build_dispatch(&self) -> Result<Dispatch> {
        let builder = tracing_subscriber::fmt()
            .with_max_level(self.level())
            .with_target(true);

        let dispatch = match &self.file {
            Some(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| Error::Logging(format!("{}: {e}", path.display())))?;
                let subscriber = builder
                    .with_ansi(false)
                    .with_writer(std::io::stderr.and(Mutex::new(file)))
                    .finish();
                Dispatch::new(subscriber)
            }
            None => Dispatch::new(builder.with_writer(std::io::stderr).finish()),
        };

        Ok(dispatch)
    }
}
