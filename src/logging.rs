//! Tracing setup for Pawbook.
//!
//! Stdout carries the conversation, so logs go to an appending file unless
//! `--log-stderr` asks for stderr. A log file that cannot be opened falls
//! back to stderr.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

impl LogTarget {
    /// The default file target, see [`default_log_path`].
    pub fn default_file() -> Self {
        Self::File(default_log_path())
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber for `target`.
pub fn init(target: LogTarget) {
    match target {
        LogTarget::Stderr => init_stderr(),
        LogTarget::File(path) => match open_log_file(&path) {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter())
                    .with_writer(file)
                    .with_ansi(false)
                    .init();
            }
            Err(e) => {
                init_stderr();
                warn!("Could not open log file {}: {e}", path.display());
            }
        },
    }
}

fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .init();
}

/// Opens `path` for appending, creating it and its directory if needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// `pawbook/pawbook.log` under the XDG state directory, then the config
/// directory, then the temp directory.
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("pawbook").join("pawbook.log"))
        .unwrap_or_else(|| std::env::temp_dir().join("pawbook.log"))
}
