//! Command-line argument parsing for Pawbook.

use crate::config::{Config, StorageConfig};
use crate::logging::LogTarget;
use clap::Parser;
use std::path::PathBuf;

/// A console personal assistant with a contact book and a note book.
#[derive(Parser, Debug)]
#[command(name = "pawbook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Contact book file (overrides config and PAWBOOK_CONTACTS)
    #[arg(long, value_name = "PATH")]
    pub contacts: Option<PathBuf>,

    /// Note book file (overrides config and PAWBOOK_NOTES)
    #[arg(long, value_name = "PATH")]
    pub notes: Option<PathBuf>,

    /// Write logs to stderr instead of the log file
    #[arg(long, conflicts_with = "log_file")]
    pub log_stderr: bool,

    /// Log file path (appended to)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Where logs go: stderr with --log-stderr, otherwise --log-file or the
    /// default log file.
    pub fn log_target(&self) -> LogTarget {
        match (&self.log_file, self.log_stderr) {
            (_, true) => LogTarget::Stderr,
            (Some(path), false) => LogTarget::File(path.clone()),
            (None, false) => LogTarget::default_file(),
        }
    }

    /// Resolves store locations with precedence:
    /// 1. CLI arguments (highest)
    /// 2. Environment variables
    /// 3. Config file
    /// 4. Defaults
    pub fn storage_config(&self, config: &Config) -> StorageConfig {
        self.storage_config_with(config, |key| std::env::var(key).ok())
    }

    /// [`Cli::storage_config`] with environment lookups going through `env`.
    pub fn storage_config_with(
        &self,
        config: &Config,
        env: impl Fn(&str) -> Option<String>,
    ) -> StorageConfig {
        let mut storage = config.storage.clone();
        storage.apply_overrides_from(env);
        if let Some(path) = &self.contacts {
            storage.contacts = path.clone();
        }
        if let Some(path) = &self.notes {
            storage.notes = path.clone();
        }
        storage
    }
}
