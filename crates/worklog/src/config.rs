//! Configuration for the worklog command
//!
//! This module provides the command-line surface of worklog, including the
//! report kind, the time window, output options, and source locations.

use std::path::PathBuf;

use clap::Parser;
use worklog_builds::DEFAULT_FEED_URL;

use crate::filter::Kind;
use crate::render::{DEFAULT_COMMIT_URL, Format};

/// Worklog - report package builds and commits within a time window
#[derive(Parser, Debug, Clone)]
#[command(name = "worklog")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// What to list: builds, updates, or commits
    pub command: Kind,

    /// Show entries after this date
    ///
    /// Accepts anything `date --date` understands, e.g. "2 days ago".
    pub after: String,

    /// Show entries before this date. Defaults to now.
    pub before: Option<String>,

    /// Output format: md or tty
    #[arg(short, long, default_value = "tty")]
    pub format: Format,

    /// Sort entries by package, then date
    #[arg(short, long, default_value = "false")]
    pub sort: bool,

    /// Wait for and output new entries as they are created
    #[arg(short = 'F', long, default_value = "false")]
    pub follow: bool,

    /// URL of the build feed
    #[arg(long, env = "WORKLOG_FEED_URL", default_value = DEFAULT_FEED_URL)]
    pub feed_url: String,

    /// Repository whose history is reported
    ///
    /// Defaults to the current working directory.
    #[arg(short = 'C', long, env = "WORKLOG_REPO")]
    pub repo: Option<PathBuf>,

    /// Base URL for commit links
    #[arg(long, env = "WORKLOG_COMMIT_URL", default_value = DEFAULT_COMMIT_URL)]
    pub commit_url: String,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so report output stays clean.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command: Kind::default(),
            after: String::new(),
            before: None,
            format: Format::default(),
            sort: false,
            follow: false,
            feed_url: DEFAULT_FEED_URL.to_string(),
            repo: None,
            commit_url: DEFAULT_COMMIT_URL.to_string(),
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Get the repository path, using current directory as default
    #[must_use]
    pub fn repo_path(&self) -> PathBuf {
        self.repo
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the repository path is specified but doesn't
    /// exist or isn't a directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref repo) = self.repo {
            if !repo.exists() {
                return Err(ConfigError::RepositoryNotFound(repo.clone()));
            }
            if !repo.is_dir() {
                return Err(ConfigError::RepositoryNotDirectory(repo.clone()));
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Repository path not found
    #[error("Repository path not found: {0}")]
    RepositoryNotFound(PathBuf),

    /// Repository path is not a directory
    #[error("Repository path is not a directory: {0}")]
    RepositoryNotDirectory(PathBuf),
}
