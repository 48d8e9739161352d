// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for worklog-git

use thiserror::Error;

/// Errors that can occur while reading commit history
#[derive(Debug, Error)]
pub enum HistoryError {
    /// `git` could not be started
    #[error("Failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    /// `git` ran but reported failure
    #[error("git log exited with {status}")]
    GitFailed {
        /// Exit status as reported by the OS
        status: String,
    },

    /// `git` printed something that is not UTF-8
    #[error("git log output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// A history line did not have the expected shape
    #[error("Malformed history line {line:?}: {reason}")]
    Parse {
        /// The offending line
        line: String,
        /// What was wrong with it
        reason: String,
    },

    /// The commit date was not ISO-8601
    #[error("Invalid commit timestamp {timestamp:?}: {source}")]
    InvalidTimestamp {
        /// The raw timestamp field
        timestamp: String,
        /// Underlying parse failure
        source: chrono::ParseError,
    },
}
