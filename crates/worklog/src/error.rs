// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Top-level error type for worklog

use thiserror::Error;

use crate::dates::DateError;

/// Errors that end a worklog run
#[derive(Debug, Error)]
pub enum WorklogError {
    /// A date expression could not be resolved
    #[error("Invalid date: {0}")]
    InvalidDate(#[from] DateError),

    /// The build feed could not be fetched or parsed
    #[error(transparent)]
    Feed(#[from] worklog_builds::FeedError),

    /// The commit history could not be read or parsed
    #[error("Commit history error: {0}")]
    History(#[from] worklog_git::HistoryError),

    /// The requested report kind is not one of builds, updates, commits
    #[error("Unsupported log kind: {0}")]
    UnsupportedKind(String),

    /// The requested output format is not one of md, tty
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Writing the report failed
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
