// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for worklog-builds

use thiserror::Error;

/// Errors that can occur while fetching or parsing the build feed
#[derive(Debug, Error)]
pub enum FeedError {
    /// The feed could not be reached or returned an error status
    #[error("Build feed unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),

    /// The feed body was not a JSON array of build objects
    #[error("Build feed parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
