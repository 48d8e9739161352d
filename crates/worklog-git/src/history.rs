// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Git history query
//!
//! This module runs `git log` over a date window and parses the
//! record-separated lines it prints.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commit::CommitEvent;
use crate::error::HistoryError;

/// `--pretty` format producing `sha RS date RS subject RS author`
///
/// The date is the committer date, the same clock `--after` and `--before`
/// bound on, so a rebased commit is dated when it landed.
const LOG_FORMAT: &str = "--pretty=format:%h%x1e%cd%x1e%s%x1e%an";

/// Commits for one package, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageCommits {
    /// Package name derived from the commit subjects
    pub package: String,
    /// The package's commits in history order
    pub commits: Vec<CommitEvent>,
}

/// A source of commit records
pub trait CommitSource {
    /// Non-merge commits bounded by `start` and `end`, oldest first
    ///
    /// # Errors
    ///
    /// Returns `HistoryError` if the history cannot be read or a line is
    /// malformed.
    fn fetch_commits(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CommitEvent>, HistoryError>;

    /// Commits in `[start, end]` grouped by package
    ///
    /// # Errors
    ///
    /// Same as [`CommitSource::fetch_commits`].
    fn commits_by_package(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PackageCommits>, HistoryError> {
        Ok(group_by_package(self.fetch_commits(start, end)?))
    }
}

/// Reads history from a local git working tree
#[derive(Debug, Clone)]
pub struct GitHistory {
    repo: PathBuf,
}

impl GitHistory {
    /// Read history of the repository containing `repo`
    #[must_use]
    pub fn new(repo: impl AsRef<Path>) -> Self {
        Self {
            repo: repo.as_ref().to_path_buf(),
        }
    }

    /// Arguments passed to `git` for the window `[start, end]`
    #[must_use]
    pub fn log_args(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<String> {
        vec![
            "log".to_string(),
            "--date=iso-strict".to_string(),
            "--no-merges".to_string(),
            "--reverse".to_string(),
            LOG_FORMAT.to_string(),
            format!("--after={}", start.to_rfc3339_opts(SecondsFormat::Secs, false)),
            format!("--before={}", end.to_rfc3339_opts(SecondsFormat::Secs, false)),
        ]
    }
}

impl CommitSource for GitHistory {
    fn fetch_commits(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CommitEvent>, HistoryError> {
        let args = Self::log_args(start, end);
        debug!(repo = %self.repo.display(), args = ?args, "Running git log");

        let output = Command::new("git")
            .current_dir(&self.repo)
            .args(&args)
            .stderr(Stdio::inherit())
            .output()?;

        if !output.status.success() {
            return Err(HistoryError::GitFailed {
                status: output.status.to_string(),
            });
        }

        let commits = parse_log_output(&String::from_utf8(output.stdout)?)?;
        debug!(count = commits.len(), "Parsed git history");
        Ok(commits)
    }
}

/// Parse the full output of the history query
///
/// Blank lines are skipped, so empty output yields no commits.
///
/// # Errors
///
/// Returns the first line that fails [`CommitEvent::from_line`].
pub fn parse_log_output(output: &str) -> Result<Vec<CommitEvent>, HistoryError> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(CommitEvent::from_line)
        .collect()
}

/// Group commits by package, keeping packages in first-seen order and each
/// group in input order
#[must_use]
pub fn group_by_package(commits: Vec<CommitEvent>) -> Vec<PackageCommits> {
    let mut groups: Vec<PackageCommits> = Vec::new();

    for commit in commits {
        match groups.iter_mut().find(|g| g.package == commit.package()) {
            Some(group) => group.commits.push(commit),
            None => groups.push(PackageCommits {
                package: commit.package().to_string(),
                commits: vec![commit],
            }),
        }
    }

    groups
}
