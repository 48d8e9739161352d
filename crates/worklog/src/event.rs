// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Reportable events
//!
//! Builds and commits share one small interface: a package name, an
//! effective date, and a markdown and terminal rendering.

use chrono::{DateTime, Utc};
use worklog_builds::BuildEvent;
use worklog_git::CommitEvent;

use crate::tty::{self, BLUE, GREEN, LINK_MARKER, RESET, YELLOW};

/// A single line item in a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A build from the feed
    Build(BuildEvent),
    /// A commit from the history query
    Commit(CommitEvent),
}

impl Event {
    /// Package the event belongs to
    #[must_use]
    pub fn package(&self) -> &str {
        match self {
            Self::Build(build) => build.package(),
            Self::Commit(commit) => commit.package(),
        }
    }

    /// Effective UTC date; unfinished builds take `now`
    #[must_use]
    pub fn date_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::Build(build) => build.date_at(now),
            Self::Commit(commit) => commit.date,
        }
    }

    /// Markdown link; commit links are built under `commit_url`
    #[must_use]
    pub fn to_markdown(&self, commit_url: &str) -> String {
        match self {
            Self::Build(build) => format!(
                "[{} {}]({})",
                build.pkg,
                build.full_version(),
                build.tag_url
            ),
            Self::Commit(commit) => format!("[{}]({})", commit.subject, commit.url(commit_url)),
        }
    }

    /// Colorized, hyperlinked terminal line
    #[must_use]
    pub fn to_tty(&self, commit_url: &str) -> String {
        match self {
            Self::Build(build) => format!(
                "{GREEN}{}{RESET} {} {BLUE}[{}]{RESET} {}",
                build.pkg,
                build.full_version(),
                build.builder,
                tty::hyperlink(LINK_MARKER, &build.tag_url)
            ),
            Self::Commit(commit) => {
                let url = commit.url(commit_url);
                format!(
                    "{YELLOW}{}{RESET} {} {GREEN}{}: {RESET}{} {BLUE}[{}]{RESET} {}",
                    tty::hyperlink(&commit.sha, &url),
                    commit.date.format("%Y-%m-%d %H:%M:%S%:z"),
                    commit.package(),
                    commit.change(),
                    commit.author,
                    tty::hyperlink(LINK_MARKER, &url)
                )
            }
        }
    }
}

impl From<BuildEvent> for Event {
    fn from(build: BuildEvent) -> Self {
        Self::Build(build)
    }
}

impl From<CommitEvent> for Event {
    fn from(commit: CommitEvent) -> Self {
        Self::Commit(commit)
    }
}
