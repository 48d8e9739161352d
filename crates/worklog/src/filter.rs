// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Event selection over a time window
//!
//! Pulls builds or commits from their sources and keeps those whose
//! effective date lies inside an inclusive window.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use tracing::debug;
use worklog_builds::BuildSource;
use worklog_git::CommitSource;

use crate::error::WorklogError;
use crate::event::Event;

/// What a report lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Every build in the window
    #[default]
    Builds,
    /// The latest build of each package, if it falls in the window
    Updates,
    /// Non-merge commits in the window
    Commits,
}

impl Kind {
    /// Command word for this kind
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Builds => "builds",
            Self::Updates => "updates",
            Self::Commits => "commits",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = WorklogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "builds" => Ok(Self::Builds),
            "updates" => Ok(Self::Updates),
            "commits" => Ok(Self::Commits),
            other => Err(WorklogError::UnsupportedKind(other.to_string())),
        }
    }
}

/// Inclusive time range `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Lower bound, inclusive
    pub start: DateTime<Utc>,
    /// Upper bound, inclusive
    pub end: DateTime<Utc>,
}

impl Window {
    /// Create a window from its bounds
    #[must_use]
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Check whether `date` lies in the window, bounds included
    #[must_use]
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Selects events of one kind from the build feed or the commit history
pub struct EventFilter {
    builds: Box<dyn BuildSource>,
    commits: Box<dyn CommitSource>,
}

impl EventFilter {
    /// Create a filter over the given sources
    #[must_use]
    pub fn new(builds: Box<dyn BuildSource>, commits: Box<dyn CommitSource>) -> Self {
        Self { builds, commits }
    }

    /// Events of `kind` whose effective date lies in `window`
    ///
    /// `now` is called after fetching and stands in for the date of builds
    /// that have not finished.
    ///
    /// # Errors
    ///
    /// Propagates any feed or history failure unchanged.
    pub fn select(
        &self,
        kind: Kind,
        window: Window,
        now: impl Fn() -> DateTime<Utc>,
    ) -> Result<Vec<Event>, WorklogError> {
        let events: Vec<Event> = match kind {
            Kind::Builds => self.builds.fetch_all()?.into_iter().map(Event::from).collect(),
            Kind::Updates => self
                .builds
                .latest_per_package()?
                .into_iter()
                .map(Event::from)
                .collect(),
            Kind::Commits => self
                .commits
                .fetch_commits(window.start, window.end)?
                .into_iter()
                .map(Event::from)
                .collect(),
        };

        let fetched = events.len();
        let now = now();
        let selected: Vec<Event> = events
            .into_iter()
            .filter(|event| window.contains(event.date_at(now)))
            .collect();

        debug!(%kind, fetched, selected = selected.len(), "Selected events");
        Ok(selected)
    }
}
