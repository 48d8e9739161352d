// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report driver
//!
//! Runs a single report over a resolved window, or follows the sources on a
//! fixed interval with the window sliding forward each cycle.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use worklog::config::Config;
//! use worklog::report::ReportDriver;
//!
//! let config = Config::parse_from(["worklog", "updates", "1 week ago", "-f", "md"]);
//! let driver = ReportDriver::from_config(&config);
//! driver
//!     .run(&config.after, config.before.as_deref(), &mut std::io::stdout())
//!     .expect("report");
//! ```

use std::convert::Infallible;
use std::io::Write;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use worklog_builds::BuildFeed;
use worklog_git::GitHistory;

use crate::config::Config;
use crate::dates::{DateResolver, SystemDate};
use crate::error::WorklogError;
use crate::event::Event;
use crate::filter::{EventFilter, Kind, Window};
use crate::render::{Format, Renderer};

/// Pause between follow-mode cycles
pub const FOLLOW_INTERVAL: Duration = Duration::from_secs(10);

/// Source of the current instant and of the pause between polls
pub trait Clock {
    /// The current instant
    fn now(&self) -> DateTime<Utc>;

    /// Block for `duration`
    fn sleep(&self, duration: Duration);
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// What to report and how
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Kind of events to list
    pub kind: Kind,
    /// Output format
    pub format: Format,
    /// Sort by package, then date
    pub sort: bool,
    /// Keep polling instead of reporting once
    pub follow: bool,
    /// Pause between follow cycles
    pub interval: Duration,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            kind: Kind::default(),
            format: Format::default(),
            sort: false,
            follow: false,
            interval: FOLLOW_INTERVAL,
        }
    }
}

/// Orchestrates date resolution, selection, sorting and rendering
pub struct ReportDriver {
    filter: EventFilter,
    dates: Box<dyn DateResolver>,
    clock: Box<dyn Clock>,
    renderer: Renderer,
    options: ReportOptions,
}

impl ReportDriver {
    /// Assemble a driver from its collaborators
    #[must_use]
    pub fn new(
        filter: EventFilter,
        dates: Box<dyn DateResolver>,
        clock: Box<dyn Clock>,
        renderer: Renderer,
        options: ReportOptions,
    ) -> Self {
        Self {
            filter,
            dates,
            clock,
            renderer,
            options,
        }
    }

    /// Driver backed by the real feed, `git`, `date`, and wall clock
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let filter = EventFilter::new(
            Box::new(BuildFeed::new(config.feed_url.clone())),
            Box::new(GitHistory::new(config.repo_path())),
        );
        let options = ReportOptions {
            kind: config.command,
            format: config.format,
            sort: config.sort,
            follow: config.follow,
            interval: FOLLOW_INTERVAL,
        };
        Self::new(
            filter,
            Box::new(SystemDate::default()),
            Box::new(SystemClock),
            Renderer::new(config.commit_url.clone()),
            options,
        )
    }

    /// Resolve `after` and `before` into a window; a missing `before` means now
    ///
    /// # Errors
    ///
    /// Returns `WorklogError::InvalidDate` if either expression fails to
    /// resolve.
    pub fn resolve_window(
        &self,
        after: &str,
        before: Option<&str>,
    ) -> Result<Window, WorklogError> {
        let start = self.dates.resolve(after)?;
        let end = match before {
            Some(expression) => self.dates.resolve(expression)?,
            None => self.clock.now(),
        };
        Ok(Window::new(start, end))
    }

    /// Run the configured report: once, or forever in follow mode
    ///
    /// # Errors
    ///
    /// Returns the first failure; follow mode only ever returns an error.
    pub fn run<W: Write>(
        &self,
        after: &str,
        before: Option<&str>,
        out: &mut W,
    ) -> Result<(), WorklogError> {
        let window = self.resolve_window(after, before)?;
        if self.options.follow {
            let never = self.follow(window.start, out)?;
            match never {}
        }
        self.report(window, out).map(|_| ())
    }

    /// Events for `window`, sorted if requested
    ///
    /// # Errors
    ///
    /// Propagates selection failures.
    pub fn items(&self, window: Window) -> Result<Vec<Event>, WorklogError> {
        let mut items = self
            .filter
            .select(self.options.kind, window, || self.clock.now())?;
        if self.options.sort {
            let now = self.clock.now();
            items.sort_by(|a, b| {
                a.package()
                    .cmp(b.package())
                    .then_with(|| a.date_at(now).cmp(&b.date_at(now)))
            });
        }
        Ok(items)
    }

    /// Print one report over `window`: the count line, then the items
    ///
    /// Returns the number of items printed.
    ///
    /// # Errors
    ///
    /// Propagates selection and write failures.
    pub fn report<W: Write>(&self, window: Window, out: &mut W) -> Result<usize, WorklogError> {
        info!(
            kind = %self.options.kind,
            start = %window.start,
            end = %window.end,
            "Generating report"
        );
        let items = self.items(window)?;
        let lines = self
            .renderer
            .render_report(self.options.kind, &items, self.options.format);
        for line in lines {
            writeln!(out, "{line}")?;
        }
        Ok(items.len())
    }

    /// One follow cycle: print items in `[start, now]` and return `now` as
    /// the next cycle's start
    ///
    /// Both bounds are inclusive, so an event dated exactly at a cycle
    /// boundary is listed by both cycles that share it. With `sort` set each
    /// cycle's batch is ordered like a one-shot report.
    ///
    /// # Errors
    ///
    /// Propagates selection and write failures.
    pub fn follow_cycle<W: Write>(
        &self,
        start: DateTime<Utc>,
        out: &mut W,
    ) -> Result<DateTime<Utc>, WorklogError> {
        let end = self.clock.now();
        let window = Window::new(start, end);
        let items = self.items(window)?;
        debug!(start = %start, end = %end, count = items.len(), "Follow cycle");
        for line in self.renderer.render(&items, self.options.format) {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(end)
    }

    /// Poll forever, sleeping for the configured interval between cycles
    ///
    /// # Errors
    ///
    /// Returns the first failure of any cycle; there is no retry.
    pub fn follow<W: Write>(
        &self,
        start: DateTime<Utc>,
        out: &mut W,
    ) -> Result<Infallible, WorklogError> {
        info!(kind = %self.options.kind, start = %start, "Following");
        let mut start = start;
        loop {
            start = self.follow_cycle(start, out)?;
            self.clock.sleep(self.options.interval);
        }
    }
}
