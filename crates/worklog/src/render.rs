// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report rendering
//!
//! Turns events into terminal lines or changelog markdown. Rendering is a
//! pure transform; printing is left to the caller.

use std::fmt;
use std::str::FromStr;

use crate::error::WorklogError;
use crate::event::Event;
use crate::filter::Kind;

/// Default base for commit links
pub const DEFAULT_COMMIT_URL: &str = "https://github.com/getsolus/packages/commit";

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Colorized lines with hyperlinks
    #[default]
    Terminal,
    /// `- [text](link)` list items
    Markdown,
}

impl Format {
    /// Short name used on the command line
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Terminal => "tty",
            Self::Markdown => "md",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = WorklogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tty" | "terminal" => Ok(Self::Terminal),
            "md" | "markdown" => Ok(Self::Markdown),
            other => Err(WorklogError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Renders events in either output format
#[derive(Debug, Clone)]
pub struct Renderer {
    commit_url: String,
}

impl Renderer {
    /// Create a renderer linking commits under `commit_url`
    #[must_use]
    pub fn new(commit_url: impl Into<String>) -> Self {
        Self {
            commit_url: commit_url.into(),
        }
    }

    /// One line per event
    #[must_use]
    pub fn render(&self, items: &[Event], format: Format) -> Vec<String> {
        items
            .iter()
            .map(|item| match format {
                Format::Terminal => item.to_tty(&self.commit_url),
                Format::Markdown => format!("- {}", item.to_markdown(&self.commit_url)),
            })
            .collect()
    }

    /// Count line followed by one line per event
    #[must_use]
    pub fn render_report(&self, kind: Kind, items: &[Event], format: Format) -> Vec<String> {
        let mut lines = Vec::with_capacity(items.len() + 1);
        lines.push(count_line(kind, items.len()));
        lines.extend(self.render(items, format));
        lines
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_COMMIT_URL)
    }
}

/// `"<n> <kind>:"`
#[must_use]
pub fn count_line(kind: Kind, count: usize) -> String {
    format!("{count} {kind}:")
}
