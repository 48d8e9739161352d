// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! worklog-git: Git history processing for worklog
//!
//! This library crate runs the `git log` history query and parses its
//! record-separated output into [`CommitEvent`] values.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use chrono::{Duration, Utc};
//! use worklog_git::{CommitSource, GitHistory};
//!
//! let history = GitHistory::new(".");
//! let end = Utc::now();
//! let commits = history.fetch_commits(end - Duration::days(7), end)
//!     .expect("read history");
//!
//! for c in commits {
//!     println!("{} {}: {}", c.sha, c.package(), c.change());
//! }
//! ```

pub mod commit;
pub mod error;
pub mod history;

pub use commit::{CommitEvent, RECORD_SEPARATOR, UNKNOWN_PACKAGE};
pub use error::HistoryError;
pub use history::{CommitSource, GitHistory, PackageCommits, group_by_package, parse_log_output};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::CommitEvent;
    pub use crate::error::HistoryError;
    pub use crate::history::{CommitSource, GitHistory, PackageCommits};
}
