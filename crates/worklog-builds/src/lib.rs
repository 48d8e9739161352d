// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! worklog-builds: Build feed processing for worklog
//!
//! This library crate fetches the remote build-status feed and parses it
//! into [`BuildEvent`] records for consumption by the worklog reporter.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use worklog_builds::{BuildFeed, BuildSource};
//!
//! let feed = BuildFeed::new(worklog_builds::DEFAULT_FEED_URL);
//! for build in feed.latest_per_package().expect("fetch feed") {
//!     println!("{} {}", build.pkg, build.full_version());
//! }
//! ```

pub mod build;
pub mod error;
pub mod feed;

pub use build::{BuildEvent, BuildStatus};
pub use error::FeedError;
pub use feed::{BuildFeed, BuildSource, DEFAULT_FEED_URL, latest_per_package, parse_feed};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::build::{BuildEvent, BuildStatus};
    pub use crate::error::FeedError;
    pub use crate::feed::{BuildFeed, BuildSource};
}
