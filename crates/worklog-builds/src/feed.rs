// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Build feed client
//!
//! Every call performs a fresh blocking request; nothing is cached between
//! calls.

use std::collections::HashMap;

use reqwest::blocking::Client;
use tracing::debug;

use crate::build::BuildEvent;
use crate::error::FeedError;

/// Build feed of the Solus package repository
pub const DEFAULT_FEED_URL: &str = "https://build.getsol.us/builds.json";

/// A source of build records
pub trait BuildSource {
    /// Fetch every build currently listed, in feed order
    ///
    /// # Errors
    ///
    /// Returns `FeedError::Unavailable` on transport failure and
    /// `FeedError::Parse` on a malformed body.
    fn fetch_all(&self) -> Result<Vec<BuildEvent>, FeedError>;

    /// Fetch the builds and keep the last one listed for each package
    ///
    /// # Errors
    ///
    /// Same as [`BuildSource::fetch_all`].
    fn latest_per_package(&self) -> Result<Vec<BuildEvent>, FeedError> {
        Ok(latest_per_package(self.fetch_all()?))
    }
}

/// HTTP client for the remote build feed
#[derive(Debug, Clone)]
pub struct BuildFeed {
    url: String,
    client: Client,
}

impl BuildFeed {
    /// Create a client for the feed at `url`
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: Client::new(),
        }
    }

    /// The feed URL
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for BuildFeed {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_URL)
    }
}

impl BuildSource for BuildFeed {
    fn fetch_all(&self) -> Result<Vec<BuildEvent>, FeedError> {
        debug!(url = %self.url, "Fetching build feed");
        let body = self
            .client
            .get(&self.url)
            .send()?
            .error_for_status()?
            .text()?;
        let builds = parse_feed(&body)?;
        debug!(count = builds.len(), "Parsed build feed");
        Ok(builds)
    }
}

/// Parse a feed body: a JSON array of build objects
///
/// # Errors
///
/// Returns `FeedError::Parse` if the body is not valid JSON or any object
/// does not match the build schema.
pub fn parse_feed(body: &str) -> Result<Vec<BuildEvent>, FeedError> {
    Ok(serde_json::from_str(body)?)
}

/// Fold builds into one entry per package
///
/// A later build in the input replaces an earlier one for the same package,
/// so feed order decides which build is the latest. Packages stay in the
/// order they were first seen.
#[must_use]
pub fn latest_per_package(builds: Vec<BuildEvent>) -> Vec<BuildEvent> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut latest: Vec<BuildEvent> = Vec::new();

    for build in builds {
        match slots.get(build.package()) {
            Some(&slot) => latest[slot] = build,
            None => {
                slots.insert(build.pkg.clone(), latest.len());
                latest.push(build);
            }
        }
    }

    latest
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::build::BuildStatus;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn builds_strategy() -> impl Strategy<Value = Vec<BuildEvent>> {
        proptest::collection::vec("[a-e]", 0..40).prop_map(|pkgs| {
            pkgs.into_iter()
                .enumerate()
                .map(|(i, pkg)| BuildEvent {
                    id: i as u64,
                    pkg,
                    version: "1".to_string(),
                    release: "1".to_string(),
                    git_ref: String::new(),
                    tag: String::new(),
                    tag_url: String::new(),
                    log_url: String::new(),
                    status: BuildStatus::Succeeded,
                    builder: String::new(),
                    finished: None,
                })
                .collect()
        })
    }

    proptest! {
        /// Property: at most one build per package survives the fold
        #[test]
        fn prop_latest_unique_per_package(builds in builds_strategy()) {
            let latest = latest_per_package(builds.clone());
            let names: HashSet<&str> = latest.iter().map(BuildEvent::package).collect();
            prop_assert_eq!(names.len(), latest.len());

            let distinct: HashSet<&str> = builds.iter().map(BuildEvent::package).collect();
            prop_assert_eq!(distinct.len(), latest.len());
        }

        /// Property: the surviving build is the last one listed for its package
        #[test]
        fn prop_latest_is_last_in_feed(builds in builds_strategy()) {
            let latest = latest_per_package(builds.clone());
            for kept in &latest {
                let last = builds.iter().rev().find(|b| b.pkg == kept.pkg);
                prop_assert_eq!(last.map(|b| b.id), Some(kept.id));
            }
        }
    }
}
