//! Build record types

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Outcome of a build attempt as reported by the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BuildStatus {
    /// The build finished and produced packages
    Succeeded,
    /// The build finished without producing packages
    Failed,
    /// The build is still running
    Building,
    /// Any status the feed reports that is not listed above, kept verbatim
    Other(String),
}

impl BuildStatus {
    /// Canonical name used when writing the status back out
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Building => "building",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for BuildStatus {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "ok" | "success" | "succeeded" => Self::Succeeded,
            "failed" | "failure" => Self::Failed,
            "building" | "running" => Self::Building,
            _ => Self::Other(raw),
        }
    }
}

impl From<BuildStatus> for String {
    fn from(status: BuildStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One build attempt from the feed
///
/// Field names mirror the feed's JSON keys exactly; an unknown key or a
/// missing required key is a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildEvent {
    /// Numeric build id
    pub id: u64,
    /// Package name
    pub pkg: String,
    /// Upstream version
    pub version: String,
    /// Distribution release number
    pub release: String,
    /// Source-control ref the build was made from
    #[serde(rename = "ref")]
    pub git_ref: String,
    /// Tag name
    pub tag: String,
    /// Link to the tag
    pub tag_url: String,
    /// Link to the build log
    pub log_url: String,
    /// Build outcome
    pub status: BuildStatus,
    /// Builder that ran the job
    pub builder: String,
    /// Completion time, absent while the build is still running
    #[serde(default, deserialize_with = "deserialize_finished")]
    pub finished: Option<DateTime<Utc>>,
}

impl BuildEvent {
    /// Package name the build belongs to
    #[must_use]
    pub fn package(&self) -> &str {
        &self.pkg
    }

    /// `version-release` as shown in reports
    #[must_use]
    pub fn full_version(&self) -> String {
        format!("{}-{}", self.version, self.release)
    }

    /// Effective date of the build: its completion time, or `now` if it has
    /// not finished yet
    #[must_use]
    pub fn date_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.finished.unwrap_or(now)
    }

    /// Check whether the build has a completion time
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }
}

/// Parse an ISO-8601 timestamp from the feed into UTC
///
/// Accepts RFC 3339, the space-separated form, and naive timestamps,
/// which are taken to be UTC already.
///
/// # Errors
///
/// Returns the parse error of the last format attempted.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|naive| naive.and_utc())
}

fn deserialize_finished<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    raw.map(|s| parse_timestamp(&s).map_err(serde::de::Error::custom))
        .transpose()
}
