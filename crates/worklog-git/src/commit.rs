//! Commit record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::HistoryError;

/// Field separator in history query output (ASCII record separator)
pub const RECORD_SEPARATOR: char = '\x1e';

/// Package name reported for subjects without a `package:` prefix
pub const UNKNOWN_PACKAGE: &str = "<unknown>";

/// Represents one non-merge commit from the history query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitEvent {
    /// Abbreviated commit SHA
    pub sha: String,
    /// Author date exactly as git printed it
    pub timestamp: String,
    /// Author date normalized to UTC
    pub date: DateTime<Utc>,
    /// Subject line of the commit message
    pub subject: String,
    /// Author name
    pub author: String,
}

impl CommitEvent {
    /// Parse one line of `sha RS date RS subject RS author`
    ///
    /// # Errors
    ///
    /// Returns `HistoryError::Parse` if the line does not split into exactly
    /// four fields, and `HistoryError::InvalidTimestamp` if the date is not
    /// ISO-8601.
    pub fn from_line(line: &str) -> Result<Self, HistoryError> {
        let fields: Vec<&str> = line.split(RECORD_SEPARATOR).collect();
        let [sha, timestamp, subject, author] = fields[..] else {
            return Err(HistoryError::Parse {
                line: line.to_string(),
                reason: format!("expected 4 fields, found {}", fields.len()),
            });
        };

        let date = DateTime::parse_from_rfc3339(timestamp)
            .map_err(|source| HistoryError::InvalidTimestamp {
                timestamp: timestamp.to_string(),
                source,
            })?
            .with_timezone(&Utc);

        Ok(Self {
            sha: sha.to_string(),
            timestamp: timestamp.to_string(),
            date,
            subject: subject.to_string(),
            author: author.to_string(),
        })
    }

    /// Serialize back to the history line format
    #[must_use]
    pub fn to_line(&self) -> String {
        let sep = RECORD_SEPARATOR.to_string();
        [
            self.sha.as_str(),
            self.timestamp.as_str(),
            self.subject.as_str(),
            self.author.as_str(),
        ]
        .join(&sep)
    }

    /// Package the commit touches: the subject text before the first colon
    #[must_use]
    pub fn package(&self) -> &str {
        if !self.subject.contains(':') {
            return UNKNOWN_PACKAGE;
        }
        self.subject.split(':').next().unwrap_or_default().trim()
    }

    /// Description of the change: the subject text after the package prefix
    ///
    /// Only the segment between the first and second colon is kept, so
    /// `"a: b: c"` yields `"b"`.
    #[must_use]
    pub fn change(&self) -> &str {
        if !self.subject.contains(':') {
            return self.subject.trim();
        }
        self.subject.split(':').nth(1).unwrap_or_default().trim()
    }

    /// Web link to the commit under `base`
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.sha)
    }
}
