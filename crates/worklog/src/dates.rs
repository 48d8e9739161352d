//! Date expression resolution
//!
//! Free-form expressions such as `"2 days ago"`, `"2026-01-01"` or `"now"`
//! are handed to GNU `date`, which prints one ISO-8601 line with an explicit
//! UTC offset.

use std::process::Command;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

/// Errors from resolving a date expression
#[derive(Debug, Error)]
pub enum DateError {
    /// The date program could not be started
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program that was invoked
        program: String,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// The date program rejected the expression
    #[error("{expression:?} was rejected ({status})")]
    Rejected {
        /// The expression as given
        expression: String,
        /// Exit status of the date program
        status: String,
    },

    /// The date program printed something that is not an ISO-8601 instant
    #[error("{expression:?} resolved to unparseable output {output:?}")]
    Unparseable {
        /// The expression as given
        expression: String,
        /// What the date program printed
        output: String,
    },
}

/// Turns date expressions into absolute instants
pub trait DateResolver {
    /// Resolve `expression` to a UTC instant
    ///
    /// # Errors
    ///
    /// Returns `DateError` if the expression cannot be resolved.
    fn resolve(&self, expression: &str) -> Result<DateTime<Utc>, DateError>;
}

/// Resolves expressions with the system `date` utility
#[derive(Debug, Clone)]
pub struct SystemDate {
    program: String,
}

impl SystemDate {
    /// Use `program` instead of `date`
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for SystemDate {
    fn default() -> Self {
        Self::with_program("date")
    }
}

impl DateResolver for SystemDate {
    fn resolve(&self, expression: &str) -> Result<DateTime<Utc>, DateError> {
        let date_arg = format!("--date={expression}");
        let output = Command::new(&self.program)
            .args(["-u", "--iso-8601=s", date_arg.as_str()])
            .output()
            .map_err(|source| DateError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(DateError::Rejected {
                expression: expression.to_string(),
                status: output.status.to_string(),
            });
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let resolved = parse_iso8601(&text).ok_or_else(|| DateError::Unparseable {
            expression: expression.to_string(),
            output: text.clone(),
        })?;

        debug!(expression, resolved = %resolved, "Resolved date");
        Ok(resolved)
    }
}

/// Parse a single ISO-8601 line with an explicit offset
#[must_use]
pub fn parse_iso8601(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
