//! worklog library
//!
//! This module exports the reporting pipeline of worklog (date resolution,
//! event selection, rendering and the report driver) for use in integration
//! tests and as a library.

pub mod config;
pub mod dates;
pub mod error;
pub mod event;
pub mod filter;
pub mod render;
pub mod report;
pub mod tty;

pub use error::WorklogError;
