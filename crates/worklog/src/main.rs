//! worklog: report package builds and commits within a time window
//!
//! This binary crate lists builds from the remote build feed or commits from
//! the local git history, once or continuously, as terminal lines or
//! changelog markdown.

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use worklog::config::Config;
use worklog::report::ReportDriver;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    config.validate().context("Invalid configuration")?;
    debug!(?config, "Starting worklog");

    let driver = ReportDriver::from_config(&config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    driver
        .run(&config.after, config.before.as_deref(), &mut out)
        .with_context(|| format!("Failed to report {}", config.command))?;

    Ok(())
}
