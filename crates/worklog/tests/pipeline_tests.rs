// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! End-to-end tests of the report pipeline
//!
//! The real feed client and history query run against a local HTTP socket
//! and a scratch git repository; only dates and the clock are fixed.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use worklog::WorklogError;
use worklog::dates::{DateError, DateResolver};
use worklog::filter::{EventFilter, Kind};
use worklog::render::{Format, Renderer};
use worklog::report::{Clock, ReportDriver, ReportOptions};
use worklog_builds::BuildFeed;
use worklog_git::GitHistory;

const FEED: &str = r#"[
    {"id": 10, "pkg": "palette", "version": "1.0", "release": "1", "ref": "aaa",
     "tag": "palette-1.0-1", "tag_url": "https://example.com/t/10", "log_url": "https://example.com/l/10",
     "status": "OK", "builder": "b1", "finished": "2026-01-03T10:00:00+00:00"},
    {"id": 11, "pkg": "nano", "version": "8.0", "release": "5", "ref": "bbb",
     "tag": "nano-8.0-5", "tag_url": "https://example.com/t/11", "log_url": "https://example.com/l/11",
     "status": "OK", "builder": "b2", "finished": "2026-01-04T10:00:00+00:00"},
    {"id": 12, "pkg": "palette", "version": "1.1", "release": "2", "ref": "ccc",
     "tag": "palette-1.1-2", "tag_url": "https://example.com/t/12", "log_url": "https://example.com/l/12",
     "status": "FAILED", "builder": "b1", "finished": "2026-01-05T10:00:00+00:00"}
]"#;

fn serve(body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");
    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
            let mut line = String::new();
            while reader.read_line(&mut line).map(|n| n > 0).unwrap_or(false) {
                if line == "\r\n" {
                    break;
                }
                line.clear();
            }
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{addr}/builds.json")
}

/// Scratch repository removed on drop
struct ScratchRepo(PathBuf);

impl ScratchRepo {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "worklog-pipeline-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).expect("create scratch repo");
        git(&path, &["init", "-q"], None);
        Self(path)
    }

    fn commit(&self, message: &str, date: &str) {
        git(
            &self.0,
            &["commit", "-q", "--allow-empty", "-m", message],
            Some(date),
        );
    }

    fn commit_rebased(&self, message: &str, authored: &str, committed: &str) {
        let output = Command::new("git")
            .current_dir(&self.0)
            .args(["-c", "user.name=Packager", "-c", "user.email=packager@example.com"])
            .args(["-c", "commit.gpgsign=false"])
            .args(["commit", "-q", "--allow-empty", "-m", message])
            .env("GIT_AUTHOR_DATE", authored)
            .env("GIT_COMMITTER_DATE", committed)
            .output()
            .expect("run git commit");
        assert!(
            output.status.success(),
            "git commit failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

impl Drop for ScratchRepo {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn git(dir: &Path, args: &[&str], date: Option<&str>) {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir)
        .args(["-c", "user.name=Packager", "-c", "user.email=packager@example.com"])
        .args(["-c", "commit.gpgsign=false"])
        .args(args);
    if let Some(date) = date {
        cmd.env("GIT_AUTHOR_DATE", date).env("GIT_COMMITTER_DATE", date);
    }
    let output = cmd.output().expect("run git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
}

struct FixedDates;

impl DateResolver for FixedDates {
    fn resolve(&self, expression: &str) -> Result<DateTime<Utc>, DateError> {
        match expression {
            "start" => Ok(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()),
            "end" => Ok(Utc.with_ymd_and_hms(2026, 1, 4, 23, 0, 0).unwrap()),
            other => Err(DateError::Unparseable {
                expression: other.to_string(),
                output: String::new(),
            }),
        }
    }
}

struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 31, 0, 0, 0).unwrap()
    }

    fn sleep(&self, _duration: Duration) {}
}

fn driver(feed_url: String, repo: &Path, kind: Kind, sort: bool) -> ReportDriver {
    ReportDriver::new(
        EventFilter::new(
            Box::new(BuildFeed::new(feed_url)),
            Box::new(GitHistory::new(repo)),
        ),
        Box::new(FixedDates),
        Box::new(FixedClock),
        Renderer::new("https://git.example.org/commit"),
        ReportOptions {
            kind,
            format: Format::Markdown,
            sort,
            ..Default::default()
        },
    )
}

fn run(driver: &ReportDriver, before: Option<&str>) -> Result<Vec<String>, WorklogError> {
    let mut buf = Vec::new();
    driver.run("start", before, &mut buf)?;
    Ok(String::from_utf8(buf)
        .expect("utf8")
        .lines()
        .map(str::to_string)
        .collect())
}

#[test]
fn test_builds_report_from_local_feed() {
    let d = driver(serve(FEED), &std::env::temp_dir(), Kind::Builds, false);
    let lines = run(&d, Some("end")).expect("report");
    assert_eq!(
        lines,
        vec![
            "2 builds:",
            "- [palette 1.0-1](https://example.com/t/10)",
            "- [nano 8.0-5](https://example.com/t/11)",
        ]
    );
}

#[test]
fn test_updates_report_skips_superseded_builds() {
    // palette's latest build (12) lies after "end", so palette drops out
    let d = driver(serve(FEED), &std::env::temp_dir(), Kind::Updates, false);
    let lines = run(&d, Some("end")).expect("report");
    assert_eq!(
        lines,
        vec!["1 updates:", "- [nano 8.0-5](https://example.com/t/11)"]
    );
}

#[test]
fn test_updates_report_until_now() {
    let d = driver(serve(FEED), &std::env::temp_dir(), Kind::Updates, true);
    let lines = run(&d, None).expect("report");
    assert_eq!(
        lines,
        vec![
            "2 updates:",
            "- [nano 8.0-5](https://example.com/t/11)",
            "- [palette 1.1-2](https://example.com/t/12)",
        ]
    );
}

#[test]
fn test_commits_report_from_scratch_repo() {
    let repo = ScratchRepo::new("commits");
    repo.commit("palette: fix crash", "2026-01-02T12:00:00+00:00");
    repo.commit("Update README", "2026-01-03T12:00:00+00:00");
    repo.commit("nano: update to 8.0", "2026-01-10T12:00:00+00:00");

    let d = driver(serve("[]"), &repo.0, Kind::Commits, true);
    let lines = run(&d, Some("end")).expect("report");

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "2 commits:");
    // "<unknown>" sorts before "palette"
    assert!(lines[1].starts_with("- [Update README](https://git.example.org/commit/"));
    assert!(lines[2].starts_with("- [palette: fix crash](https://git.example.org/commit/"));
}

#[test]
fn test_commits_report_keeps_rebased_commit() {
    // authored before "start", landed inside the window
    let repo = ScratchRepo::new("rebased");
    repo.commit_rebased(
        "palette: fix crash",
        "2025-12-20T12:00:00+00:00",
        "2026-01-02T12:00:00+00:00",
    );

    let d = driver(serve("[]"), &repo.0, Kind::Commits, false);
    let lines = run(&d, Some("end")).expect("report");

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "1 commits:");
    assert!(lines[1].starts_with("- [palette: fix crash](https://git.example.org/commit/"));
}

#[test]
fn test_feed_failure_propagates() {
    let d = driver(serve("not json"), &std::env::temp_dir(), Kind::Builds, false);
    let result = run(&d, Some("end"));
    assert!(matches!(result, Err(WorklogError::Feed(_))), "{result:?}");
}

#[test]
fn test_invalid_date_propagates() {
    let d = driver(serve(FEED), &std::env::temp_dir(), Kind::Builds, false);
    let result = run(&d, Some("whenever"));
    assert!(matches!(result, Err(WorklogError::InvalidDate(_))), "{result:?}");
}
