#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(output) = std::str::from_utf8(data) {
        if let Ok(commits) = worklog_git::parse_log_output(output) {
            for commit in &commits {
                let _ = (commit.package(), commit.change(), commit.to_line());
            }
            let _ = worklog_git::group_by_package(commits);
        }
    }
});
