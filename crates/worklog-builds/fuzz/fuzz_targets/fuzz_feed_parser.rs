#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(body) = std::str::from_utf8(data) {
        if let Ok(builds) = worklog_builds::parse_feed(body) {
            let _ = worklog_builds::latest_per_package(builds);
        }
    }
});
