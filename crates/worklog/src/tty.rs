//! ANSI styling and OSC-8 hyperlinks for terminal output

/// Reset all attributes
pub const RESET: &str = "\x1b[0m";
/// Green foreground
pub const GREEN: &str = "\x1b[32m";
/// Yellow foreground
pub const YELLOW: &str = "\x1b[33m";
/// Blue foreground
pub const BLUE: &str = "\x1b[34m";

/// Link marker shown after each line
pub const LINK_MARKER: &str = "[🡕]";

/// Wrap `text` in an OSC-8 hyperlink to `url`
#[must_use]
pub fn hyperlink(text: &str, url: &str) -> String {
    format!("\x1b]8;;{url}\x1b\\{text}\x1b]8;;\x1b\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyperlink() {
        assert_eq!(
            hyperlink("abc", "https://example.com"),
            "\x1b]8;;https://example.com\x1b\\abc\x1b]8;;\x1b\\"
        );
    }
}
