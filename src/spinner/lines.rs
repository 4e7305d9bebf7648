// src/spinner/lines.rs
//! Measuring printed output: escape stripping, visible width, wrapped line count.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use unicode_width::UnicodeWidthStr;

/// CSI and OSC sequences, plus the single-byte CSI introducer.
const ANSI_PATTERN: &str = r"[\x1b\x{9b}][\[\]()#;?]*(?:(?:(?:[a-zA-Z\d]*(?:;[a-zA-Z\d]*)*)?\x07)|(?:(?:\d{1,4}(?:;\d{0,4})*)?[\dA-PRZcf-ntqry=><~]))";

fn ansi_regex() -> Option<&'static Regex> {
    static ANSI: OnceLock<Option<Regex>> = OnceLock::new();
    ANSI.get_or_init(|| Regex::new(ANSI_PATTERN).ok()).as_ref()
}

/// Removes terminal escape sequences, leaving only printable text.
#[must_use]
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    match ansi_regex() {
        Some(re) => re.replace_all(s, ""),
        None => Cow::Borrowed(s),
    }
}

/// Terminal columns `s` occupies once escape sequences are removed.
#[must_use]
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Number of terminal lines `printed` occupies on a screen `max_width` columns wide.
///
/// Every `'\n'` starts a new line and any line wider than `max_width` wraps.
/// An empty string still occupies one line. A `max_width` of zero disables
/// wrapping.
#[must_use]
pub fn compute_lines(printed: &str, max_width: usize) -> usize {
    strip_ansi(printed)
        .split('\n')
        .map(|line| {
            let width = line.width();
            if max_width > 0 && width > max_width {
                width.div_ceil(max_width)
            } else {
                1
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_color_codes() {
        assert_eq!(strip_ansi("Hello \x1b[36mworld\x1b[0m"), "Hello world");
        assert_eq!(strip_ansi("\x1b[1;36mbold\x1b[0m"), "bold");
    }

    #[test]
    fn strips_osc_title() {
        assert_eq!(strip_ansi("\x1b]0;title\x07text"), "text");
    }

    #[test]
    fn plain_text_borrowed() {
        assert!(matches!(strip_ansi("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn width_ignores_escapes() {
        assert_eq!(visible_width("\x1b[31m|\x1b[0m "), 2);
    }

    #[test]
    fn zero_width_disables_wrap() {
        assert_eq!(compute_lines(&"a".repeat(500), 0), 1);
        assert_eq!(compute_lines("a\nb", 0), 2);
    }
}
