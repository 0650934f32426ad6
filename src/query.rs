//! Parsing of the text typed into the quick-open prompt.
//!
//! A prompt such as `main.rs:42` searches for `main.rs` and remembers the
//! `:42` location so the opened file can be scrolled to line 42.

use std::sync::LazyLock;

use regex::Regex;

static LOCATION_SUFFIX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"([^:]+)(:\d*)$").ok());
static LINE_JUMP: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^:(\d+)$").ok());

/// A prompt split into the fuzzy query and its optional line location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prompt {
    /// Text to fuzzy match candidates against
    pub query: String,
    /// The stripped `:<digits>` suffix exactly as typed, e.g. `:42`
    pub line_suffix: Option<String>,
    /// Zero-based line from the suffix, `None` if no digits were typed
    pub line: Option<usize>,
}

impl Prompt {
    /// Splits `text` into query and location.
    ///
    /// ```
    /// use quickopen::Prompt;
    ///
    /// let prompt = Prompt::parse("  main.rs:42 ");
    /// assert_eq!(prompt.query, "main.rs");
    /// assert_eq!(prompt.line, Some(41));
    /// ```
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let captures = LOCATION_SUFFIX.as_ref().and_then(|re| re.captures(text));
        let Some(captures) = captures else {
            return Self {
                query: text.to_string(),
                ..Default::default()
            };
        };

        let query = captures.get(1).map_or("", |m| m.as_str());
        let suffix = captures.get(2).map_or("", |m| m.as_str());
        Self {
            query: query.to_string(),
            line_suffix: Some(suffix.to_string()),
            line: parse_line(&suffix[1..]),
        }
    }

    /// Zero-based line for a bare `:<digits>` prompt, which jumps inside
    /// the current file instead of searching. Line numbers start at 1, so
    /// `:0` is not a jump.
    pub fn line_jump(text: &str) -> Option<usize> {
        let captures = LINE_JUMP.as_ref()?.captures(text.trim_end())?;
        captures.get(1)?.as_str().parse::<usize>().ok()?.checked_sub(1)
    }
}

/// One-based line number text to a zero-based line, clamped at 0.
fn parse_line(digits: &str) -> Option<usize> {
    digits.parse::<usize>().ok().map(|line| line.saturating_sub(1))
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_plain_query() {
        let prompt = Prompt::parse("  src/lib  ");
        assert_eq!(prompt.query, "src/lib");
        assert_eq!(prompt.line_suffix, None);
        assert_eq!(prompt.line, None);
    }

    #[test]
    fn test_location_suffix() {
        let prompt = Prompt::parse("lib.rs:12");
        assert_eq!(prompt.query, "lib.rs");
        assert_eq!(prompt.line_suffix.as_deref(), Some(":12"));
        assert_eq!(prompt.line, Some(11));
    }

    #[test]
    fn test_line_zero_clamps() {
        assert_eq!(Prompt::parse("lib.rs:0").line, Some(0));
    }

    #[test]
    fn test_empty_suffix() {
        let prompt = Prompt::parse("lib.rs:");
        assert_eq!(prompt.query, "lib.rs");
        assert_eq!(prompt.line_suffix.as_deref(), Some(":"));
        assert_eq!(prompt.line, None);
    }

    #[test]
    fn test_colon_in_query_is_kept() {
        // the suffix needs at least one non-colon character before it
        assert_eq!(Prompt::parse(":12").query, ":12");
        assert_eq!(Prompt::parse("c:x").query, "c:x");
    }

    #[test]
    fn test_last_segment_before_suffix() {
        // only the segment between the last two colons is searched
        let prompt = Prompt::parse("a:b:3");
        assert_eq!(prompt.query, "b");
        assert_eq!(prompt.line_suffix.as_deref(), Some(":3"));
        assert_eq!(prompt.line, Some(2));

        let prompt = Prompt::parse("C:/src/main.rs:7");
        assert_eq!(prompt.query, "/src/main.rs");
        assert_eq!(prompt.line, Some(6));
    }

    #[test]
    fn test_line_jump() {
        assert_eq!(Prompt::line_jump(":12"), Some(11));
        assert_eq!(Prompt::line_jump(":1  "), Some(0));
        assert_eq!(Prompt::line_jump(":"), None);
        assert_eq!(Prompt::line_jump(":0"), None);
        assert_eq!(Prompt::line_jump("lib.rs:12"), None);
    }

    #[test]
    fn test_empty() {
        assert_eq!(Prompt::parse("   "), Prompt::default());
    }
}
