use regex::Regex;
use thiserror::Error;

/// Error building the subsequence pre-filter.
#[derive(Error, Debug)]
pub enum FilterRegexError {
    /// The pattern grew past the regex engine's compiled size limit
    #[error("query of {len} characters is too long to filter on: {source}")]
    TooLong {
        /// Query length in characters
        len: usize,
        /// Underlying compilation error
        source: regex::Error,
    },
}

/// Case-insensitive regex accepting strings that contain the characters of
/// `query` in order, e.g. `abc` becomes `(?i)a[^b]*b[^c]*c`.
///
/// The regex is unanchored, so `is_match` answers "is `query` a subsequence
/// of the haystack". An empty query matches everything.
///
/// ```
/// use quickopen::filter_regex;
///
/// let re = filter_regex("lgj").unwrap();
/// assert!(re.is_match("src/LOG.js"));
/// assert!(!re.is_match("js/log"));
/// ```
pub fn filter_regex(query: &str) -> Result<Regex, FilterRegexError> {
    let mut query_builder = String::from("(?i)");
    for (i, ch) in query.chars().enumerate() {
        let escaped = regex::escape(ch.encode_utf8(&mut [0; 4]));
        if i > 0 {
            query_builder.push_str("[^");
            query_builder.push_str(&escaped);
            query_builder.push_str("]*");
        }
        query_builder.push_str(&escaped);
    }

    trace!("filter regex for {query:?}: {query_builder}");
    Regex::new(&query_builder).map_err(|source| FilterRegexError::TooLong {
        len: query.chars().count(),
        source,
    })
}

#[cfg(test)]
#[cfg_attr(coverage, coverage(off))]
mod tests {
    use super::*;
    use crate::fuzzy_matcher::util::cheap_matches;

    #[test]
    fn test_pattern_shape() {
        assert_eq!(filter_regex("abc").unwrap().as_str(), "(?i)a[^b]*b[^c]*c");
        assert_eq!(filter_regex("").unwrap().as_str(), "(?i)");
    }

    #[test]
    fn test_ordered_subsequence() {
        let re = filter_regex("ab").unwrap();
        assert!(re.is_match("ab"));
        assert!(re.is_match("xaxxbx"));
        assert!(re.is_match("AB"));
        assert!(!re.is_match("ba"));
        assert!(!re.is_match("a"));
    }

    #[test]
    fn test_repeated_chars() {
        let re = filter_regex("aa").unwrap();
        assert!(re.is_match("aba"));
        assert!(!re.is_match("ab"));
    }

    #[test]
    fn test_metacharacters_escaped() {
        let re = filter_regex("a.b*c]").unwrap();
        assert!(re.is_match("a.b*c]"));
        assert!(re.is_match("xa-.-b-*-c-]"));
        assert!(!re.is_match("axbxc]"));

        for query in ["^", "$", "\\", "[", "(?", "-", "a^b"] {
            assert!(filter_regex(query).is_ok(), "{query}");
        }
        assert!(filter_regex("a^b").unwrap().is_match("a^xb"));
        assert!(filter_regex("x\\y").unwrap().is_match("x\\y"));
    }

    #[test]
    fn test_non_ascii() {
        let re = filter_regex("éß").unwrap();
        assert!(re.is_match("CAFÉ/straße"));
    }

    #[test]
    fn test_agrees_with_subsequence_check() {
        let haystacks = ["src/log.js", "srclog.js", "ba", "log", "l/o/g", "gol", "LoG", ""];
        for query in ["log", "lg", "ab", "gl", "o"] {
            let re = filter_regex(query).unwrap();
            for haystack in haystacks {
                assert_eq!(re.is_match(haystack), cheap_matches(haystack, query), "{query} / {haystack}");
            }
        }
    }
}
