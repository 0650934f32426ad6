//! Turning match indices into something a result row can highlight.

use std::ops::Range;

use crossterm::style::Stylize;

use crate::fuzzy_matcher::IndexType;
use crate::fuzzy_matcher::util::PATH_SEPARATOR;

/// How matched characters are marked when rendering a candidate as text.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", clap(rename_all = "snake_case"))]
pub enum HighlightStyle {
    /// Print the candidate untouched
    #[default]
    None,
    /// Surround every matched run with brackets: `src/[ma]i[n]`
    Brackets,
    /// Bold red ANSI escape sequences
    Ansi,
}

/// Which half of a quick-open result row carries the highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightTarget {
    /// The whole match lies in the filename; ranges are relative to it
    Title(Vec<Range<usize>>),
    /// Ranges relative to the full path
    Subtitle(Vec<Range<usize>>),
}

/// Collapses strictly increasing character indices into maximal runs.
///
/// ```
/// use quickopen::highlight::match_ranges;
///
/// assert_eq!(match_ranges(&[0, 1, 2, 5, 7, 8]), vec![0..3, 5..6, 7..9]);
/// ```
pub fn match_ranges(indices: &[IndexType]) -> Vec<Range<usize>> {
    let mut ranges: Vec<Range<usize>> = Vec::new();
    for &idx in indices {
        match ranges.last_mut() {
            Some(last) if last.end == idx => last.end = idx + 1,
            _ => ranges.push(idx..idx + 1),
        }
    }
    ranges
}

/// Picks the row half to highlight for `candidate`.
///
/// When the first matched character lies after the last `/`, every match is
/// in the filename and the ranges are shifted to start at the filename.
pub fn highlight_target(candidate: &str, indices: &[IndexType]) -> HighlightTarget {
    let ranges = match_ranges(indices);
    let file_name_start = candidate
        .chars()
        .enumerate()
        .filter(|&(_, ch)| ch == PATH_SEPARATOR)
        .last()
        .map_or(0, |(slash, _)| slash + 1);

    match indices.first() {
        Some(&first) if first >= file_name_start => HighlightTarget::Title(
            ranges
                .into_iter()
                .map(|r| r.start - file_name_start..r.end - file_name_start)
                .collect(),
        ),
        _ => HighlightTarget::Subtitle(ranges),
    }
}

/// Renders `text` with the characters at `indices` marked per `style`.
///
/// `indices` is expected ascending, as produced by the scorer; an index at
/// or before an already rendered one, or past the end of `text`, is ignored.
pub fn wrap_matches(text: &str, indices: &[IndexType], style: HighlightStyle) -> String {
    if style == HighlightStyle::None || indices.is_empty() {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut ret = String::with_capacity(text.len());
    let mut cursor = 0;
    for range in match_ranges(indices) {
        let start = range.start.min(chars.len());
        let end = range.end.min(chars.len());
        if start < cursor || start == end {
            continue;
        }
        ret.extend(&chars[cursor..start]);
        let matched: String = chars[start..end].iter().collect();
        match style {
            HighlightStyle::Brackets => {
                ret.push('[');
                ret.push_str(&matched);
                ret.push(']');
            }
            HighlightStyle::Ansi => ret.push_str(&matched.red().bold().to_string()),
            HighlightStyle::None => ret.push_str(&matched),
        }
        cursor = end;
    }
    ret.extend(&chars[cursor..]);
    ret
}
