//! Character classification shared by the scorers.

/// Path separator recognised by the file path scorer.
pub(crate) const PATH_SEPARATOR: char = '/';

/// Upper-case projection of a single character.
///
/// Characters whose upper-case form expands to several characters (`ß` →
/// `SS`) are kept unchanged so that the projection of a string has exactly
/// one entry per character and indices stay aligned with the input.
#[inline]
pub(crate) fn to_upper(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => ch,
    }
}

/// Fill `out` with the upper-case projection of `chars`.
pub(crate) fn project_upper(chars: &[char], out: &mut Vec<char>) {
    out.clear();
    out.extend(chars.iter().copied().map(to_upper));
}

/// Position 0, or right after a `/`.
#[inline]
pub(crate) fn is_path_token_start(chars: &[char], j: usize) -> bool {
    j == 0 || chars[j - 1] == PATH_SEPARATOR
}

/// Start of a new word: position 0, right after `_`, `-` or `/`, or a
/// character that is its own upper case following one that is not.
#[inline]
pub(crate) fn is_word_start(chars: &[char], upper: &[char], j: usize) -> bool {
    if j == 0 {
        return true;
    }
    let prev = chars[j - 1];
    matches!(prev, '_' | '-' | PATH_SEPARATOR) || (prev != upper[j - 1] && chars[j] == upper[j])
}

/// Cheap case-insensitive subsequence test.
///
/// This is the hard accept/reject decision the scorer itself never makes;
/// the regex pre-filter must agree with it.
#[cfg(test)]
pub(crate) fn cheap_matches(choice: &str, pattern: &str) -> bool {
    let mut choice_chars = choice.chars().map(to_upper);
    pattern
        .chars()
        .map(to_upper)
        .all(|p| choice_chars.any(|c| c == p))
}
