//! File path scoring for quick-open style search.
//!
//! [`ScoreFunction`] ranks a candidate path against a short query whose
//! characters may be scattered through the candidate. The alignment is a
//! dynamic program over two matrices:
//! - `score[i][j]`: the best cumulative score using the first `i + 1` query
//!   characters and the first `j + 1` candidate characters.
//! - `run[i][j]`: the length of the consecutive matched run ending at
//!   `(i, j)`, or 0 when the cell was reached by skipping `candidate[j]`.
//!
//! Matches get bonuses for starting a path token, starting a word, matching
//! an upper-case query character exactly, and landing inside the filename.
//! Extending a run is worth more the longer the run already is.
//!
//! The scorer never rejects a candidate. The score is read from the last
//! cell, so it is non-zero only when some alignment ends on a match of the
//! last query character; earlier query characters may go unmatched. Use
//! [`ScoreFunction::filter_regex`] to prune candidates first.
//!
//! # Example:
//! ```
//! use quickopen::fuzzy_matcher::score_function::ScoreFunction;
//!
//! let mut scorer = ScoreFunction::new("ab");
//! let mut indices = Vec::new();
//! assert_eq!(scorer.score("ab", Some(&mut indices)), 51);
//! assert_eq!(indices, [0, 1]);
//!
//! let regex = ScoreFunction::filter_regex("ab").unwrap();
//! assert!(regex.is_match("xAxB"));
//! assert!(!regex.is_match("ba"));
//! ```

use regex::Regex;

use crate::engine::regexp::{FilterRegexError, filter_regex};
use crate::fuzzy_matcher::util::{PATH_SEPARATOR, is_path_token_start, is_word_start, project_upper, to_upper};
use crate::fuzzy_matcher::{IndexType, MatchIndices, ScoreType};

const SCORE_BASE: ScoreType = 10;

const BONUS_PATH_TOKEN_START: ScoreType = 4;
const BONUS_WORD_START: ScoreType = 2;
const BONUS_CAPS_MATCH: ScoreType = 6;
const BONUS_FILE_NAME: ScoreType = 4;
const BONUS_FILE_NAME_START: ScoreType = 5;
const BONUS_FILE_NAME_WORD_START: ScoreType = 3;

const BONUS_RUN_FILE_NAME: ScoreType = 4;
const BONUS_RUN_PATH_TOKEN_START: ScoreType = 5;
const BONUS_RUN_PER_CHAR: ScoreType = 4;

/// Scores candidates against a single query.
///
/// Build one per query and call [`score`](Self::score) for every candidate.
/// The scratch matrices are kept between calls and only ever grow, so
/// scoring many candidates does not allocate once the longest one has been
/// seen.
#[derive(Debug, Default)]
pub struct ScoreFunction {
    query: Vec<char>,
    query_upper: Vec<char>,
    score: Vec<ScoreType>,
    run: Vec<u32>,
    candidate: Vec<char>,
    candidate_upper: Vec<char>,
    /// First character index of the filename, i.e. one past the last `/`.
    file_name_start: usize,
}

impl ScoreFunction {
    /// Creates a scorer for `query`.
    pub fn new(query: &str) -> Self {
        let query: Vec<char> = query.chars().collect();
        let query_upper = query.iter().copied().map(to_upper).collect();
        Self {
            query,
            query_upper,
            ..Default::default()
        }
    }

    /// The query this scorer was built for.
    pub fn query(&self) -> String {
        self.query.iter().collect()
    }

    /// Builds the case-insensitive subsequence pre-filter for `query`.
    ///
    /// See [`filter_regex`].
    pub fn filter_regex(query: &str) -> Result<Regex, FilterRegexError> {
        filter_regex(query)
    }

    /// Scores `candidate`, higher is better.
    ///
    /// When `indices` is given it is cleared and filled with the ascending
    /// character indices of `candidate` that were aligned with the query.
    /// An empty query or candidate scores 0 and leaves `indices` empty.
    pub fn score(&mut self, candidate: &str, indices: Option<&mut MatchIndices>) -> ScoreType {
        let indices = indices.map(|out| {
            out.clear();
            out
        });

        self.candidate.clear();
        self.candidate.extend(candidate.chars());

        let n = self.query.len();
        let m = self.candidate.len();
        if n == 0 || m == 0 {
            return 0;
        }

        self.reserve(n * m);
        project_upper(&self.candidate, &mut self.candidate_upper);
        self.file_name_start = self
            .candidate
            .iter()
            .rposition(|&c| c == PATH_SEPARATOR)
            .map_or(0, |slash| slash + 1);

        for i in 0..n {
            for j in 0..m {
                let skip = if j == 0 { 0 } else { self.score[i * m + j - 1] };
                let (prev, run) = if i == 0 || j == 0 {
                    (0, 0)
                } else {
                    let diag = (i - 1) * m + j - 1;
                    (self.score[diag], self.run[diag])
                };
                let pick = self.pick_score(i, j, run as usize);
                if pick != 0 && prev + pick > skip {
                    self.run[i * m + j] = run + 1;
                    self.score[i * m + j] = prev + pick;
                } else {
                    self.run[i * m + j] = 0;
                    self.score[i * m + j] = skip;
                }
            }
        }

        if let Some(out) = indices {
            self.restore_match_indices(n, m, out);
        }

        let score = self.score[n * m - 1];
        trace!("score {:?} against {:?}: {}", self.query(), candidate, score);
        score
    }

    /// Makes sure both matrices hold at least `cells` cells.
    fn reserve(&mut self, cells: usize) {
        if self.score.len() < cells {
            let grown = cells.saturating_mul(2);
            trace!("growing score matrices from {} to {} cells", self.score.len(), grown);
            self.score.resize(grown, 0);
            self.run.resize(grown, 0);
        }
    }

    fn restore_match_indices(&self, n: usize, m: usize, out: &mut MatchIndices) {
        let (mut i, mut j) = (n, m);
        while i > 0 && j > 0 {
            if self.run[(i - 1) * m + j - 1] != 0 {
                out.push((j - 1) as IndexType);
                i -= 1;
            }
            j -= 1;
        }
        out.reverse();
    }

    /// Score for aligning `query[i]` with `candidate[j]`, 0 if they differ.
    fn pick_score(&self, i: usize, j: usize, run: usize) -> ScoreType {
        if self.query_upper[i] != self.candidate_upper[j] {
            return 0;
        }
        if run == 0 {
            self.single_char_score(i, j)
        } else {
            self.run_char_score(j - run, run)
        }
    }

    fn single_char_score(&self, i: usize, j: usize) -> ScoreType {
        let word_start = is_word_start(&self.candidate, &self.candidate_upper, j);
        let in_file_name = j >= self.file_name_start;
        let caps_match = self.query[i] == self.candidate[j] && self.query[i] == self.query_upper[i];

        let mut score = SCORE_BASE;
        if is_path_token_start(&self.candidate, j) {
            score += BONUS_PATH_TOKEN_START;
        }
        if word_start {
            score += BONUS_WORD_START;
        }
        if caps_match {
            score += BONUS_CAPS_MATCH;
        }
        if in_file_name {
            score += BONUS_FILE_NAME;
        }
        // the whole match starts exactly at the filename
        if j == self.file_name_start && i == 0 {
            score += BONUS_FILE_NAME_START;
        }
        if in_file_name && word_start {
            score += BONUS_FILE_NAME_WORD_START;
        }
        score
    }

    /// Score for extending a run of `run` characters that started at `start`.
    fn run_char_score(&self, start: usize, run: usize) -> ScoreType {
        let mut score = SCORE_BASE;
        if start >= self.file_name_start {
            score += BONUS_RUN_FILE_NAME;
        }
        if is_path_token_start(&self.candidate, start) {
            score += BONUS_RUN_PATH_TOKEN_START;
        }
        score + run as ScoreType * BONUS_RUN_PER_CHAR
    }
}
