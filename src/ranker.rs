//! Ranking coordinator: pre-filter, score and order a candidate list.

use crate::engine::regexp::{FilterRegexError, filter_regex};
use crate::fuzzy_matcher::score_function::ScoreFunction;
use crate::fuzzy_matcher::{MatchIndices, ScoreType};
use crate::options::QuickOpenOptions;

/// A candidate that survived filtering, with its position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedItem {
    /// Index of the candidate in the input list
    pub index: usize,
    /// The candidate text
    pub text: String,
    /// Default score plus the weighted fuzzy score
    pub score: ScoreType,
    /// Matched character indices; only filled for the best results
    pub indices: MatchIndices,
}

/// Orders candidates for a query the way a quick-open dialog does.
///
/// The best `max_results` candidates come first, highest score first with
/// ties in input order. Candidates pushed out of that list follow in the
/// order they were pushed out, then everything that never made it in.
#[derive(Debug, Clone)]
pub struct Ranker {
    max_results: usize,
    min_query_len: usize,
    score_multiplier: ScoreType,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(&QuickOpenOptions::default())
    }
}

impl Ranker {
    /// Creates a ranker from the scoring knobs of `options`; a
    /// `max_results` of 0 keeps every candidate in the best list.
    pub fn new(options: &QuickOpenOptions) -> Self {
        let max_results = match options.max_results {
            0 => usize::MAX,
            n => n,
        };
        Self {
            max_results,
            min_query_len: options.min_query_len,
            score_multiplier: options.score_multiplier,
        }
    }

    /// Ranks `candidates` against `query`, every default score being 0.
    ///
    /// ```
    /// use quickopen::Ranker;
    ///
    /// let ranked = Ranker::default()
    ///     .rank("log", ["src/catalog.rs", "src/log.js", "README.md"])
    ///     .unwrap();
    /// let texts: Vec<_> = ranked.iter().map(|item| item.text.as_str()).collect();
    /// assert_eq!(texts, ["src/log.js", "src/catalog.rs"]);
    /// ```
    pub fn rank<I, S>(&self, query: &str, candidates: I) -> Result<Vec<RankedItem>, FilterRegexError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.rank_with_defaults(query, candidates.into_iter().map(|c| (c, 0)))
    }

    /// Ranks `(candidate, default_score)` pairs against `query`.
    ///
    /// The default score is a caller-supplied prior, e.g. how recently a
    /// file was opened; it is all that counts for queries shorter than
    /// `min_query_len`.
    pub fn rank_with_defaults<I, S>(&self, query: &str, candidates: I) -> Result<Vec<RankedItem>, FilterRegexError>
    where
        I: IntoIterator<Item = (S, ScoreType)>,
        S: AsRef<str>,
    {
        let filter = if query.is_empty() {
            None
        } else {
            Some(filter_regex(query)?)
        };
        let scored = query.chars().count() >= self.min_query_len;
        let mut scorer = ScoreFunction::new(query);

        let mut best: Vec<RankedItem> = Vec::new();
        let mut overflow: Vec<RankedItem> = Vec::new();
        let mut rest: Vec<RankedItem> = Vec::new();
        let mut num_candidates = 0;

        for (index, (candidate, default_score)) in candidates.into_iter().enumerate() {
            num_candidates += 1;
            let text = candidate.as_ref();
            if let Some(re) = &filter
                && !re.is_match(text)
            {
                continue;
            }

            let score = if scored {
                default_score + self.score_multiplier * scorer.score(text, None)
            } else {
                default_score
            };
            let item = RankedItem {
                index,
                text: text.to_string(),
                score,
                indices: MatchIndices::new(),
            };

            let min_best = best.last().map_or(ScoreType::MIN, |last| last.score);
            if best.len() < self.max_results || score > min_best {
                // after every entry with an equal score, so ties keep input order
                let pos = best.partition_point(|other| other.score >= score);
                best.insert(pos, item);
                if best.len() > self.max_results {
                    overflow.extend(best.pop());
                }
            } else {
                rest.push(item);
            }
        }

        debug!(
            "ranked {} candidates for {:?}: {} best, {} overflow, {} rest",
            num_candidates,
            query,
            best.len(),
            overflow.len(),
            rest.len()
        );

        for item in best.iter_mut() {
            scorer.score(&item.text, Some(&mut item.indices));
        }

        best.extend(overflow);
        best.extend(rest);
        Ok(best)
    }
}
