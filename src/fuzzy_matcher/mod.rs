//! Fuzzy matching algorithms.
//!
//! This module provides the file path scorer used by quick-open search,
//! together with the character classification it relies on.

/// File path scoring with path, word and filename bonuses
pub mod score_function;
pub(crate) mod util;

/// Character index into a candidate
pub type IndexType = usize;
/// Score produced by the scorers, higher is better
pub type ScoreType = i64;

/// Matched character indices, ascending.
pub type MatchIndices = Vec<IndexType>;
