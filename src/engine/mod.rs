//! Candidate pre-filtering engines.

/// Ordered-subsequence regular expressions
pub mod regexp;
