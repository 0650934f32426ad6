//! Convenience re-exports of commonly used types.
//!
//! This module provides a convenient way to import all the commonly used
//! quickopen types with a single `use quickopen::prelude::*;` statement.

pub use crate::engine::regexp::{FilterRegexError, filter_regex};
pub use crate::fuzzy_matcher::score_function::ScoreFunction;
pub use crate::fuzzy_matcher::{IndexType, MatchIndices, ScoreType};
pub use crate::highlight::{HighlightStyle, HighlightTarget, highlight_target, match_ranges};
pub use crate::options::{QuickOpenOptions, QuickOpenOptionsBuilder};
pub use crate::query::Prompt;
pub use crate::ranker::{RankedItem, Ranker};
