//! quickopen ranks file paths against a short fuzzy query, the way an
//! editor's "quick open" dialog does.
//!
//! The heart of the crate is [`ScoreFunction`], a dynamic-programming
//! scorer that rewards matches at path tokens, word starts, upper-case
//! characters and inside the filename, and reports which characters matched
//! so they can be highlighted. [`Ranker`] wraps it in the usual pipeline:
//! pre-filter with [`filter_regex`], score, keep the best results in order.
//!
//! # Examples
//!
//! ```
//! use quickopen::prelude::*;
//!
//! let prompt = Prompt::parse("mainrs:12");
//! let ranked = Ranker::default()
//!     .rank(&prompt.query, ["src/bin/main.rs", "src/remains.rs", "docs/main.md"])
//!     .unwrap();
//!
//! assert_eq!(ranked[0].text, "src/bin/main.rs");
//! assert_eq!(prompt.line, Some(11));
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub use crate::engine::regexp::{FilterRegexError, filter_regex};
pub use crate::fuzzy_matcher::score_function::ScoreFunction;
pub use crate::options::QuickOpenOptions;
pub use crate::query::Prompt;
pub use crate::ranker::{RankedItem, Ranker};

pub mod engine;
pub mod fuzzy_matcher;
pub mod highlight;
pub mod options;
pub mod prelude;
pub mod query;
pub mod ranker;
