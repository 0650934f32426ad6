//! Configuration options for quickopen.
//!
//! `QuickOpenOptions` is shared by library callers, which use the generated
//! `QuickOpenOptionsBuilder`, and by the `qo` binary, which parses it from
//! the command line.

use derive_builder::Builder;

use crate::highlight::HighlightStyle;

/// qo - quick-open file path ranking
///
/// Reads candidate paths (one per line) and prints those matching the query,
/// best first, the way an editor's quick-open dialog orders them.
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(name = "final_build"))]
#[builder(default)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "qo", args_override_self = true, verbatim_doc_comment, version, about)
)]
pub struct QuickOpenOptions {
    //  --- Search ---
    /// Query to rank candidates against
    ///
    /// A trailing `:<line>` is stripped from the query and re-appended to
    /// every printed candidate, e.g. `main.rs:42`.
    #[cfg_attr(feature = "cli", arg(long, short, default_value = "", help_heading = "Search"))]
    pub query: String,

    /// Number of best results kept in score order
    ///
    /// Candidates beyond this are still printed, after the best ones, in
    /// input order. 0 sorts everything.
    #[cfg_attr(feature = "cli", arg(long = "limit", short = 'n', default_value_t = 100, help_heading = "Search"))]
    pub max_results: usize,

    /// Queries shorter than this are only filtered, not scored
    #[cfg_attr(feature = "cli", arg(long, default_value_t = 2, help_heading = "Search"))]
    pub min_query_len: usize,

    /// Factor applied to the fuzzy score before adding the default score
    #[cfg_attr(feature = "cli", arg(long = "multiplier", default_value_t = 10, help_heading = "Search"))]
    pub score_multiplier: i64,

    //  --- Input ---
    /// Read candidates from this file instead of stdin
    #[cfg_attr(feature = "cli", arg(long, short, help_heading = "Input"))]
    pub input: Option<String>,

    /// Read input delimited by ASCII NUL(\\0) characters
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Input"))]
    pub read0: bool,

    //  --- Output ---
    /// How to mark matched characters
    #[cfg_attr(feature = "cli", arg(long, value_enum, default_value = "none", help_heading = "Output"))]
    pub highlight: HighlightStyle,

    /// Print the score and a tab before each item
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Output"))]
    pub print_score: bool,

    /// Print the query (without location suffix) as the first line
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Output"))]
    pub print_query: bool,

    /// Print output delimited by ASCII NUL(\\0) characters
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Output"))]
    pub print0: bool,
}

impl Default for QuickOpenOptions {
    fn default() -> Self {
        Self {
            query: Default::default(),
            max_results: 100,
            min_query_len: 2,
            score_multiplier: 10,
            input: Default::default(),
            read0: Default::default(),
            highlight: Default::default(),
            print_score: Default::default(),
            print_query: Default::default(),
            print0: Default::default(),
        }
    }
}

impl QuickOpenOptionsBuilder {
    /// Builds the QuickOpenOptions from the builder
    pub fn build(&mut self) -> Result<QuickOpenOptions, QuickOpenOptionsBuilderError> {
        self.final_build().map(|opts| opts.build())
    }
}

impl QuickOpenOptions {
    /// Finalizes the options, resolving the "0 means everything" limit
    pub fn build(mut self) -> Self {
        if self.max_results == 0 {
            self.max_results = usize::MAX;
        }
        self
    }

    /// Output line terminator
    pub fn output_ending(&self) -> &'static str {
        if self.print0 { "\0" } else { "\n" }
    }
}
