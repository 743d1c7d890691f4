//! # fz
//!
//! Fuzzy search over a stream of strings.
//!
//! ## Features
//!
//! - Term characters match in order with arbitrary gaps between them
//! - Ranking by matched characters, then contiguity, then length
//! - Streaming input, matched concurrently in byte-bounded batches
//! - Highlighting of the matched characters
//!
//! ```
//! use fz::highlight::HighlightStyle;
//! use fz::pipeline::Searcher;
//!
//! let mut searcher = Searcher::new("CAT").unwrap();
//! searcher.append("CxxxAxxxTCAT").unwrap();
//! let best = searcher.ranked_results(1).unwrap();
//! assert_eq!(HighlightStyle::new("[", "]").render(&best[0]), "CxxxAxxxT[CAT]");
//! ```

pub mod cli;
pub mod error;
pub mod highlight;
pub mod matching;
pub mod pipeline;

pub mod prelude {
    pub use crate::error::{FzError, Result};
    pub use crate::highlight::HighlightStyle;
    pub use crate::matching::{FuzzyMatch, SearchTerm, Span, best_match, search};
    pub use crate::pipeline::{Searcher, SearcherConfig};
}
