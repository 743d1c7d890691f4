//! Fuzzy matching of a search term against a single candidate string.
//!
//! Term characters must appear in the candidate in order, with any number of
//! characters between them. A match is described by the [`Span`]s of
//! candidate characters that were matched; its quality is derived from those
//! spans alone (see [`FuzzyMatch::match_score`] and
//! [`FuzzyMatch::gap_score`]).

pub mod engine;
pub mod rank;
pub mod span;
pub mod term;

pub use engine::{best_match, search};
pub use rank::{Rank, compare};
pub use span::{FuzzyMatch, Span};
pub use term::SearchTerm;
