//! Ordering of matches, best first.

use std::cmp::{Ordering, Reverse};

use crate::matching::span::FuzzyMatch;

/// Sort key for a [`FuzzyMatch`]. A greater `Rank` is a better match.
///
/// Fields compare in declaration order: more matched characters, then fewer
/// gaps, then a shorter candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rank {
    pub match_score: usize,
    pub gap_score: isize,
    pub shortness: Reverse<usize>,
}

impl Rank {
    /// Compute the rank of a match.
    pub fn of(m: &FuzzyMatch) -> Self {
        Rank {
            match_score: m.match_score(),
            gap_score: m.gap_score(),
            shortness: Reverse(m.input_len()),
        }
    }
}

/// Compare two matches for sorting: `Less` means `a` ranks ahead of `b`.
///
/// Matches that tie on all three criteria compare `Equal` and keep whatever
/// relative order the caller's sort leaves them in.
pub fn compare(a: &FuzzyMatch, b: &FuzzyMatch) -> Ordering {
    b.rank().cmp(&a.rank())
}
