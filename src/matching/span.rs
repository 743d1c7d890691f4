//! Matched character ranges and the match they belong to.

use std::sync::Arc;

use serde::Serialize;

use crate::matching::rank::Rank;

/// A half-open range `[start, end)` of character positions in a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// First matched character.
    pub start: usize,
    /// One past the last matched character.
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "empty span {start}..{end}");
        Span { start, end }
    }

    /// Number of characters covered by the span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Spans are never empty; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// A candidate string together with the spans where the term was found.
///
/// Scores are never stored; they are recomputed from the spans so they can
/// not drift from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatch {
    input: Arc<str>,
    spans: Vec<Span>,
}

impl FuzzyMatch {
    /// Create a match over `input`. `spans` must be ordered and disjoint.
    pub fn new(input: Arc<str>, spans: Vec<Span>) -> Self {
        debug_assert!(spans.windows(2).all(|w| w[0].end <= w[1].start));
        FuzzyMatch { input, spans }
    }

    /// The candidate string that was searched.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The matched spans, ascending by `start`.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Length of the candidate in characters.
    pub fn input_len(&self) -> usize {
        self.input.chars().count()
    }

    /// Total number of term characters that were matched.
    pub fn match_score(&self) -> usize {
        self.spans.iter().map(Span::len).sum()
    }

    /// `1 - number_of_spans`: zero for a contiguous match, more negative for
    /// every gap that had to be inserted into the term.
    pub fn gap_score(&self) -> isize {
        1 - self.spans.len() as isize
    }

    /// Whether any term character was matched at all.
    pub fn is_match(&self) -> bool {
        !self.spans.is_empty()
    }

    /// Ranking key for this match.
    pub fn rank(&self) -> Rank {
        Rank::of(self)
    }
}
