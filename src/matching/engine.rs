//! The fuzzy search over one candidate.
//!
//! A single greedy scan can settle for a poor match. For the term `CAT` in
//! `CxxxAxxxTCAT` the first scan matches `C`, `A` and `T` far apart, while
//! the trailing `CAT` is a perfect match. So after every scan the search is
//! repeated starting one character after the first matched character, until
//! the first term character can no longer be found. Each scan yields one
//! candidate [`FuzzyMatch`]; [`best_match`] keeps the best ranked one.
//!
//! Every restart begins strictly after the previous one, so each offset is
//! scanned at most once and the work is bounded by
//! `O(candidate_len * candidate_len)`.

use std::cmp::Reverse;
use std::sync::Arc;

use crate::matching::span::{FuzzyMatch, Span};
use crate::matching::term::SearchTerm;

/// Every match found for `term` in `candidate`, in order of the offset the
/// scan started from.
///
/// Partial matches are included: a scan stops at the first term character
/// that can't be found and keeps what it matched so far. Scans that match
/// nothing are never returned, so an empty term yields no matches.
pub fn search(candidate: &str, term: &SearchTerm) -> Vec<FuzzyMatch> {
    if term.is_empty() || candidate.is_empty() {
        return Vec::new();
    }

    let haystack: Vec<char> = candidate.chars().collect();
    let input: Arc<str> = Arc::from(candidate);

    let mut found = Vec::new();
    let mut offset = 0;
    while offset < haystack.len() {
        let spans = scan(&haystack, term.chars(), offset);
        let Some(first) = spans.first() else {
            break;
        };
        offset = first.start + 1;
        found.push(FuzzyMatch::new(Arc::clone(&input), spans));
    }

    found
}

/// The best ranked match for `term` in `candidate`, if any character matched.
pub fn best_match(candidate: &str, term: &SearchTerm) -> Option<FuzzyMatch> {
    search(candidate, term)
        .into_iter()
        .min_by_key(|m| Reverse(m.rank()))
}

/// Greedily match `term` against `haystack[offset..]`.
fn scan(haystack: &[char], term: &[char], mut offset: usize) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();

    for &c in term {
        let Some(skipped) = haystack[offset..].iter().position(|&h| h == c) else {
            break;
        };

        // Directly after the previous match: grow the open span.
        match spans.last_mut() {
            Some(last) if skipped == 0 => last.end += 1,
            _ => spans.push(Span::new(offset + skipped, offset + skipped + 1)),
        }

        offset += skipped + 1;
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_of(m: &FuzzyMatch) -> Vec<(usize, usize)> {
        m.spans().iter().map(|s| (s.start, s.end)).collect()
    }

    #[test]
    fn test_prefers_contiguous_trailing_match() {
        let term = SearchTerm::new("CAT");
        let all = search("CxxxAxxxTCAT", &term);

        assert_eq!(all.len(), 2);
        assert_eq!(spans_of(&all[0]), vec![(0, 1), (4, 5), (8, 9)]);
        assert_eq!(spans_of(&all[1]), vec![(9, 12)]);

        let best = best_match("CxxxAxxxTCAT", &term).unwrap();
        assert_eq!(spans_of(&best), vec![(9, 12)]);
        assert_eq!(best.match_score(), 3);
        assert_eq!(best.gap_score(), 0);
    }

    #[test]
    fn test_empty_term_never_matches() {
        let term = SearchTerm::new("");
        assert!(search("anything", &term).is_empty());
        assert!(best_match("anything", &term).is_none());
    }

    #[test]
    fn test_empty_candidate_never_matches() {
        let term = SearchTerm::new("a");
        assert!(search("", &term).is_empty());
    }

    #[test]
    fn test_missing_first_character_is_no_match() {
        let term = SearchTerm::new("pl");
        assert!(best_match("dog", &term).is_none());
    }

    #[test]
    fn test_partial_match_is_scored() {
        let term = SearchTerm::new("pl");
        let best = best_match("person", &term).unwrap();
        assert_eq!(spans_of(&best), vec![(0, 1)]);
        assert_eq!(best.match_score(), 1);
    }

    #[test]
    fn test_term_longer_than_candidate() {
        let term = SearchTerm::new("abcd");
        let best = best_match("ab", &term).unwrap();
        assert_eq!(spans_of(&best), vec![(0, 2)]);
        assert!(best.match_score() < term.len());
    }

    #[test]
    fn test_repeated_term_characters_extend_span() {
        let term = SearchTerm::new("aa");
        let all = search("aa", &term);
        assert_eq!(all.len(), 2);
        assert_eq!(spans_of(&all[0]), vec![(0, 2)]);
        assert_eq!(spans_of(&all[1]), vec![(1, 2)]);
    }

    #[test]
    fn test_restarts_find_later_anchor() {
        let term = SearchTerm::new("moo");
        let best = best_match("mmmoo", &term).unwrap();
        assert_eq!(spans_of(&best), vec![(2, 5)]);
    }

    #[test]
    fn test_positions_are_characters_not_bytes() {
        let term = SearchTerm::new("éd");
        let best = best_match("caféd", &term).unwrap();
        assert_eq!(spans_of(&best), vec![(3, 5)]);
    }

    #[test]
    fn test_spans_are_ordered_and_disjoint() {
        let term = SearchTerm::new("abcabc");
        for candidate in ["abcabc", "aXbXcXaXbXc", "cbacbaabc", "aaabbbccc"] {
            for m in search(candidate, &term) {
                assert!(m.match_score() > 0);
                for span in m.spans() {
                    assert!(span.end >= span.start + 1);
                }
                for pair in m.spans().windows(2) {
                    assert!(pair[0].end <= pair[1].start);
                }
            }
        }
    }

    #[test]
    fn test_pathological_input_terminates() {
        let candidate = format!("{}oo", "m".repeat(2_000));
        let term = SearchTerm::new("moo");
        let best = best_match(&candidate, &term).unwrap();
        assert_eq!(spans_of(&best), vec![(1_999, 2_002)]);
    }
}
