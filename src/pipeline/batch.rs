//! Byte-bounded groups of candidates.

use std::mem;

use crate::matching::{FuzzyMatch, SearchTerm, best_match};

/// Candidates waiting to be matched as one unit of work.
#[derive(Debug, Default)]
pub struct Batch {
    /// Candidates in arrival order.
    lines: Vec<String>,

    /// Sum of the byte lengths of `lines`.
    bytes: usize,
}

impl Batch {
    /// Create a new empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate to the batch.
    pub fn push(&mut self, line: String) {
        self.bytes += line.len();
        self.lines.push(line);
    }

    /// Whether the batch has reached `threshold` bytes.
    pub fn is_full(&self, threshold: usize) -> bool {
        self.bytes >= threshold
    }

    /// Move the accumulated candidates out, leaving an empty batch with the
    /// same capacity behind.
    pub fn take(&mut self) -> Batch {
        let capacity = self.lines.capacity();
        Batch {
            lines: mem::replace(&mut self.lines, Vec::with_capacity(capacity)),
            bytes: mem::take(&mut self.bytes),
        }
    }

    /// Get the number of candidates in the batch.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Accumulated size in bytes.
    pub fn bytes(&self) -> usize {
        self.bytes
    }

    /// The best match of every candidate that matched at all.
    pub fn best_matches(&self, term: &SearchTerm) -> Vec<FuzzyMatch> {
        self.lines
            .iter()
            .filter_map(|line| best_match(line, term))
            .collect()
    }
}
