//! Counters describing one run of the pipeline.

use serde::{Deserialize, Serialize};

/// Ingestion and dispatch counters for a [`Searcher`](crate::pipeline::Searcher).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStats {
    /// Non-blank lines accepted as candidates.
    pub lines_accepted: u64,

    /// Blank or whitespace-only lines that were not added.
    pub blank_lines: u64,

    /// Bytes of accepted candidates, after trimming.
    pub bytes_accepted: u64,

    /// Batches handed to workers.
    pub batches_submitted: u64,

    /// Candidates with a match, counted before truncation to the top N.
    pub candidates_matched: u64,
}

impl PipelineStats {
    pub(crate) fn record_line(&mut self, bytes: usize) {
        self.lines_accepted += 1;
        self.bytes_accepted += bytes as u64;
    }

    pub(crate) fn record_blank(&mut self) {
        self.blank_lines += 1;
    }

    pub(crate) fn record_batch(&mut self) {
        self.batches_submitted += 1;
    }

    pub(crate) fn record_matched(&mut self, matched: usize) {
        self.candidates_matched = matched as u64;
    }
}
