//! The streaming searcher: accumulate, dispatch, merge.

use std::cmp::Reverse;
use std::sync::Arc;
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{debug, error};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{FzError, Result};
use crate::matching::{FuzzyMatch, SearchTerm};
use crate::pipeline::batch::Batch;
use crate::pipeline::config::SearcherConfig;
use crate::pipeline::permits::PermitPool;
use crate::pipeline::stats::PipelineStats;

/// Ranks a stream of candidates against one search term.
///
/// ```
/// use fz::pipeline::Searcher;
///
/// let mut searcher = Searcher::new("pl").unwrap();
/// for line in ["people", "person", "place", "ply", "dog"] {
///     searcher.append(line).unwrap();
/// }
/// let ranked = searcher.ranked_results(25).unwrap();
/// let inputs: Vec<_> = ranked.iter().map(|m| m.input()).collect();
/// assert_eq!(inputs, ["ply", "place", "people", "person"]);
/// ```
pub struct Searcher {
    /// Term shared with every worker.
    term: Arc<SearchTerm>,

    /// Configuration for the pipeline.
    config: SearcherConfig,

    /// Candidates not yet submitted.
    batch: Batch,

    /// Thread pool running submitted batches.
    thread_pool: ThreadPool,

    /// Limits batches in flight.
    permits: PermitPool,

    /// Workers report their batch's matches here.
    results_tx: Sender<Vec<FuzzyMatch>>,
    results_rx: Receiver<Vec<FuzzyMatch>>,

    stats: PipelineStats,
}

impl Searcher {
    /// Create a searcher with the default configuration.
    pub fn new<T: Into<SearchTerm>>(term: T) -> Result<Self> {
        Self::with_config(term, SearcherConfig::default())
    }

    /// Create a searcher with a custom configuration.
    pub fn with_config<T: Into<SearchTerm>>(term: T, config: SearcherConfig) -> Result<Self> {
        config.validate()?;
        let workers = config.worker_count();

        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("fz-worker-{i}"))
            .panic_handler(|_| error!("worker panicked, its batch is lost"))
            .build()
            .map_err(|e| FzError::thread_pool(format!("Failed to create thread pool: {e}")))?;

        let (results_tx, results_rx) = unbounded();

        Ok(Self {
            term: Arc::new(term.into()),
            config,
            batch: Batch::new(),
            thread_pool,
            permits: PermitPool::new(workers),
            results_tx,
            results_rx,
            stats: PipelineStats::default(),
        })
    }

    /// The term being searched for.
    pub fn term(&self) -> &SearchTerm {
        &self.term
    }

    /// Counters for the input seen so far.
    pub fn stats(&self) -> &PipelineStats {
        &self.stats
    }

    /// Add one candidate. Surrounding whitespace is trimmed.
    ///
    /// Returns `false` without adding anything when the line is blank; the
    /// caller decides whether that ends its input. Blocks only when a full
    /// batch has to wait for a free worker.
    pub fn append(&mut self, line: &str) -> Result<bool> {
        let line = line.trim();
        if line.is_empty() {
            self.stats.record_blank();
            return Ok(false);
        }

        self.stats.record_line(line.len());
        self.batch.push(line.to_string());
        if self.batch.is_full(self.config.batch_byte_threshold) {
            self.submit()?;
        }
        Ok(true)
    }

    /// Add candidates until the first blank line, which ends this call.
    ///
    /// Returns the number of candidates added.
    pub fn append_all<I, S>(&mut self, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for line in lines {
            if !self.append(line.as_ref())? {
                break;
            }
            added += 1;
        }
        Ok(added)
    }

    /// Hand the current batch to a worker.
    fn submit(&mut self) -> Result<()> {
        let permit = self.permits.acquire()?;
        let batch = self.batch.take();
        self.stats.record_batch();
        debug!(
            "submitting batch {} ({} lines, {} bytes)",
            self.stats.batches_submitted,
            batch.len(),
            batch.bytes()
        );

        let term = Arc::clone(&self.term);
        let results_tx = self.results_tx.clone();
        self.thread_pool.spawn(move || {
            let matches = batch.best_matches(&term);
            // Free the slot before the hand-off; the merge may be far away.
            drop(permit);
            let _ = results_tx.send(matches);
        });
        Ok(())
    }

    /// Finish the search and return at most `max` matches, best first.
    ///
    /// The partially filled last batch is matched on the calling thread; then
    /// every submitted batch is waited for.
    pub fn ranked_results(self, max: usize) -> Result<Vec<FuzzyMatch>> {
        self.ranked_results_with_stats(max).map(|(matches, _)| matches)
    }

    /// Like [`ranked_results`](Self::ranked_results), also returning the final
    /// counters, including how many candidates matched before truncation.
    pub fn ranked_results_with_stats(
        self,
        max: usize,
    ) -> Result<(Vec<FuzzyMatch>, PipelineStats)> {
        let Searcher {
            term,
            batch,
            results_tx,
            results_rx,
            mut stats,
            ..
        } = self;
        let timer = Instant::now();

        let mut all = batch.best_matches(&term);

        // Only workers hold senders from here on, so a lost worker shows up
        // as a disconnect instead of a hang.
        drop(results_tx);
        let expected = stats.batches_submitted;
        for received in 0..expected {
            match results_rx.recv() {
                Ok(matches) => all.extend(matches),
                Err(_) => {
                    return Err(FzError::worker_lost(format!(
                        "{} of {expected} batches never reported",
                        expected - received
                    )));
                }
            }
        }

        stats.record_matched(all.len());
        // Ranks are computed once per match, not once per comparison.
        all.sort_by_cached_key(|m| Reverse(m.rank()));
        all.truncate(max);

        debug!(
            "merged {} matches from {} lines in {} batches ({:?}), keeping {}",
            stats.candidates_matched,
            stats.lines_accepted,
            expected,
            timer.elapsed(),
            all.len()
        );
        Ok((all, stats))
    }
}
