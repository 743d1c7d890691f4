//! Configuration for the batch pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{FzError, Result};

/// Accumulated bytes at which a batch is handed to a worker.
pub const DEFAULT_BATCH_BYTE_THRESHOLD: usize = 256_000;

/// Configuration for a [`Searcher`](crate::pipeline::Searcher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearcherConfig {
    /// A batch is submitted once its lines add up to at least this many bytes.
    pub batch_byte_threshold: usize,

    /// Maximum number of batches processed at once.
    /// If None, uses the number of CPU cores.
    pub max_workers: Option<usize>,
}

impl Default for SearcherConfig {
    fn default() -> Self {
        Self {
            batch_byte_threshold: DEFAULT_BATCH_BYTE_THRESHOLD,
            max_workers: None,
        }
    }
}

impl SearcherConfig {
    /// Set the batch byte threshold.
    pub fn with_batch_byte_threshold(mut self, bytes: usize) -> Self {
        self.batch_byte_threshold = bytes;
        self
    }

    /// Set the maximum number of concurrent workers.
    pub fn with_max_workers(mut self, workers: usize) -> Self {
        self.max_workers = Some(workers);
        self
    }

    /// Number of workers to run, resolving the CPU default.
    pub fn worker_count(&self) -> usize {
        self.max_workers.unwrap_or_else(num_cpus::get)
    }

    /// Check that the configuration can drive a pipeline.
    pub fn validate(&self) -> Result<()> {
        if self.batch_byte_threshold == 0 {
            return Err(FzError::invalid_config(
                "batch_byte_threshold must be greater than 0",
            ));
        }
        if self.max_workers == Some(0) {
            return Err(FzError::invalid_config("max_workers must be greater than 0"));
        }
        Ok(())
    }
}
