//! Concurrent batching of candidates through the match engine.
//!
//! Candidates are accumulated into byte-bounded batches. Each full batch is
//! handed to a worker on a thread pool while the caller keeps appending; a
//! counting permit pool caps the number of batches in flight so ingestion
//! applies backpressure instead of growing memory without bound.

pub mod batch;
pub mod config;
pub mod permits;
pub mod searcher;
pub mod stats;

pub use batch::Batch;
pub use config::{DEFAULT_BATCH_BYTE_THRESHOLD, SearcherConfig};
pub use permits::{Permit, PermitPool};
pub use searcher::Searcher;
pub use stats::PipelineStats;
