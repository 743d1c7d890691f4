//! Error types for fz.
//!
//! Matching itself never fails: a candidate that does not match simply
//! produces no [`FuzzyMatch`](crate::matching::FuzzyMatch). Errors come from
//! the edges of the system (reading input, writing output, bad
//! configuration) and from the worker pool.
//!
//! # Examples
//!
//! ```
//! use fz::error::{FzError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FzError::invalid_argument("limit must be positive"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for fz operations.
#[derive(Error, Debug)]
pub enum FzError {
    /// I/O errors while reading candidates or writing results
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Rejected searcher configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Rejected argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The worker thread pool could not be built
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// A submitted batch never reported back
    #[error("Worker lost: {0}")]
    WorkerLost(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with FzError.
pub type Result<T> = std::result::Result<T, FzError>;

impl FzError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        FzError::InvalidConfig(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        FzError::InvalidArgument(msg.into())
    }

    /// Create a new thread pool error.
    pub fn thread_pool<S: Into<String>>(msg: S) -> Self {
        FzError::ThreadPool(msg.into())
    }

    /// Create a new worker lost error.
    pub fn worker_lost<S: Into<String>>(msg: S) -> Self {
        FzError::WorkerLost(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        FzError::Other(msg.into())
    }
}
