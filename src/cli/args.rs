//! Command line argument parsing for fz using clap.

use std::ffi::OsString;

use clap::{CommandFactory, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::pipeline::{DEFAULT_BATCH_BYTE_THRESHOLD, SearcherConfig};

/// Number of matches printed unless `--limit` says otherwise.
pub const MAX_RESULTS: usize = 25;

const EXAMPLES: &str = "\
Examples:

    # recursively search for file paths containing \".rs\"
    $ find . | fz .rs
    ./build.rs
    ./src/lib.rs
    ./src/main.rs
    ./tests/cli.rs

    # search a list for the characters \"p\" and \"l\" anywhere in each string
    $ printf 'people\\nperson\\nplace\\nply\\ndog\\n' | fz pl
    ply
    place
    people
    person";

/// fz performs a fuzzy search against a line-delimited list of strings read
/// from stdin and prints the best matches.
#[derive(Parser, Debug, Clone)]
#[command(name = "fz")]
#[command(about = "Fuzzy search a line-delimited list of strings read from stdin")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct FzArgs {
    /// Characters to look for, in order, anywhere in each line
    #[arg(value_name = "SEARCH", allow_hyphen_values = true)]
    pub term: String,

    /// Maximum number of matches to print
    #[arg(short = 'n', long, default_value_t = MAX_RESULTS)]
    pub limit: usize,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Print matches without bold markers
    #[arg(long)]
    pub no_highlight: bool,

    /// Treat the first blank line as the end of input
    #[arg(long)]
    pub stop_on_blank: bool,

    /// Bytes of input collected before a batch is handed to a worker
    #[arg(long, default_value_t = DEFAULT_BATCH_BYTE_THRESHOLD)]
    pub batch_bytes: usize,

    /// Number of worker threads (default: number of CPUs)
    #[arg(short = 'j', long)]
    pub workers: Option<usize>,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl FzArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Pipeline configuration described by the flags.
    pub fn searcher_config(&self) -> SearcherConfig {
        SearcherConfig {
            batch_byte_threshold: self.batch_bytes,
            max_workers: self.workers,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One matching line per row, matched characters in bold
    Human,
    /// JSON array with spans and scores
    Json,
}

/// Full usage text.
pub fn usage() -> String {
    FzArgs::command().render_help().to_string()
}

/// Accept the single-dash `-help` spelling as `--help`.
///
/// Arguments after `--` are left alone so `-help` can still be searched for.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                arg
            } else if arg == "--" {
                passthrough = true;
                arg
            } else if arg == "-help" {
                OsString::from("--help")
            } else {
                arg
            }
        })
        .collect()
}
