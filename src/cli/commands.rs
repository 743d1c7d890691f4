//! Command implementation for the fz CLI.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::FzArgs;
use crate::cli::output::write_results;
use crate::error::{FzError, Result};
use crate::pipeline::Searcher;

/// Search stdin and print the ranked matches to stdout.
pub fn execute_command(args: FzArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    match run(&args, stdin.lock(), &mut out) {
        // The reader went away (e.g. `fz x | head -1`); nothing left to do.
        Err(FzError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.map(|_| ()),
    }
}

/// Feed every line of `input` to a searcher and write the best matches to
/// `output`. Returns the number of matches written.
pub fn run<R: BufRead, W: Write>(args: &FzArgs, mut input: R, output: &mut W) -> Result<usize> {
    let start_time = Instant::now();
    let mut searcher = Searcher::with_config(args.term.as_str(), args.searcher_config())?;
    debug!(
        "searching for {:?} with {:?}",
        searcher.term().as_str(),
        args.searcher_config()
    );

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if !searcher.append(&line)? && args.stop_on_blank {
            debug!("blank line, ending input");
            break;
        }
    }

    let (matches, stats) = searcher.ranked_results_with_stats(args.limit)?;
    info!(
        "{} lines ({} bytes, {} blank) in {} batches, {} matched, {} shown, {:?}",
        stats.lines_accepted,
        stats.bytes_accepted,
        stats.blank_lines,
        stats.batches_submitted,
        stats.candidates_matched,
        matches.len(),
        start_time.elapsed()
    );

    write_results(&matches, args, output)?;
    Ok(matches.len())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use clap::Parser;

    use super::*;

    fn run_with(argv: &[&str], input: &str) -> (usize, String) {
        let mut full = vec!["fz"];
        full.extend_from_slice(argv);
        let args = FzArgs::try_parse_from(full).unwrap();

        let mut out = Vec::new();
        let written = run(&args, Cursor::new(input.as_bytes().to_vec()), &mut out).unwrap();
        (written, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_run_ranks_lines() {
        let (written, out) = run_with(
            &["--no-highlight", "pl"],
            "people\nperson\nplace\nply\ndog\n",
        );
        assert_eq!(written, 4);
        assert_eq!(out, "ply\nplace\npeople\nperson\n");
    }

    #[test]
    fn test_run_ignores_blank_lines_by_default() {
        let (_, out) = run_with(&["--no-highlight", "pl"], "place\n\n   \nply\n");
        assert_eq!(out, "ply\nplace\n");
    }

    #[test]
    fn test_run_stop_on_blank() {
        let (_, out) = run_with(
            &["--no-highlight", "--stop-on-blank", "pl"],
            "place\n\nply\n",
        );
        assert_eq!(out, "place\n");
    }

    #[test]
    fn test_run_handles_crlf_and_invalid_utf8() {
        let args = FzArgs::try_parse_from(["fz", "--no-highlight", "ab"]).unwrap();
        let input = b"ab\r\nx\xffab\n".to_vec();

        let mut out = Vec::new();
        run(&args, Cursor::new(input), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "ab\nx\u{fffd}ab\n");
    }

    #[test]
    fn test_run_limit() {
        let input: String = (0..30).map(|i| format!("match{i:02}\n")).collect();
        let (written, out) = run_with(&["--no-highlight", "-n", "25", "match"], &input);
        assert_eq!(written, 25);
        assert_eq!(out.lines().count(), 25);
    }

    #[test]
    fn test_run_rejects_bad_config() {
        let args = FzArgs::try_parse_from(["fz", "--batch-bytes", "0", "x"]).unwrap();
        let mut out = Vec::new();
        let err = run(&args, Cursor::new(Vec::new()), &mut out).unwrap_err();
        assert!(matches!(err, FzError::InvalidConfig(_)));
    }
}
