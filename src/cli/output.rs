//! Output formatting for ranked matches.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::{FzArgs, OutputFormat};
use crate::error::Result;
use crate::highlight::HighlightStyle;
use crate::matching::{FuzzyMatch, Span};

/// A match as written in JSON output.
#[derive(Debug, Serialize)]
pub struct MatchRecord<'a> {
    pub input: &'a str,
    pub spans: &'a [Span],
    pub match_score: usize,
    pub gap_score: isize,
}

impl<'a> From<&'a FuzzyMatch> for MatchRecord<'a> {
    fn from(m: &'a FuzzyMatch) -> Self {
        MatchRecord {
            input: m.input(),
            spans: m.spans(),
            match_score: m.match_score(),
            gap_score: m.gap_score(),
        }
    }
}

/// Write ranked matches in the format selected by `args`.
pub fn write_results<W: Write>(matches: &[FuzzyMatch], args: &FzArgs, w: &mut W) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => write_human(matches, args, w),
        OutputFormat::Json => write_json(matches, args, w),
    }
}

/// One line per match, spans highlighted unless disabled.
fn write_human<W: Write>(matches: &[FuzzyMatch], args: &FzArgs, w: &mut W) -> Result<()> {
    let style = if args.no_highlight {
        HighlightStyle::plain()
    } else {
        HighlightStyle::ansi_bold()
    };

    for m in matches {
        style.write_line(m, w)?;
    }
    w.flush()?;
    Ok(())
}

/// A JSON array of [`MatchRecord`]s.
fn write_json<W: Write>(matches: &[FuzzyMatch], args: &FzArgs, w: &mut W) -> Result<()> {
    let records: Vec<MatchRecord<'_>> = matches.iter().map(MatchRecord::from).collect();

    if args.pretty {
        serde_json::to_writer_pretty(&mut *w, &records)?;
    } else {
        serde_json::to_writer(&mut *w, &records)?;
    }
    writeln!(w)?;
    w.flush()?;
    Ok(())
}
