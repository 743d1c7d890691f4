//! Marking matched spans in the candidate text.

use std::io::{self, Write};

use crate::matching::FuzzyMatch;

/// ANSI bold.
pub const ANSI_BOLD: &str = "\x1b[1m";
/// ANSI reset.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Markers written around each matched span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightStyle {
    /// Written before a span.
    pub open: String,
    /// Written after a span.
    pub close: String,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self::ansi_bold()
    }
}

impl HighlightStyle {
    /// Create a style with custom markers.
    pub fn new<O: Into<String>, C: Into<String>>(open: O, close: C) -> Self {
        HighlightStyle {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Bold terminal text.
    pub fn ansi_bold() -> Self {
        Self::new(ANSI_BOLD, ANSI_RESET)
    }

    /// No markers at all; renders the candidate unchanged.
    pub fn plain() -> Self {
        Self::new("", "")
    }

    /// Render `m`'s input with every span wrapped in the markers.
    pub fn render(&self, m: &FuzzyMatch) -> String {
        let input = m.input();
        let mut out = String::with_capacity(
            input.len() + m.spans().len() * (self.open.len() + self.close.len()),
        );

        // Span positions are characters; walk the byte offsets alongside.
        let byte_offsets: Vec<usize> = input
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(input.len()))
            .collect();
        let byte_at = |pos: usize| byte_offsets[pos.min(byte_offsets.len() - 1)];

        let mut written = 0;
        for span in m.spans() {
            let start = byte_at(span.start);
            let end = byte_at(span.end);
            if start < written {
                continue;
            }
            out.push_str(&input[written..start]);
            out.push_str(&self.open);
            out.push_str(&input[start..end]);
            out.push_str(&self.close);
            written = end;
        }
        out.push_str(&input[written..]);
        out
    }

    /// Write the rendered match followed by a newline.
    pub fn write_line<W: Write>(&self, m: &FuzzyMatch, w: &mut W) -> io::Result<()> {
        writeln!(w, "{}", self.render(m))
    }
}
