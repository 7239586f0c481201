/// Stream scanning.
///
/// Drives the line matcher across one input stream, accumulates the
/// per-stream result, and performs the output-mode-dependent printing.
/// Streams are processed strictly sequentially; output order mirrors input
/// line order exactly.
use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::Result;
use crate::matcher::LineMatcher;
use crate::options::Options;

/// Per-line match decision, paired with what printing needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome<'a> {
    pub selected: bool,
    /// 1-based position of the line within its stream.
    pub line_number: u64,
    pub text: &'a str,
}

/// Aggregate outcome of scanning one input stream.
///
/// Created when a scan starts, finalized at end of stream, and consumed by
/// the driver to decide filename printing and the process exit status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamResult {
    /// Did any line in this stream get selected?
    pub matched_any: bool,
    /// Number of selected lines. Exact whenever count mode is active; with
    /// early exit it stops at 1.
    pub match_count: u64,
}

/// Scan one stream line by line, printing per the output mode.
///
/// A line that cannot be read (including invalid UTF-8 from the underlying
/// reader) is a fatal I/O error, never a silently truncated line — unless
/// error suppression is on, in which case the stream is treated as having
/// ended at the failure point with whatever state accumulated so far.
///
/// Scanning stops at the first selected line only when
/// [`Options::stop_after_first_match`] allows it; count mode always scans
/// to completion so the reported count is exact.
pub fn scan_stream<R: BufRead, W: Write>(
    reader: R,
    matcher: &LineMatcher,
    options: &Options,
    out: &mut W,
) -> Result<StreamResult> {
    let mut result = StreamResult::default();

    for (index, line) in reader.lines().enumerate() {
        let text = match line {
            Ok(text) => text,
            Err(err) if options.suppress_errors => {
                debug!("read error suppressed, stream treated as ended: {err}");
                break;
            }
            Err(err) => return Err(err.into()),
        };

        let outcome = MatchOutcome {
            selected: matcher.is_selected(&text),
            line_number: index as u64 + 1,
            text: &text,
        };
        if !outcome.selected {
            continue;
        }

        result.match_count += 1;
        result.matched_any = true;

        if options.print_lines() {
            write_selected(out, options, &outcome)?;
        }
        if options.stop_after_first_match() {
            break;
        }
    }

    if options.print_count() {
        writeln!(out, "{}", result.match_count)?;
    }

    debug!(
        "stream scanned: matched_any={} match_count={}",
        result.matched_any, result.match_count
    );
    Ok(result)
}

/// Emit one selected line: `[<lineNumber>:]<text>`, text verbatim.
fn write_selected<W: Write>(out: &mut W, options: &Options, outcome: &MatchOutcome) -> Result<()> {
    if options.line_numbers {
        writeln!(out, "{}:{}", outcome.line_number, outcome.text)?;
    } else {
        writeln!(out, "{}", outcome.text)?;
    }
    Ok(())
}
