use ccfilter_types::classify;
use std::io::{BufRead, Write};
use tracing::{debug, trace};

use super::error::StreamError;
use crate::config::FilterConfig;
use crate::filter::admit;
use crate::presentation::render_line;

/// Per-stream counters, reported at debug level when the stream ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Lines read, including empty ones
    pub lines: usize,
    /// Lines that produced a non-empty fragment
    pub rendered: usize,
    /// Lines dropped silently: empty, filtered, or rendering to nothing
    pub skipped: usize,
    /// Lines that produced a warning
    pub warnings: usize,
}

enum LineOutcome {
    Rendered(String),
    Skipped(&'static str),
    Warning(String),
}

/// Read `input` to EOF, writing one fragment per surviving line to `output`.
///
/// Parse and render failures are reported on `diagnostics` and the line is
/// dropped. Failures to write diagnostics are ignored; failures to read the
/// input or write the output end the stream.
pub fn process_stream<R, W, D>(
    mut input: R,
    output: &mut W,
    diagnostics: &mut D,
    config: &FilterConfig,
) -> Result<StreamStats, StreamError>
where
    R: BufRead,
    W: Write,
    D: Write,
{
    let mut stats = StreamStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = input.read_until(b'\n', &mut buf).map_err(StreamError::Input)?;
        if read == 0 {
            break;
        }
        stats.lines += 1;

        match process_line(strip_line_ending(&buf), config) {
            LineOutcome::Rendered(fragment) => {
                output
                    .write_all(fragment.as_bytes())
                    .and_then(|()| output.flush())
                    .map_err(StreamError::Output)?;
                stats.rendered += 1;
            }
            LineOutcome::Skipped(reason) => {
                trace!(line = stats.lines, reason, "skipped line");
                stats.skipped += 1;
            }
            LineOutcome::Warning(message) => {
                let _ = writeln!(diagnostics, "Warning: {}", message);
                stats.warnings += 1;
            }
        }
    }

    debug!(?stats, "input exhausted");
    Ok(stats)
}

fn process_line(line: &[u8], config: &FilterConfig) -> LineOutcome {
    if line.is_empty() {
        return LineOutcome::Skipped("empty");
    }

    let kind = match classify(line) {
        Ok(kind) => kind,
        Err(err) => return LineOutcome::Warning(format!("failed to parse JSON: {}", err)),
    };

    if !admit(&kind, config) {
        return LineOutcome::Skipped("filtered");
    }

    match render_line(&kind, line, config) {
        Ok(fragment) if fragment.is_empty() => LineOutcome::Skipped("nothing to render"),
        Ok(fragment) => LineOutcome::Rendered(fragment),
        Err(err) => LineOutcome::Warning(format!("failed to format message: {}", err)),
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
