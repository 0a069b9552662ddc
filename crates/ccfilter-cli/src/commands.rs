use crate::config::{Invocation, parse_args};
use crate::streaming::process_stream;
use anyhow::Result;
use std::ffi::OsString;
use std::io::{self, Write};
use tracing::debug;

/// `NO_COLOR` counts only when set to a non-empty value.
fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}

/// Parse `args`, then filter stdin to stdout until EOF.
///
/// Help and version text go to stderr so that stdout carries nothing but the
/// transcript.
pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let config = match parse_args(args, no_color_env())? {
        Invocation::Run(config) => config,
        Invocation::Info(text) => {
            // Same policy as the diagnostic sink: a failed write there is ignored.
            let mut stderr = io::stderr().lock();
            let _ = stderr.write_all(text.as_bytes());
            return Ok(());
        }
    };
    debug!(?config, "configuration resolved");

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    let stats = process_stream(stdin, &mut stdout, &mut stderr, &config)?;
    debug!(
        lines = stats.lines,
        rendered = stats.rendered,
        skipped = stats.skipped,
        warnings = stats.warnings,
        "stream finished"
    );

    Ok(())
}
