//! ccfilter: turn the NDJSON event stream printed by
//! `claude -p --output-format=stream-json` into a readable transcript.
//!
//! Lines are read one at a time from stdin, classified by their `type` tag,
//! filtered against the configuration, and rendered as colored text. A line
//! that fails to parse or render produces one warning on stderr and the stream
//! carries on.

mod args;
mod commands;
pub mod config;
pub mod filter;
pub mod logging;
pub mod presentation;
pub mod streaming;
pub mod types;

pub use args::Cli;
pub use commands::run;
pub use config::{ConfigError, FilterConfig, Invocation, parse_args};
pub use streaming::{StreamError, StreamStats, process_stream};
