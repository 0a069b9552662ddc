//! Streaming driver: reads NDJSON lines and writes rendered fragments.
//!
//! Stateless per line. Malformed lines become one warning on the diagnostic
//! sink; only I/O failures on the input or output sink end the stream.

mod driver;
mod error;

pub use driver::{StreamStats, process_stream};
pub use error::StreamError;
