use std::fmt;
use std::io;

/// Terminal stream failures. Per-line content errors never end up here.
#[derive(Debug)]
pub enum StreamError {
    /// Reading the input sink failed
    Input(io::Error),

    /// Writing a fragment to the output sink failed
    Output(io::Error),
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::Input(err) => write!(f, "failed to read input: {}", err),
            StreamError::Output(err) => write!(f, "failed to write output: {}", err),
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamError::Input(err) | StreamError::Output(err) => Some(err),
        }
    }
}
