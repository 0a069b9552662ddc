use std::fmt;

/// Result type for ccfilter-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding a stream line
#[derive(Debug)]
pub enum Error {
    /// The line is not a JSON object with a readable `type` tag
    Classify(serde_json::Error),

    /// The line was classified but its payload does not match the event schema
    Decode {
        kind: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Classify(err) => write!(f, "{}", err),
            Error::Decode { kind, source } => write!(f, "{} event: {}", kind, source),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Classify(err) => Some(err),
            Error::Decode { source, .. } => Some(source),
        }
    }
}
