use clap::ValueEnum;
use std::fmt;

/// How much of each event is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum InfoLevel {
    Minimal,
    #[default]
    Standard,
    Verbose,
}

impl InfoLevel {
    /// Standard and verbose levels include timing and cost metrics
    pub fn includes_metrics(self) -> bool {
        matches!(self, InfoLevel::Standard | InfoLevel::Verbose)
    }
}

impl fmt::Display for InfoLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfoLevel::Minimal => write!(f, "minimal"),
            InfoLevel::Standard => write!(f, "standard"),
            InfoLevel::Verbose => write!(f, "verbose"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Compact,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Compact => write!(f, "compact"),
        }
    }
}

/// Color preference as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    /// Neither `--color` nor `--no-color`: color unless `NO_COLOR` is set
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn resolve(self, no_color_env: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => !no_color_env,
        }
    }
}
