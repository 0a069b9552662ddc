//! Filter configuration.
//!
//! Built once from command-line tokens and read-only afterwards. The gate and
//! every renderer take it by reference.

use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::fmt;

use crate::args::Cli;
use crate::types::{InfoLevel, OutputFormat};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub show_system: bool,
    pub show_assistant: bool,
    pub show_tools: bool,
    pub show_result: bool,
    pub info_level: InfoLevel,
    pub show_cost: bool,
    pub show_usage: bool,
    pub show_timing: bool,
    pub format: OutputFormat,
    pub use_color: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            show_system: false,
            show_assistant: true,
            show_tools: true,
            show_result: true,
            info_level: InfoLevel::Standard,
            show_cost: false,
            show_usage: false,
            show_timing: false,
            format: OutputFormat::Text,
            use_color: true,
        }
    }
}

impl FilterConfig {
    /// Apply parsed flags on top of the defaults.
    ///
    /// Mode flags are evaluated in a fixed order: `--all` wins outright;
    /// otherwise `--system` is additive and `--assistant`, `--tools`,
    /// `--result` are applied in that order, so the last one present decides.
    pub fn from_cli(cli: &Cli, no_color_env: bool) -> Self {
        let mut config = Self::default();

        if cli.all {
            config.show_system = true;
            config.show_assistant = true;
            config.show_tools = true;
            config.show_result = true;
        } else {
            if cli.system {
                config.show_system = true;
            }
            if cli.assistant {
                config.show_assistant = true;
                config.show_tools = false;
                config.show_result = false;
            }
            if cli.tools {
                config.show_assistant = false;
                config.show_tools = true;
                config.show_result = false;
            }
            if cli.result {
                config.show_assistant = false;
                config.show_tools = false;
                config.show_result = true;
            }
        }

        if cli.minimal {
            config.info_level = InfoLevel::Minimal;
        } else if cli.verbose {
            config.info_level = InfoLevel::Verbose;
        }

        config.show_cost = cli.show_cost;
        config.show_usage = cli.show_usage;
        config.show_timing = cli.show_timing;
        config.format = cli.format;
        config.use_color = cli.color_choice().resolve(no_color_env);

        config
    }
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Stream with this configuration
    Run(FilterConfig),
    /// Print this text (help or version) to the diagnostic sink and exit cleanly
    Info(String),
}

#[derive(Debug)]
pub enum ConfigError {
    /// Unknown flag or out-of-range value (e.g. `--format=yaml`)
    Args(clap::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Args(err) => {
                let rendered = err.render().to_string();
                let message = rendered.trim_start_matches("error: ").trim_end();
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Args(err) => Some(err),
        }
    }
}

/// Build a configuration from command-line tokens.
///
/// The first token is the program name, as in `std::env::args_os()`.
/// `no_color_env` reports whether `NO_COLOR` is set; it only matters when
/// neither `--color` nor `--no-color` is given.
pub fn parse_args<I, T>(tokens: I, no_color_env: bool) -> Result<Invocation, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(tokens) {
        Ok(cli) => Ok(Invocation::Run(FilterConfig::from_cli(&cli, no_color_env))),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                Ok(Invocation::Info(err.render().to_string()))
            }
            _ => Err(ConfigError::Args(err)),
        },
    }
}
