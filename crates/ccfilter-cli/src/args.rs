use crate::types::{ColorChoice, OutputFormat};
use clap::Parser;

const EXAMPLES_HELP: &str = r#"Usage with Claude:
  claude -p --verbose --output-format=stream-json <prompt> | ccfilter [options]

Examples:
  # Default: show assistant messages, tools, and results
  claude -p --verbose --output-format=stream-json "hello" | ccfilter

  # Show only tool usage
  claude -p --verbose --output-format=stream-json "list files" | ccfilter --tools

  # Minimal output
  claude -p --verbose --output-format=stream-json "hello" | ccfilter --minimal

  # Verbose with cost and timing
  claude -p --verbose --output-format=stream-json "hello" | ccfilter --verbose --show-cost --show-timing"#;

#[derive(Debug, Parser)]
#[command(name = "ccfilter")]
#[command(about = "Filter Claude CLI stream-json output for human readability", long_about = None)]
#[command(version, after_help = EXAMPLES_HELP)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Show system messages
    #[arg(long, help_heading = "Message Type Filters")]
    pub system: bool,

    /// Show only assistant messages
    #[arg(long, help_heading = "Message Type Filters")]
    pub assistant: bool,

    /// Show only tool messages (tool_use and tool_result)
    #[arg(long, help_heading = "Message Type Filters")]
    pub tools: bool,

    /// Show only result messages
    #[arg(long, help_heading = "Message Type Filters")]
    pub result: bool,

    /// Show all messages
    #[arg(long, help_heading = "Message Type Filters")]
    pub all: bool,

    /// Show minimal information
    #[arg(short, long, help_heading = "Information Level")]
    pub minimal: bool,

    /// Show verbose information
    #[arg(short, long, help_heading = "Information Level")]
    pub verbose: bool,

    /// Always show cost information
    #[arg(long, help_heading = "Additional Information")]
    pub show_cost: bool,

    /// Always show token usage
    #[arg(long, help_heading = "Additional Information")]
    pub show_usage: bool,

    /// Always show timing information
    #[arg(long, help_heading = "Additional Information")]
    pub show_timing: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help_heading = "Output Format")]
    pub format: OutputFormat,

    /// Force enable color output
    #[arg(long, help_heading = "Output Format")]
    pub color: bool,

    /// Disable color output
    #[arg(long, help_heading = "Output Format")]
    pub no_color: bool,
}

impl Cli {
    /// `--no-color` wins over `--color` when both are given
    pub fn color_choice(&self) -> ColorChoice {
        if self.no_color {
            ColorChoice::Never
        } else if self.color {
            ColorChoice::Always
        } else {
            ColorChoice::Auto
        }
    }
}
