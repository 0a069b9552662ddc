use ccfilter_types::ResultEvent;

use super::TextRenderer;
use crate::presentation::formatters::color::Color;
use crate::presentation::formatters::number::{format_compact, format_cost_usd, format_duration_ms};
use crate::types::InfoLevel;

const SEPARATOR_WIDTH: usize = 40;

impl TextRenderer<'_> {
    pub(super) fn render_result(&self, event: &ResultEvent) -> String {
        let separator = self.paint(&"━".repeat(SEPARATOR_WIDTH), Color::Gray);
        let mut output = String::new();

        output.push('\n');
        output.push_str(&separator);
        output.push('\n');

        if event.is_error {
            output.push_str(&self.paint(&event.result, Color::Red));
        } else {
            output.push_str(&event.result);
        }
        output.push('\n');

        if self.config.info_level != InfoLevel::Minimal {
            output.push('\n');
            output.push_str(&self.paint(&self.format_metrics(event), Color::Gray));
            output.push('\n');
        }

        output.push_str(&separator);
        output.push('\n');
        output
    }

    fn format_metrics(&self, event: &ResultEvent) -> String {
        let config = self.config;
        let mut parts = Vec::new();

        if config.show_timing || config.info_level.includes_metrics() {
            parts.push(format!("Duration: {}", format_duration_ms(event.duration_ms)));
        }
        if config.show_cost || config.info_level.includes_metrics() {
            parts.push(format!("Cost: {}", format_cost_usd(event.total_cost_usd)));
        }
        parts.push(format!("Turns: {}", event.num_turns));

        if config.show_usage
            && let Some(usage) = &event.usage
        {
            parts.push(format!(
                "Tokens: {} in / {} out",
                format_compact(usage.total_input()),
                format_compact(usage.output_tokens)
            ));
        }

        parts.join(" | ")
    }
}
