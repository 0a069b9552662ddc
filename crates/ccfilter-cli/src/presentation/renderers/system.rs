use ccfilter_types::SystemEvent;

use super::TextRenderer;
use crate::presentation::formatters::color::Color;
use crate::types::InfoLevel;

impl TextRenderer<'_> {
    pub(super) fn render_system(&self, event: &SystemEvent) -> String {
        let mut header = String::from("⚙ system");
        if !event.subtype.is_empty() {
            header.push_str(&format!(" ({})", event.subtype));
        }

        let level = self.config.info_level;
        let mut fields: Vec<(&str, &str)> = Vec::new();
        if level != InfoLevel::Minimal {
            fields.push(("model", event.model.as_str()));
            fields.push(("cwd", event.cwd.as_str()));
        }
        if level == InfoLevel::Verbose {
            fields.push(("session", event.session_id.as_str()));
            fields.push(("version", event.claude_code_version.as_str()));
        }
        for (key, value) in fields {
            if !value.is_empty() {
                header.push_str(&format!(" {}={}", key, value));
            }
        }

        let mut output = self.paint(&header, Color::Gray);
        output.push('\n');
        output
    }
}
