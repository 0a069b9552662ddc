use ccfilter_types::{AssistantEvent, ContentItem};

use super::TextRenderer;
use crate::filter::admit_item;
use crate::presentation::formatters::color::Color;
use crate::presentation::formatters::tool::format_tool_param;
use crate::types::InfoLevel;

impl TextRenderer<'_> {
    pub(super) fn render_assistant(&self, event: &AssistantEvent) -> String {
        let mut output = String::new();

        for item in &event.message.content {
            if !admit_item(item.content_type(), self.config) {
                continue;
            }
            match item {
                ContentItem::Text { text } => {
                    output.push_str(text);
                    output.push('\n');
                }
                ContentItem::ToolUse { name, input, .. } => {
                    output.push_str(&self.paint("→", Color::Cyan));
                    output.push(' ');
                    output.push_str(&self.paint(name, Color::Blue));
                    if self.config.info_level != InfoLevel::Minimal {
                        output.push_str(&format_tool_param(name, input));
                    }
                    output.push('\n');
                }
                ContentItem::Unknown(_) => {}
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilterConfig;
    use ccfilter_types::{EventKind, StreamEvent};

    fn render(line: &str, config: &FilterConfig) -> String {
        let event = StreamEvent::decode(&EventKind::Assistant, line.as_bytes()).unwrap();
        TextRenderer::new(config).render(&event)
    }

    fn plain() -> FilterConfig {
        FilterConfig {
            use_color: false,
            ..FilterConfig::default()
        }
    }

    const GLOB_LINE: &str = r#"{"type":"assistant","message":{"content":[{"type":"tool_use","id":"t1","name":"Glob","input":{"pattern":"**/*.go"}}]}}"#;

    #[test]
    fn test_text_items_verbatim() {
        let line = r#"{"type":"assistant","message":{"content":[{"type":"text","text":"Line 1\nLine 2"},{"type":"text","text":"こんにちは、世界！"}]}}"#;
        assert_eq!(render(line, &plain()), "Line 1\nLine 2\nこんにちは、世界！\n");
    }

    #[test]
    fn test_tool_use_with_param() {
        assert_eq!(render(GLOB_LINE, &plain()), "→ Glob: pattern=\"**/*.go\"\n");
    }

    #[test]
    fn test_tool_use_minimal_has_no_param() {
        let config = FilterConfig {
            info_level: InfoLevel::Minimal,
            ..plain()
        };
        assert_eq!(render(GLOB_LINE, &config), "→ Glob\n");
    }

    #[test]
    fn test_unknown_tool_has_no_param() {
        let line = r#"{"type":"assistant","message":{"content":[{"type":"tool_use","id":"t1","name":"TodoWrite","input":{"todos":[]}}]}}"#;
        assert_eq!(render(line, &plain()), "→ TodoWrite\n");
    }

    #[test]
    fn test_tool_use_colored() {
        let config = FilterConfig::default();
        assert_eq!(
            render(GLOB_LINE, &config),
            "\x1b[36m→\x1b[0m \x1b[34mGlob\x1b[0m: pattern=\"**/*.go\"\n"
        );
    }

    #[test]
    fn test_item_gate_inside_mixed_message() {
        let line = r#"{"type":"assistant","message":{"content":[{"type":"text","text":"Searching..."},{"type":"tool_use","id":"t1","name":"Bash","input":{"command":"ls"}},{"type":"thinking","thinking":"..."}]}}"#;

        let tools_only = FilterConfig {
            show_assistant: false,
            ..plain()
        };
        assert_eq!(render(line, &tools_only), "→ Bash: command=\"ls\"\n");

        let text_only = FilterConfig {
            show_tools: false,
            ..plain()
        };
        assert_eq!(render(line, &text_only), "Searching...\n");

        assert_eq!(
            render(line, &plain()),
            "Searching...\n→ Bash: command=\"ls\"\n"
        );
    }

    #[test]
    fn test_empty_content_renders_nothing() {
        let line = r#"{"type":"assistant","message":{"content":[]}}"#;
        assert_eq!(render(line, &plain()), "");
    }
}
