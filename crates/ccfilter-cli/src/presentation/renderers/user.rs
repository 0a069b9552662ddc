use ccfilter_types::{ToolResult, UserContent, UserEvent};

use super::TextRenderer;
use crate::presentation::formatters::color::Color;
use crate::presentation::formatters::text::{first_line, truncate_lines};
use crate::types::InfoLevel;

/// Lines of tool output kept at the standard level
const STANDARD_RESULT_LINES: usize = 5;

impl TextRenderer<'_> {
    pub(super) fn render_user(&self, event: &UserEvent) -> String {
        let mut output = String::new();

        for item in &event.message.content {
            if let UserContent::ToolResult(result) = item {
                self.render_tool_result(result, &mut output);
            }
        }

        output
    }

    fn render_tool_result(&self, result: &ToolResult, output: &mut String) {
        output.push_str(&self.paint("←", Color::Cyan));
        output.push(' ');
        if result.is_error {
            output.push_str(&self.paint("Error:", Color::Red));
            output.push(' ');
        }

        let content = result.content.as_str();
        match self.config.info_level {
            InfoLevel::Minimal => output.push_str(first_line(content)),
            InfoLevel::Standard => {
                // A trailing newline does not start another line of output.
                let content = content.strip_suffix('\n').unwrap_or(content);
                output.push_str(&truncate_lines(content, Some(STANDARD_RESULT_LINES)));
            }
            InfoLevel::Verbose => output.push_str(content),
        }
        output.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilterConfig;
    use ccfilter_types::{EventKind, StreamEvent};

    fn render(line: &str, info_level: InfoLevel) -> String {
        let config = FilterConfig {
            info_level,
            use_color: false,
            ..FilterConfig::default()
        };
        let event = StreamEvent::decode(&EventKind::User, line.as_bytes()).unwrap();
        TextRenderer::new(&config).render(&event)
    }

    const SEVEN_LINES: &str = r#"{"type":"user","message":{"content":[{"type":"tool_result","tool_use_id":"t1","content":"Line1\nLine2\nLine3\nLine4\nLine5\nLine6\nLine7"}]}}"#;

    #[test]
    fn test_standard_truncates_to_five_lines() {
        assert_eq!(
            render(SEVEN_LINES, InfoLevel::Standard),
            "← Line1\nLine2\nLine3\nLine4\nLine5\n... (2 more lines)\n"
        );
    }

    #[test]
    fn test_verbose_keeps_everything() {
        let output = render(SEVEN_LINES, InfoLevel::Verbose);
        assert_eq!(output, "← Line1\nLine2\nLine3\nLine4\nLine5\nLine6\nLine7\n");
        assert!(!output.contains("more lines"));
    }

    #[test]
    fn test_minimal_keeps_first_line() {
        assert_eq!(render(SEVEN_LINES, InfoLevel::Minimal), "← Line1\n");
    }

    #[test]
    fn test_error_result() {
        let line = r#"{"type":"user","message":{"content":[{"type":"tool_result","tool_use_id":"t1","is_error":true,"content":"permission denied"}]}}"#;
        assert_eq!(
            render(line, InfoLevel::Standard),
            "← Error: permission denied\n"
        );
    }

    #[test]
    fn test_error_result_colored() {
        let line = r#"{"type":"user","message":{"content":[{"type":"tool_result","tool_use_id":"t1","is_error":true,"content":"nope"}]}}"#;
        let config = FilterConfig::default();
        let event = StreamEvent::decode(&EventKind::User, line.as_bytes()).unwrap();
        assert_eq!(
            TextRenderer::new(&config).render(&event),
            "\x1b[36m←\x1b[0m \x1b[31mError:\x1b[0m nope\n"
        );
    }

    #[test]
    fn test_trailing_newline_is_not_an_extra_line() {
        let line = r#"{"type":"user","message":{"content":[{"type":"tool_result","tool_use_id":"t1","content":"1\n2\n3\n4\n5\n"}]}}"#;
        assert_eq!(render(line, InfoLevel::Standard), "← 1\n2\n3\n4\n5\n");
    }

    #[test]
    fn test_multiple_results_and_prompts() {
        let line = r#"{"type":"user","message":{"content":[{"type":"text","text":"ignored"},{"type":"tool_result","tool_use_id":"a","content":"first"},{"type":"tool_result","tool_use_id":"b","content":""}]}}"#;
        assert_eq!(render(line, InfoLevel::Standard), "← first\n← \n");
    }

    #[test]
    fn test_plain_prompt_renders_nothing() {
        let line = r#"{"type":"user","message":{"role":"user","content":"do the thing"}}"#;
        assert_eq!(render(line, InfoLevel::Verbose), "");
    }
}
