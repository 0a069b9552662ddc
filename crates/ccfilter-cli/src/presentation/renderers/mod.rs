mod assistant;
mod result;
mod system;
mod user;

use ccfilter_types::{EventKind, StreamEvent};
use tracing::debug;

use super::formatters::color::{Color, paint};
use crate::config::FilterConfig;
use crate::types::OutputFormat;

/// Renders events as plain text, optionally colored.
///
/// `json` and `compact` formats are accepted on the command line but have no
/// renderer of their own; they render through this one.
pub struct TextRenderer<'a> {
    config: &'a FilterConfig,
}

impl<'a> TextRenderer<'a> {
    pub fn new(config: &'a FilterConfig) -> Self {
        Self { config }
    }

    pub fn render(&self, event: &StreamEvent) -> String {
        match event {
            StreamEvent::System(event) => self.render_system(event),
            StreamEvent::Assistant(event) => self.render_assistant(event),
            StreamEvent::User(event) => self.render_user(event),
            StreamEvent::Result(event) => self.render_result(event),
            StreamEvent::Unknown => String::new(),
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        paint(text, color, self.config.use_color)
    }
}

/// Decode an admitted line and render it.
///
/// Fails only when the payload does not match the schema of its kind.
pub fn render_line(
    kind: &EventKind,
    line: &[u8],
    config: &FilterConfig,
) -> ccfilter_types::Result<String> {
    let event = StreamEvent::decode(kind, line)?;
    if config.format != OutputFormat::Text {
        debug!(format = %config.format, "no dedicated renderer, rendering as text");
    }
    Ok(TextRenderer::new(config).render(&event))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_line_rejects_schema_mismatch() {
        let config = FilterConfig::default();
        let line = br#"{"type":"result","num_turns":"three"}"#;
        assert!(render_line(&EventKind::Result, line, &config).is_err());
    }

    #[test]
    fn test_render_line_unknown_kind_is_empty() {
        let config = FilterConfig::default();
        let kind = EventKind::Other("stream_event".to_string());
        let rendered = render_line(&kind, br#"{"type":"stream_event"}"#, &config).unwrap();
        assert_eq!(rendered, "");
    }

    #[test]
    fn test_json_format_renders_as_text() {
        let config = FilterConfig {
            format: OutputFormat::Json,
            use_color: false,
            ..FilterConfig::default()
        };
        let line = br#"{"type":"assistant","message":{"content":[{"type":"text","text":"Hello"}]}}"#;
        assert_eq!(
            render_line(&EventKind::Assistant, line, &config).unwrap(),
            "Hello\n"
        );
    }
}
