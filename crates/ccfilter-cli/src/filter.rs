//! Filter gate.
//!
//! `admit` is the coarse line-level check; `admit_item` enforces the
//! per-item policy inside an admitted assistant line, which may mix text and
//! tool calls.

use ccfilter_types::EventKind;

use crate::config::FilterConfig;

pub fn admit(kind: &EventKind, config: &FilterConfig) -> bool {
    match kind {
        EventKind::System => config.show_system,
        EventKind::Assistant => config.show_assistant || config.show_tools,
        EventKind::User => config.show_tools,
        EventKind::Result => config.show_result,
        EventKind::Other(_) => false,
    }
}

pub fn admit_item(content_type: &str, config: &FilterConfig) -> bool {
    match content_type {
        "text" => config.show_assistant,
        "tool_use" => config.show_tools,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(system: bool, assistant: bool, tools: bool, result: bool) -> FilterConfig {
        FilterConfig {
            show_system: system,
            show_assistant: assistant,
            show_tools: tools,
            show_result: result,
            ..FilterConfig::default()
        }
    }

    #[test]
    fn test_admit_follows_show_flags() {
        let all = config(true, true, true, true);
        let none = config(false, false, false, false);
        for kind in [
            EventKind::System,
            EventKind::Assistant,
            EventKind::User,
            EventKind::Result,
        ] {
            assert!(admit(&kind, &all), "{}", kind);
            assert!(!admit(&kind, &none), "{}", kind);
        }
    }

    #[test]
    fn test_admit_assistant_when_only_tools_shown() {
        let tools_only = config(false, false, true, false);
        assert!(admit(&EventKind::Assistant, &tools_only));
        assert!(admit(&EventKind::User, &tools_only));
        assert!(!admit(&EventKind::Result, &tools_only));
    }

    #[test]
    fn test_admit_user_requires_tools() {
        let assistant_only = config(false, true, false, false);
        assert!(admit(&EventKind::Assistant, &assistant_only));
        assert!(!admit(&EventKind::User, &assistant_only));
    }

    #[test]
    fn test_admit_rejects_unknown_and_empty_kinds() {
        let all = config(true, true, true, true);
        assert!(!admit(&EventKind::Other("stream_event".to_string()), &all));
        assert!(!admit(&EventKind::Other(String::new()), &all));
    }

    #[test]
    fn test_admit_item() {
        let tools_only = config(false, false, true, false);
        assert!(!admit_item("text", &tools_only));
        assert!(admit_item("tool_use", &tools_only));

        let assistant_only = config(false, true, false, false);
        assert!(admit_item("text", &assistant_only));
        assert!(!admit_item("tool_use", &assistant_only));

        let all = config(true, true, true, true);
        assert!(!admit_item("thinking", &all));
        assert!(!admit_item("", &all));
    }
}
