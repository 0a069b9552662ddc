use ccfilter_types::extract_param;
use serde_json::Value;

/// Summary suffix for a tool call: `: key="value"`.
///
/// The value is quoted as a Rust string literal, so quotes, backslashes and
/// control characters are escaped. Empty when the tool is not recognised or
/// its argument is missing.
pub fn format_tool_param(name: &str, input: &Value) -> String {
    match extract_param(name, input) {
        Some(param) => format!(": {}={:?}", param.key, param.value),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_glob_pattern() {
        assert_eq!(
            format_tool_param("Glob", &json!({"pattern": "**/*.go"})),
            r#": pattern="**/*.go""#
        );
    }

    #[test]
    fn test_format_escapes_value() {
        assert_eq!(
            format_tool_param("Bash", &json!({"command": "echo \"hi\"\nls\t-la"})),
            r#": command="echo \"hi\"\nls\t-la""#
        );
        assert_eq!(
            format_tool_param("Read", &json!({"file_path": "C:\\tmp\\a.rs"})),
            r#": file_path="C:\\tmp\\a.rs""#
        );
    }

    #[test]
    fn test_format_keeps_printable_unicode() {
        assert_eq!(
            format_tool_param("Write", &json!({"file_path": "/tmp/日本語.txt"})),
            ": file_path=\"/tmp/日本語.txt\""
        );
    }

    #[test]
    fn test_format_unknown_or_missing() {
        assert_eq!(format_tool_param("WebFetch", &json!({"url": "x"})), "");
        assert_eq!(format_tool_param("Grep", &json!({"query": "x"})), "");
    }
}
