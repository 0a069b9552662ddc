use serde::Deserialize;
use serde_json::Value;

use super::args::{ExecuteArgs, FileArgs, SearchArgs};

/// Tools whose primary argument is shown next to the tool name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownTool {
    Glob,
    Grep,
    Bash,
    Read,
    Write,
    Edit,
}

impl KnownTool {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Glob" => Some(KnownTool::Glob),
            "Grep" => Some(KnownTool::Grep),
            "Bash" => Some(KnownTool::Bash),
            "Read" => Some(KnownTool::Read),
            "Write" => Some(KnownTool::Write),
            "Edit" => Some(KnownTool::Edit),
            _ => None,
        }
    }

    /// Name of the `input` member shown for this tool
    pub fn param_key(self) -> &'static str {
        match self {
            KnownTool::Glob | KnownTool::Grep => "pattern",
            KnownTool::Bash => "command",
            KnownTool::Read | KnownTool::Write | KnownTool::Edit => "file_path",
        }
    }

    /// Pull the primary argument out of a raw `input` value.
    ///
    /// Returns `None` when the member is missing or not a string, or when
    /// `input` is not an object.
    pub fn param_value(self, input: &Value) -> Option<String> {
        match self {
            KnownTool::Glob | KnownTool::Grep => {
                SearchArgs::deserialize(input).ok()?.pattern
            }
            KnownTool::Bash => ExecuteArgs::deserialize(input).ok()?.command,
            KnownTool::Read | KnownTool::Write | KnownTool::Edit => {
                FileArgs::deserialize(input).ok()?.file_path
            }
        }
    }
}

/// Primary argument of a tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolParam {
    pub key: &'static str,
    pub value: String,
}

/// Extract the displayed parameter for a tool call, if the tool is known
/// and its argument is present.
pub fn extract_param(name: &str, input: &Value) -> Option<ToolParam> {
    let tool = KnownTool::from_name(name)?;
    let value = tool.param_value(input)?;
    Some(ToolParam {
        key: tool.param_key(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_param_table() {
        let cases = [
            ("Glob", json!({"pattern": "**/*.go"}), "pattern", "**/*.go"),
            ("Grep", json!({"pattern": "fn main", "path": "src"}), "pattern", "fn main"),
            ("Bash", json!({"command": "ls -la", "description": "list"}), "command", "ls -la"),
            ("Read", json!({"file_path": "/tmp/a.rs"}), "file_path", "/tmp/a.rs"),
            ("Write", json!({"file_path": "/tmp/b.rs", "content": "x"}), "file_path", "/tmp/b.rs"),
            ("Edit", json!({"file_path": "/tmp/c.rs", "old_string": "a"}), "file_path", "/tmp/c.rs"),
        ];
        for (name, input, key, value) in cases {
            let param = extract_param(name, &input).unwrap();
            assert_eq!(param.key, key, "{}", name);
            assert_eq!(param.value, value, "{}", name);
        }
    }

    #[test]
    fn test_extract_param_unknown_tool() {
        assert_eq!(extract_param("TodoWrite", &json!({"pattern": "x"})), None);
        assert_eq!(extract_param("glob", &json!({"pattern": "x"})), None);
    }

    #[test]
    fn test_extract_param_missing_field() {
        assert_eq!(extract_param("Read", &json!({"path": "/tmp/a.rs"})), None);
        assert_eq!(extract_param("Bash", &json!({})), None);
    }

    #[test]
    fn test_extract_param_wrong_type() {
        assert_eq!(extract_param("Glob", &json!({"pattern": 42})), None);
        assert_eq!(extract_param("Bash", &json!("ls")), None);
        assert_eq!(extract_param("Edit", &Value::Null), None);
    }
}
