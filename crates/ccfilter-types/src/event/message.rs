use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::kind::EventKind;
use crate::error::{Error, Result};
use crate::util::nullable;

/// A fully decoded stream line
#[derive(Debug, Clone)]
pub enum StreamEvent {
    System(SystemEvent),
    Assistant(AssistantEvent),
    User(UserEvent),
    Result(ResultEvent),
    Unknown,
}

impl StreamEvent {
    /// Decode the full payload of a line whose kind is already known.
    ///
    /// Dispatches on the classified tag only; the payload schema is chosen
    /// by `kind`, never guessed from the fields present.
    ///
    /// The line goes through a `Value` first, so a repeated key keeps its
    /// last value instead of failing the line.
    pub fn decode(kind: &EventKind, line: &[u8]) -> Result<Self> {
        if let EventKind::Other(_) = kind {
            return Ok(StreamEvent::Unknown);
        }
        let decode_err = |source| Error::Decode {
            kind: kind.to_string(),
            source,
        };

        let value: Value = serde_json::from_slice(line).map_err(decode_err)?;
        let decoded = match kind {
            EventKind::System => serde_json::from_value(value).map(StreamEvent::System),
            EventKind::Assistant => serde_json::from_value(value).map(StreamEvent::Assistant),
            EventKind::User => serde_json::from_value(value).map(StreamEvent::User),
            EventKind::Result => serde_json::from_value(value).map(StreamEvent::Result),
            EventKind::Other(_) => Ok(StreamEvent::Unknown),
        };
        decoded.map_err(decode_err)
    }
}

/// `system` event: session metadata, purely informational
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemEvent {
    #[serde(deserialize_with = "nullable")]
    pub subtype: String,
    #[serde(deserialize_with = "nullable")]
    pub cwd: String,
    #[serde(deserialize_with = "nullable")]
    pub session_id: String,
    #[serde(deserialize_with = "nullable")]
    pub model: String,
    #[serde(deserialize_with = "nullable")]
    pub claude_code_version: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssistantEvent {
    #[serde(deserialize_with = "nullable")]
    pub message: AssistantMessage,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssistantMessage {
    #[serde(deserialize_with = "nullable")]
    pub content: Vec<ContentItem>,
}

/// One element of an assistant message's `content` array
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawContentItem")]
pub enum ContentItem {
    Text {
        text: String,
    },
    ToolUse {
        id: String,
        name: String,
        /// Tool arguments, kept verbatim; interpreted lazily per tool name
        input: Value,
    },
    /// Any other sub-kind (`thinking`, `image`, ...) with its tag
    Unknown(String),
}

impl ContentItem {
    /// The item's `type` tag as it appeared on the wire
    pub fn content_type(&self) -> &str {
        match self {
            ContentItem::Text { .. } => "text",
            ContentItem::ToolUse { .. } => "tool_use",
            ContentItem::Unknown(tag) => tag,
        }
    }
}

/// Wire shape of a content item. Every member is optional so that an item
/// with a missing or unknown tag degrades to `ContentItem::Unknown` instead
/// of failing the whole line.
#[derive(Deserialize)]
#[serde(default)]
struct RawContentItem {
    #[serde(rename = "type", deserialize_with = "nullable")]
    kind: String,
    #[serde(deserialize_with = "nullable")]
    text: String,
    #[serde(deserialize_with = "nullable")]
    id: String,
    #[serde(deserialize_with = "nullable")]
    name: String,
    input: Value,
}

impl Default for RawContentItem {
    fn default() -> Self {
        Self {
            kind: String::new(),
            text: String::new(),
            id: String::new(),
            name: String::new(),
            input: Value::Null,
        }
    }
}

impl From<RawContentItem> for ContentItem {
    fn from(raw: RawContentItem) -> Self {
        match raw.kind.as_str() {
            "text" => ContentItem::Text { text: raw.text },
            "tool_use" => ContentItem::ToolUse {
                id: raw.id,
                name: raw.name,
                input: raw.input,
            },
            _ => ContentItem::Unknown(raw.kind),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserEvent {
    #[serde(deserialize_with = "nullable")]
    pub message: UserMessage,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserMessage {
    #[serde(deserialize_with = "deserialize_user_content")]
    pub content: Vec<UserContent>,
}

/// A user message is either a plain prompt string or an array of items.
/// Only the array form can carry tool results.
fn deserialize_user_content<'de, D>(deserializer: D) -> std::result::Result<Vec<UserContent>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrArray {
        String(String),
        Array(Vec<UserContent>),
    }

    match Option::<StringOrArray>::deserialize(deserializer)? {
        Some(StringOrArray::Array(items)) => Ok(items),
        Some(StringOrArray::String(_)) | None => Ok(Vec::new()),
    }
}

/// One element of a user message's `content` array
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawUserContent")]
pub enum UserContent {
    ToolResult(ToolResult),
    /// Any other item (prompt text, images) with its tag
    Other(String),
}

/// Output of a tool invocation, echoed back on a `user` event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolResult {
    pub tool_use_id: String,
    pub content: String,
    pub is_error: bool,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawUserContent {
    #[serde(rename = "type", deserialize_with = "nullable")]
    kind: String,
    #[serde(deserialize_with = "nullable")]
    tool_use_id: String,
    #[serde(deserialize_with = "nullable")]
    content: ToolResultContent,
    #[serde(deserialize_with = "nullable")]
    is_error: bool,
}

impl From<RawUserContent> for UserContent {
    fn from(raw: RawUserContent) -> Self {
        if raw.kind == "tool_result" {
            UserContent::ToolResult(ToolResult {
                tool_use_id: raw.tool_use_id,
                content: raw.content.into_text(),
                is_error: raw.is_error,
            })
        } else {
            UserContent::Other(raw.kind)
        }
    }
}

/// Tool result content: a plain string, or a list of text blocks
#[derive(Deserialize)]
#[serde(untagged)]
enum ToolResultContent {
    Text(String),
    Blocks(Vec<TextBlock>),
}

impl Default for ToolResultContent {
    fn default() -> Self {
        ToolResultContent::Text(String::new())
    }
}

impl ToolResultContent {
    fn into_text(self) -> String {
        match self {
            ToolResultContent::Text(text) => text,
            ToolResultContent::Blocks(blocks) => blocks
                .into_iter()
                .filter_map(|block| block.text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

#[derive(Deserialize)]
struct TextBlock {
    #[serde(default)]
    text: Option<String>,
}

/// `result` event: the final answer plus session metrics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultEvent {
    #[serde(deserialize_with = "nullable")]
    pub subtype: String,
    #[serde(deserialize_with = "nullable")]
    pub is_error: bool,
    #[serde(deserialize_with = "nullable")]
    pub result: String,
    #[serde(deserialize_with = "nullable")]
    pub duration_ms: i64,
    #[serde(deserialize_with = "nullable")]
    pub duration_api_ms: i64,
    #[serde(deserialize_with = "nullable")]
    pub total_cost_usd: f64,
    #[serde(deserialize_with = "nullable")]
    pub num_turns: i64,
    #[serde(deserialize_with = "nullable")]
    pub session_id: String,
    pub usage: Option<Usage>,
}

/// Token counts reported on the `result` event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    #[serde(deserialize_with = "nullable")]
    pub input_tokens: u64,
    #[serde(deserialize_with = "nullable")]
    pub output_tokens: u64,
    #[serde(deserialize_with = "nullable")]
    pub cache_creation_input_tokens: u64,
    #[serde(deserialize_with = "nullable")]
    pub cache_read_input_tokens: u64,
}

impl Usage {
    /// Input tokens including cache reads and writes
    pub fn total_input(&self) -> u64 {
        self.input_tokens
            .saturating_add(self.cache_creation_input_tokens)
            .saturating_add(self.cache_read_input_tokens)
    }
}
