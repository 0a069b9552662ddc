use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

use crate::error::{Error, Result};

/// Event kind, read from the top-level `type` tag of a stream line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    System,
    Assistant,
    User,
    Result,
    /// Any other tag. An absent tag is `Other("")`.
    Other(String),
}

impl EventKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "system" => EventKind::System,
            "assistant" => EventKind::Assistant,
            "user" => EventKind::User,
            "result" => EventKind::Result,
            other => EventKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EventKind::System => "system",
            EventKind::Assistant => "assistant",
            EventKind::User => "user",
            EventKind::Result => "result",
            EventKind::Other(tag) => tag,
        }
    }

    /// True when the line carried no `type` tag at all
    pub fn is_empty(&self) -> bool {
        matches!(self, EventKind::Other(tag) if tag.is_empty())
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a stream line by its `type` tag.
///
/// Only the root object's `type` member is decoded; every other member is
/// skipped. A line that is not a JSON object, or whose `type` is not a string,
/// is an error.
pub fn classify(line: &[u8]) -> Result<EventKind> {
    let envelope: Envelope = serde_json::from_slice(line).map_err(Error::Classify)?;
    Ok(EventKind::from_tag(envelope.tag.as_deref().unwrap_or("")))
}

struct Envelope {
    tag: Option<String>,
}

impl<'de> Deserialize<'de> for Envelope {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EnvelopeVisitor;

        impl<'de> Visitor<'de> for EnvelopeVisitor {
            type Value = Envelope;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<M>(self, mut map: M) -> std::result::Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut tag = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == "type" {
                        tag = map.next_value::<Option<String>>()?;
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(Envelope { tag })
            }
        }

        deserializer.deserialize_map(EnvelopeVisitor)
    }
}
