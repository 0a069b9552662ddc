//! Fixtures for stream input.
//!
//! Line builders produce single NDJSON lines in the shape the Claude CLI
//! emits with `--output-format=stream-json`. Sample sessions are complete
//! recorded-style streams kept under `samples/`.

use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;

/// Sample stream files shipped with this crate.
pub struct SampleFiles {
    samples_dir: PathBuf,
}

impl Default for SampleFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFiles {
    pub fn new() -> Self {
        let samples_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples");
        Self { samples_dir }
    }

    pub fn path(&self, sample_name: &str) -> PathBuf {
        self.samples_dir.join(sample_name)
    }

    pub fn read(&self, sample_name: &str) -> Result<String> {
        let path = self.path(sample_name);
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read sample {}", path.display()))
    }
}

/// Join lines into an NDJSON document with a trailing newline.
pub fn ndjson<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line.as_ref());
        out.push('\n');
    }
    out
}

pub fn system_init(model: &str, cwd: &str) -> String {
    json!({
        "type": "system",
        "subtype": "init",
        "cwd": cwd,
        "session_id": "5f0c7d1e-0000-4000-8000-000000000001",
        "model": model,
        "tools": ["Bash", "Glob", "Grep", "Read", "Edit", "Write"],
        "claude_code_version": "1.0.98"
    })
    .to_string()
}

pub fn assistant_text(text: &str) -> String {
    assistant(json!([{ "type": "text", "text": text }]))
}

pub fn tool_use(id: &str, name: &str, input: Value) -> String {
    assistant(json!([{ "type": "tool_use", "id": id, "name": name, "input": input }]))
}

pub fn thinking(text: &str) -> String {
    assistant(json!([{ "type": "thinking", "thinking": text }]))
}

fn assistant(content: Value) -> String {
    json!({
        "type": "assistant",
        "message": {
            "id": "msg_01",
            "role": "assistant",
            "model": "claude-sonnet-4",
            "content": content
        },
        "session_id": "5f0c7d1e-0000-4000-8000-000000000001"
    })
    .to_string()
}

pub fn tool_result(tool_use_id: &str, content: &str, is_error: bool) -> String {
    json!({
        "type": "user",
        "message": {
            "role": "user",
            "content": [{
                "type": "tool_result",
                "tool_use_id": tool_use_id,
                "content": content,
                "is_error": is_error
            }]
        },
        "session_id": "5f0c7d1e-0000-4000-8000-000000000001"
    })
    .to_string()
}

pub fn result(text: &str, duration_ms: u64, total_cost_usd: f64, num_turns: u64) -> String {
    json!({
        "type": "result",
        "subtype": "success",
        "is_error": false,
        "result": text,
        "duration_ms": duration_ms,
        "duration_api_ms": duration_ms,
        "total_cost_usd": total_cost_usd,
        "num_turns": num_turns,
        "session_id": "5f0c7d1e-0000-4000-8000-000000000001"
    })
    .to_string()
}
