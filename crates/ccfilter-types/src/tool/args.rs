use serde::{Deserialize, Serialize};

/// Arguments of path-addressed file tools (`Read`, `Write`, `Edit`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

/// Arguments of search tools (`Glob`, `Grep`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Arguments of shell tools (`Bash`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}
