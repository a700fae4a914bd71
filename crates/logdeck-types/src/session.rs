use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use crate::event::Role;

/// Compact per-session view used for listing and search. Derived fresh
/// from the log file on every query; never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: String,
    pub tool: String,
    /// Explicit `session_start` timestamp when present, else the
    /// earliest timestamp observed in the file. Empty when the file
    /// carries no timestamps at all.
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
    /// First 160 characters of the first user message's text.
    pub summary: String,
    pub duration_seconds: u64,
    pub message_count: u64,
    pub tool_use_count: u64,
    pub file_path: PathBuf,
    /// Whether the free-text filter matched anywhere in the file.
    /// Per-query scratch state, not part of the serialized summary.
    #[serde(skip)]
    pub matched: bool,
}

/// Full reconstructed session for detail views and push payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDetail {
    pub session_id: String,
    pub tool: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
    pub duration_seconds: u64,
    pub items: Vec<TimelineItem>,
}

/// One entry of a reconstructed timeline. Order equals log order; a
/// tool item sits at its `tool_use` position with the correlated
/// result backfilled in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
#[serde(rename_all = "snake_case")]
pub enum TimelineItem {
    Message {
        role: Role,
        text: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        thinking: Vec<String>,
    },
    Tool {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tool_use_id: Option<String>,
        tool_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        input: Option<Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        output: Option<Value>,
        is_error: bool,
    },
}
