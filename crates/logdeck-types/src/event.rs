use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::MessageContent;

/// One parsed line of a session log file.
///
/// Every line of a file carries the same `session_id`; `tool` is
/// established by the first record that carries it. Records are
/// append-ordered but not guaranteed monotonic in `timestamp`, so
/// consumers track min/max rather than assuming sortedness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default)]
    pub session_id: String,

    /// Producer identifier (which assistant wrote this session).
    #[serde(default)]
    pub tool: String,

    /// ISO-8601 timestamp; absent on some lines.
    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(default)]
    pub event_type: EventKind,

    /// Opaque payload; shape depends on `event_type`. Preserved raw so
    /// detail views and push payloads can round-trip it.
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    SessionStart,
    SessionEnd,
    Message,
    ToolUse,
    ToolResult,
    #[default]
    #[serde(other)]
    Other,
}

/// Payload of a `session_start` record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionStartData {
    #[serde(default)]
    pub cwd: Option<String>,
}

/// Payload of a `session_end` record. Fields present here are
/// authoritative overrides for the derived summary values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionEndData {
    #[serde(default)]
    pub duration_seconds: Option<u64>,
    #[serde(default)]
    pub message_count: Option<u64>,
    #[serde(default)]
    pub tool_use_count: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageData {
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub content: Option<MessageContent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolUseData {
    #[serde(default)]
    pub tool_use_id: String,
    #[serde(default)]
    pub tool_name: String,
    #[serde(default)]
    pub input: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolResultData {
    #[serde(default)]
    pub tool_use_id: String,
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub is_error: bool,
}

impl EventRecord {
    /// Decode `data` as a `session_start` payload. Lenient: missing or
    /// mis-shaped fields fall back to defaults rather than failing.
    pub fn session_start_data(&self) -> SessionStartData {
        serde_json::from_value(self.data.clone()).unwrap_or_default()
    }

    pub fn session_end_data(&self) -> SessionEndData {
        serde_json::from_value(self.data.clone()).unwrap_or_default()
    }

    pub fn message_data(&self) -> MessageData {
        serde_json::from_value(self.data.clone()).unwrap_or_default()
    }

    pub fn tool_use_data(&self) -> ToolUseData {
        serde_json::from_value(self.data.clone()).unwrap_or_default()
    }

    pub fn tool_result_data(&self) -> ToolResultData {
        serde_json::from_value(self.data.clone()).unwrap_or_default()
    }
}
