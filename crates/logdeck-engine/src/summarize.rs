use anyhow::Result;
use logdeck_types::{EventKind, Role, SessionSummary};
use std::path::Path;

use crate::lines::records;
use crate::timing::TimeBounds;

/// Fold one log file into a [`SessionSummary`] in a single pass,
/// without materializing the event list.
///
/// When a query string is supplied, every raw line is checked for a
/// case-insensitive substring match; the first hit latches `matched`
/// for the whole session. Matching short-circuits after the first hit,
/// parsing does not - counts and timing still cover the rest of the
/// file.
pub fn summarize_file(path: &Path, query: Option<&str>) -> Result<SessionSummary> {
    let text = std::fs::read_to_string(path)?;
    let needle = query.map(|q| q.to_lowercase());

    let mut session_id = String::new();
    let mut tool = String::new();
    let mut cwd: Option<String> = None;
    let mut title: Option<String> = None;
    let mut bounds = TimeBounds::default();
    let mut matched = needle.is_none();

    let mut message_count: u64 = 0;
    let mut tool_use_count: u64 = 0;
    let mut message_count_override: Option<u64> = None;
    let mut tool_use_count_override: Option<u64> = None;

    for (line, record) in records(&text) {
        if session_id.is_empty() && !record.session_id.is_empty() {
            session_id = record.session_id.clone();
        }
        if tool.is_empty() && !record.tool.is_empty() {
            tool = record.tool.clone();
        }
        bounds.observe(record.timestamp.as_ref());

        match record.event_type {
            EventKind::SessionStart => {
                bounds.mark_start(record.timestamp.as_ref());
                if let Some(dir) = record.session_start_data().cwd {
                    cwd = Some(dir);
                }
            }
            EventKind::SessionEnd => {
                let data = record.session_end_data();
                bounds.mark_end(record.timestamp.as_ref(), data.duration_seconds);
                if data.message_count.is_some() {
                    message_count_override = data.message_count;
                }
                if data.tool_use_count.is_some() {
                    tool_use_count_override = data.tool_use_count;
                }
            }
            EventKind::Message => {
                message_count += 1;
                if title.is_none() {
                    let data = record.message_data();
                    if data.role == Role::User
                        && let Some(content) = data.content
                    {
                        let text = content.plain_text();
                        if !text.is_empty() {
                            title = Some(text);
                        }
                    }
                }
            }
            EventKind::ToolUse => {
                tool_use_count += 1;
            }
            EventKind::ToolResult | EventKind::Other => {}
        }

        if !matched
            && let Some(needle) = needle.as_deref()
            && line.to_lowercase().contains(needle)
        {
            matched = true;
        }
    }

    let (created_at, ended_at, duration_seconds) = bounds.finalize();
    let summary = title
        .map(|text| text.chars().take(160).collect())
        .unwrap_or_default();

    Ok(SessionSummary {
        session_id,
        tool,
        created_at,
        ended_at,
        cwd,
        summary,
        duration_seconds,
        message_count: message_count_override.unwrap_or(message_count),
        tool_use_count: tool_use_count_override.unwrap_or(tool_use_count),
        file_path: path.to_path_buf(),
        matched,
    })
}
