use anyhow::Result;
use logdeck_types::{EventKind, SessionDetail};
use std::path::Path;

use crate::lines::records;
use crate::timeline::build_timeline;
use crate::timing::TimeBounds;

/// Load one log file into a fully reconstructed [`SessionDetail`]:
/// identity and timing resolved the same way the summarizer resolves
/// them, plus the ordered timeline with tool results correlated back
/// onto their calls.
pub fn load_session_detail(path: &Path) -> Result<SessionDetail> {
    let text = std::fs::read_to_string(path)?;

    let mut session_id = String::new();
    let mut tool = String::new();
    let mut cwd: Option<String> = None;
    let mut bounds = TimeBounds::default();

    let parsed: Vec<_> = records(&text)
        .map(|(_, record)| record)
        .inspect(|record| {
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
                }
                _ => {}
            }
        })
        .collect();

    let items = build_timeline(parsed);
    let (created_at, ended_at, duration_seconds) = bounds.finalize();

    Ok(SessionDetail {
        session_id,
        tool,
        created_at,
        ended_at,
        cwd,
        duration_seconds,
        items,
    })
}
