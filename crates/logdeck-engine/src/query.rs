use logdeck_locator::{enumerate_log_files, resolve_session_file};
use logdeck_types::{SessionDetail, SessionSummary};
use std::path::Path;

use crate::detail::load_session_detail;
use crate::summarize::summarize_file;

/// Listing filters. All optional; an empty filter lists everything.
#[derive(Debug, Clone, Default)]
pub struct SessionFilter {
    /// Exact producer match.
    pub tool: Option<String>,
    /// Calendar day (`YYYY-MM-DD`) of `created_at`, falling back to
    /// the day-directory name for sessions with no usable timestamp.
    pub date: Option<String>,
    /// String-prefix test against the session's working directory.
    pub cwd: Option<String>,
    /// Case-insensitive free-text search over raw records.
    pub query: Option<String>,
}

/// Scan the whole log root and return the summaries passing every
/// active filter, newest first.
///
/// A full re-scan per call: freshness over latency, no cache to go
/// stale. Unreadable files are skipped; a missing root is an empty
/// list. The sort is stable, so sessions sharing a `created_at` keep
/// their enumeration order.
pub fn list_sessions(root: &Path, filter: &SessionFilter) -> Vec<SessionSummary> {
    let mut summaries = Vec::new();

    for entry in enumerate_log_files(root) {
        let Ok(summary) = summarize_file(&entry.path, filter.query.as_deref()) else {
            continue;
        };
        if !summary.matched {
            continue;
        }
        if let Some(date) = &filter.date {
            let created_day = summary.created_at.get(..10).unwrap_or("");
            if !summary.created_at.is_empty() {
                if created_day != date.as_str() {
                    continue;
                }
            } else if entry.day != *date {
                continue;
            }
        }
        if let Some(tool) = &filter.tool
            && summary.tool != *tool
        {
            continue;
        }
        // A session with no recorded cwd is not excluded by the prefix
        // filter.
        if let Some(prefix) = &filter.cwd
            && let Some(cwd) = &summary.cwd
            && !cwd.starts_with(prefix)
        {
            continue;
        }
        summaries.push(summary);
    }

    summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    summaries
}

/// Resolve a session id (+ optional tool disambiguator) to its
/// reconstructed detail. Not-found and unreadable files are both an
/// empty answer, never an error.
pub fn get_session(root: &Path, session_id: &str, tool: Option<&str>) -> Option<SessionDetail> {
    let path = resolve_session_file(root, session_id, tool)?;
    load_session_detail(&path).ok()
}
