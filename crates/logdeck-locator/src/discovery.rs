use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A candidate log file, paired with the day-directory it was found
/// under. The day name is an opaque grouping key except as the date
/// fallback for sessions with no usable timestamp.
#[derive(Debug, Clone)]
pub struct LogFileEntry {
    pub day: String,
    pub path: PathBuf,
}

/// List every `*.log` file under the root's first-level day
/// directories, in sorted file-name order.
///
/// Enumeration is deterministic: days and files within each day come
/// back lexicographically, independent of OS readdir order. Unreadable
/// entries and a missing root yield an empty (or partial) listing.
pub fn enumerate_log_files(root: &Path) -> Vec<LogFileEntry> {
    WalkDir::new(root)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "log")
        })
        .filter_map(|entry| {
            let day = entry
                .path()
                .parent()
                .and_then(|dir| dir.file_name())
                .and_then(|name| name.to_str())?
                .to_string();
            Some(LogFileEntry {
                day,
                path: entry.into_path(),
            })
        })
        .collect()
}

/// Resolve `(session_id, tool?)` to the single authoritative log file.
///
/// Candidates must be named `{session_id}-...` (or
/// `{session_id}-{tool}-...` when a tool is given). Among candidates
/// the largest embedded timestamp suffix wins; on numerically equal
/// suffixes the last enumerated candidate wins, which together with
/// sorted enumeration makes repeated calls return the same file.
pub fn resolve_session_file(
    root: &Path,
    session_id: &str,
    tool: Option<&str>,
) -> Option<PathBuf> {
    let prefix = match tool {
        Some(tool) => format!("{}-{}-", session_id, tool),
        None => format!("{}-", session_id),
    };

    let mut best: Option<(i64, PathBuf)> = None;
    for entry in enumerate_log_files(root) {
        let Some(name) = entry.path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.starts_with(&prefix) {
            continue;
        }
        let suffix = embedded_timestamp(&entry.path);
        if best.as_ref().is_none_or(|(ts, _)| suffix >= *ts) {
            best = Some((suffix, entry.path));
        }
    }

    best.map(|(_, path)| path)
}

/// Numeric token after the last `-` of the file stem. A suffix that
/// fails to parse counts as -1, so it never beats a valid one.
fn embedded_timestamp(path: &Path) -> i64 {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|stem| stem.rsplit_once('-'))
        .and_then(|(_, token)| token.parse().ok())
        .unwrap_or(-1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, day: &str, name: &str) {
        let dir = root.join(day);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), "").unwrap();
    }

    #[test]
    fn test_enumerate_missing_root_is_empty() {
        let tmp = TempDir::new().unwrap();
        let entries = enumerate_log_files(&tmp.path().join("does-not-exist"));
        assert!(entries.is_empty());
    }

    #[test]
    fn test_enumerate_skips_non_log_entries() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "2026-08-01", "abc-claude-100.log");
        touch(tmp.path(), "2026-08-01", "notes.txt");
        fs::write(tmp.path().join("stray.log"), "").unwrap();
        fs::create_dir_all(tmp.path().join("2026-08-02/nested.log")).unwrap();

        let entries = enumerate_log_files(tmp.path());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].day, "2026-08-01");
        assert!(entries[0].path.ends_with("abc-claude-100.log"));
    }

    #[test]
    fn test_enumerate_order_is_sorted() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "2026-08-02", "b-claude-2.log");
        touch(tmp.path(), "2026-08-01", "c-claude-3.log");
        touch(tmp.path(), "2026-08-02", "a-claude-1.log");

        let names: Vec<String> = enumerate_log_files(tmp.path())
            .into_iter()
            .map(|e| format!("{}/{}", e.day, e.path.file_name().unwrap().to_str().unwrap()))
            .collect();
        assert_eq!(
            names,
            vec![
                "2026-08-01/c-claude-3.log",
                "2026-08-02/a-claude-1.log",
                "2026-08-02/b-claude-2.log",
            ]
        );
    }

    #[test]
    fn test_resolve_prefers_largest_suffix() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "2026-08-01", "s1-claude-100.log");
        touch(tmp.path(), "2026-08-02", "s1-claude-300.log");
        touch(tmp.path(), "2026-08-02", "s1-claude-200.log");

        let path = resolve_session_file(tmp.path(), "s1", None).unwrap();
        assert!(path.ends_with("2026-08-02/s1-claude-300.log"));
    }

    #[test]
    fn test_resolve_tool_narrows_prefix() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "2026-08-01", "s1-claude-100.log");
        touch(tmp.path(), "2026-08-01", "s1-cursor-999.log");

        let path = resolve_session_file(tmp.path(), "s1", Some("claude")).unwrap();
        assert!(path.ends_with("s1-claude-100.log"));

        assert!(resolve_session_file(tmp.path(), "s1", Some("gemini")).is_none());
    }

    #[test]
    fn test_resolve_rejects_other_sessions() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "2026-08-01", "s12-claude-100.log");

        // "s1" is a prefix of "s12" but "s1-" is not a prefix of "s12-"
        assert!(resolve_session_file(tmp.path(), "s1", None).is_none());
    }

    #[test]
    fn test_unparsable_suffix_never_beats_valid_one() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "2026-08-01", "s1-claude-zzz.log");
        touch(tmp.path(), "2026-08-01", "s1-claude-5.log");

        let path = resolve_session_file(tmp.path(), "s1", None).unwrap();
        assert!(path.ends_with("s1-claude-5.log"));
    }

    #[test]
    fn test_resolve_prefers_last_on_suffix_tie() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "2026-08-01", "s1-claude-100.log");
        touch(tmp.path(), "2026-08-01", "s1-cursor-100.log");

        // Equal suffixes: the later entry in sorted enumeration wins,
        // every time.
        for _ in 0..3 {
            let path = resolve_session_file(tmp.path(), "s1", None).unwrap();
            assert!(path.ends_with("s1-cursor-100.log"));
        }
    }
}
