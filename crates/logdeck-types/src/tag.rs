use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Label attached to a pushed session. Identity is the `key:value`
/// pair; first-seen order is preserved across merges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    fn identity(&self) -> String {
        format!("{}:{}", self.key, self.value)
    }
}

/// Parse a `key:value` string (falling back to `key=value` when no
/// colon is present). Returns None when either side is missing.
pub fn parse_tag(raw: &str) -> Option<Tag> {
    let (key, value) = match raw.split_once(':') {
        Some(pair) => pair,
        None => raw.split_once('=')?,
    };
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some(Tag::new(key, value))
}

/// Combine configured default tags with explicitly supplied ones.
///
/// Defaults come first in their given order; malformed entries are
/// dropped silently. Explicit tags follow, each skipped when its
/// `key:value` pair already appeared. The result governs the tag list
/// attached to a push payload.
pub fn merge_tags(defaults: &[String], explicit: &[Tag]) -> Vec<Tag> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for raw in defaults {
        let Some(tag) = parse_tag(raw) else { continue };
        if seen.insert(tag.identity()) {
            merged.push(tag);
        }
    }
    for tag in explicit {
        if seen.insert(tag.identity()) {
            merged.push(tag.clone());
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_tag_colon_and_equals() {
        assert_eq!(parse_tag("team:platform"), Some(Tag::new("team", "platform")));
        assert_eq!(parse_tag("team=platform"), Some(Tag::new("team", "platform")));
        // Value keeps everything after the first separator
        assert_eq!(parse_tag("url:https://x"), Some(Tag::new("url", "https://x")));
    }

    #[test]
    fn test_parse_tag_malformed() {
        assert_eq!(parse_tag("noseparator"), None);
        assert_eq!(parse_tag(":value"), None);
        assert_eq!(parse_tag("key:"), None);
        assert_eq!(parse_tag("  :  "), None);
    }

    #[test]
    fn test_merge_defaults_first_duplicate_explicit_dropped() {
        let merged = merge_tags(
            &strings(&["team:platform"]),
            &[Tag::new("repo", "x"), Tag::new("team", "platform")],
        );
        assert_eq!(
            merged,
            vec![Tag::new("team", "platform"), Tag::new("repo", "x")]
        );
    }

    #[test]
    fn test_merge_drops_malformed_defaults() {
        let merged = merge_tags(&strings(&["bad", "env:prod", ":x"]), &[]);
        assert_eq!(merged, vec![Tag::new("env", "prod")]);
    }

    #[test]
    fn test_merge_idempotent_on_explicit_argument() {
        let defaults = strings(&["team:platform", "env:prod"]);
        let explicit = vec![Tag::new("repo", "x"), Tag::new("env", "prod")];

        let once = merge_tags(&defaults, &explicit);
        let twice = merge_tags(&defaults, &once);

        let set = |tags: &[Tag]| {
            tags.iter()
                .map(|t| (t.key.clone(), t.value.clone()))
                .collect::<std::collections::HashSet<_>>()
        };
        assert_eq!(set(&once), set(&twice));
    }
}
