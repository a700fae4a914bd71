use logdeck_types::EventRecord;

/// Iterate the valid records of a log file's text, paired with the raw
/// line they came from (the free-text filter matches against the raw
/// serialized form).
///
/// Blank lines are skipped; lines that fail to parse are dropped, not
/// fatal. A truncated tail on a file still being written is just one
/// more dropped line.
pub(crate) fn records(text: &str) -> impl Iterator<Item = (&str, EventRecord)> {
    text.lines().filter_map(|line| {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let record: EventRecord = serde_json::from_str(line).ok()?;
        Some((line, record))
    })
}
