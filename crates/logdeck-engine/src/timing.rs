use chrono::DateTime;

/// Running timing state shared by the summarizer and the detail
/// loader. Timestamps are ISO-8601 strings compared lexicographically;
/// records are not guaranteed monotonic, so min/max are tracked
/// explicitly.
#[derive(Debug, Default)]
pub(crate) struct TimeBounds {
    earliest: Option<String>,
    latest: Option<String>,
    started_at: Option<String>,
    ended_at: Option<String>,
    duration_override: Option<u64>,
}

impl TimeBounds {
    pub fn observe(&mut self, timestamp: Option<&String>) {
        let Some(ts) = timestamp else { return };
        if self.earliest.as_ref().is_none_or(|cur| ts < cur) {
            self.earliest = Some(ts.clone());
        }
        if self.latest.as_ref().is_none_or(|cur| ts > cur) {
            self.latest = Some(ts.clone());
        }
    }

    /// First `session_start` timestamp wins.
    pub fn mark_start(&mut self, timestamp: Option<&String>) {
        if self.started_at.is_none()
            && let Some(ts) = timestamp
        {
            self.started_at = Some(ts.clone());
        }
    }

    pub fn mark_end(&mut self, timestamp: Option<&String>, duration_seconds: Option<u64>) {
        if let Some(ts) = timestamp {
            self.ended_at = Some(ts.clone());
        }
        if duration_seconds.is_some() {
            self.duration_override = duration_seconds;
        }
    }

    /// Resolve `(created_at, ended_at, duration_seconds)`: explicit
    /// start/end timestamps when present, else the observed bounds;
    /// duration from the `session_end` override, else whole seconds of
    /// `latest - earliest`, floored at zero.
    pub fn finalize(self) -> (String, Option<String>, u64) {
        let created_at = self
            .started_at
            .or_else(|| self.earliest.clone())
            .unwrap_or_default();
        let ended_at = self.ended_at.or_else(|| self.latest.clone());

        let duration = self.duration_override.unwrap_or_else(|| {
            match (self.earliest.as_deref(), self.latest.as_deref()) {
                (Some(earliest), Some(latest)) => elapsed_seconds(earliest, latest),
                _ => 0,
            }
        });

        (created_at, ended_at, duration)
    }
}

fn elapsed_seconds(earliest: &str, latest: &str) -> u64 {
    match (
        DateTime::parse_from_rfc3339(earliest),
        DateTime::parse_from_rfc3339(latest),
    ) {
        (Ok(start), Ok(end)) => (end - start).num_seconds().max(0) as u64,
        _ => 0,
    }
}
