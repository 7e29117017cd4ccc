use serde::{Deserialize, Serialize};

/// Persisted record of past successful submissions from one client.
///
/// Serialized as `{"submissions": [ms, ...], "lastSubmit": ms}` so records
/// written by the browser handler stay readable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionLog {
    #[serde(default)]
    submissions: Vec<i64>,
    #[serde(default, rename = "lastSubmit")]
    last_submit: i64,
}

impl SubmissionLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a log from previously stored parts.
    #[must_use]
    pub fn from_parts(submissions: Vec<i64>, last_submit: i64) -> Self {
        Self {
            submissions,
            last_submit,
        }
    }

    /// Returns submission timestamps in insertion order.
    #[must_use]
    pub fn submissions(&self) -> &[i64] {
        &self.submissions
    }

    /// Returns the most recent submission timestamp, if any was recorded.
    #[must_use]
    pub fn last_submit(&self) -> Option<i64> {
        (self.last_submit != 0).then_some(self.last_submit)
    }

    /// Appends a submission at `now_ms` and drops entries at or before
    /// `now_ms - retention_ms`.
    pub fn record(&mut self, now_ms: i64, retention_ms: i64) {
        self.submissions.push(now_ms);
        self.last_submit = now_ms;

        let cutoff = now_ms.saturating_sub(retention_ms);
        self.submissions.retain(|submitted_at| *submitted_at > cutoff);
    }

    /// Counts submissions accepted by the predicate.
    #[must_use]
    pub fn count_where(&self, predicate: impl Fn(i64) -> bool) -> usize {
        self.submissions
            .iter()
            .filter(|submitted_at| predicate(**submitted_at))
            .count()
    }
}
