use async_trait::async_trait;
use chrono::NaiveDate;

use feedback_relay_core::AppResult;
use feedback_relay_domain::SubmissionLog;

/// Store port for the single persisted submission log.
#[async_trait]
pub trait SubmissionLogStore: Send + Sync {
    /// Loads the log. Returns `Ok(None)` when nothing was stored yet.
    ///
    /// Undecodable stored data is reported as an error.
    async fn load(&self) -> AppResult<Option<SubmissionLog>>;

    /// Replaces the stored log.
    async fn save(&self, log: &SubmissionLog) -> AppResult<()>;
}

/// Time source for rate limit decisions.
pub trait Clock: Send + Sync {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn now_ms(&self) -> i64;

    /// Returns the local calendar date of a millisecond timestamp, or `None`
    /// when the timestamp is out of range.
    fn local_date(&self, timestamp_ms: i64) -> Option<NaiveDate>;
}
