use chrono::{DateTime, Local, NaiveDate, Utc};
use feedback_relay_application::Clock;

/// Wall clock using the host's local time zone for calendar dates.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a system clock.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn local_date(&self, timestamp_ms: i64) -> Option<NaiveDate> {
        DateTime::from_timestamp_millis(timestamp_ms)
            .map(|instant| instant.with_timezone(&Local).date_naive())
    }
}
