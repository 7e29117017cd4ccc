use std::time::Duration;

use feedback_relay_core::{AppError, AppResult};

const HOUR_MS: i64 = 60 * 60 * 1000;

/// Default minimum time between two submissions from one client.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(24 * 60 * 60);

/// Default number of submissions accepted per local calendar day.
pub const DEFAULT_MAX_SUBMISSIONS_PER_DAY: usize = 3;

/// Default age after which recorded submissions are dropped on write.
pub const DEFAULT_RETENTION: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Client-side throttling limits for feedback submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    cooldown: Duration,
    max_submissions_per_day: usize,
    retention: Duration,
}

impl RateLimitPolicy {
    /// Creates a validated policy.
    pub fn new(
        cooldown: Duration,
        max_submissions_per_day: usize,
        retention: Duration,
    ) -> AppResult<Self> {
        if max_submissions_per_day == 0 {
            return Err(AppError::Validation(
                "daily submission cap must be greater than zero".to_owned(),
            ));
        }

        if retention < cooldown {
            return Err(AppError::Validation(
                "rate limit retention must not be shorter than the cooldown".to_owned(),
            ));
        }

        Ok(Self {
            cooldown,
            max_submissions_per_day,
            retention,
        })
    }

    /// Returns the cooldown window in milliseconds.
    #[must_use]
    pub fn cooldown_ms(&self) -> i64 {
        duration_ms(self.cooldown)
    }

    /// Returns the retention window in milliseconds.
    #[must_use]
    pub fn retention_ms(&self) -> i64 {
        duration_ms(self.retention)
    }

    /// Returns the daily submission cap.
    #[must_use]
    pub fn max_submissions_per_day(&self) -> usize {
        self.max_submissions_per_day
    }

    /// Returns whole hours left in the cooldown, rounded up, or `None` once
    /// the cooldown has elapsed.
    ///
    /// A negative `elapsed_ms` (last submission stamped in the future) keeps
    /// the cooldown active.
    #[must_use]
    pub fn cooldown_hours_remaining(&self, elapsed_ms: i64) -> Option<i64> {
        let cooldown_ms = self.cooldown_ms();
        if elapsed_ms >= cooldown_ms {
            return None;
        }

        let remaining_ms = cooldown_ms.saturating_sub(elapsed_ms);
        Some(remaining_ms.saturating_add(HOUR_MS - 1) / HOUR_MS)
    }
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self {
            cooldown: DEFAULT_COOLDOWN,
            max_submissions_per_day: DEFAULT_MAX_SUBMISSIONS_PER_DAY,
            retention: DEFAULT_RETENTION,
        }
    }
}

fn duration_ms(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}
