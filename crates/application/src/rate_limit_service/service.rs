use std::sync::Arc;

use tracing::{debug, warn};

use feedback_relay_domain::{FeedbackMessages, RateLimitPolicy, SubmissionLog};

use super::ports::{Clock, SubmissionLogStore};

/// Decision returned by [`RateLimitService::can_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitCheck {
    /// A new submission may be sent.
    Allowed,
    /// The last submission is too recent.
    Cooldown {
        /// Whole hours left, rounded up.
        hours_remaining: i64,
        /// Rendered cooldown message.
        reason: String,
    },
    /// The daily cap is reached.
    DailyLimit {
        /// Daily limit message.
        reason: String,
    },
}

impl SubmitCheck {
    /// Returns whether the submission is allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Returns the rejection message, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Allowed => None,
            Self::Cooldown { reason, .. } | Self::DailyLimit { reason } => Some(reason.as_str()),
        }
    }
}

/// Application service for client-side submission throttling.
///
/// Storage problems never block a submission: unreadable logs count as empty
/// and failed writes are dropped.
#[derive(Clone)]
pub struct RateLimitService {
    store: Arc<dyn SubmissionLogStore>,
    clock: Arc<dyn Clock>,
    policy: RateLimitPolicy,
    messages: Arc<FeedbackMessages>,
}

impl RateLimitService {
    /// Creates a new rate limit service.
    #[must_use]
    pub fn new(
        store: Arc<dyn SubmissionLogStore>,
        clock: Arc<dyn Clock>,
        policy: RateLimitPolicy,
        messages: Arc<FeedbackMessages>,
    ) -> Self {
        Self {
            store,
            clock,
            policy,
            messages,
        }
    }

    /// Checks the cooldown gate, then the daily gate.
    pub async fn can_submit(&self) -> SubmitCheck {
        let log = match self.store.load().await {
            Ok(log) => log.unwrap_or_default(),
            Err(error) => {
                warn!(error = %error, "submission log unreadable, allowing submission");
                return SubmitCheck::Allowed;
            }
        };
        let now = self.clock.now_ms();

        let cooldown_hours = log.last_submit().and_then(|last_submit| {
            self.policy
                .cooldown_hours_remaining(now.saturating_sub(last_submit))
        });
        if let Some(hours_remaining) = cooldown_hours {
            debug!(hours_remaining, "submission blocked by cooldown");
            return SubmitCheck::Cooldown {
                hours_remaining,
                reason: self.messages.cooldown_reason(hours_remaining),
            };
        }

        let today = self.clock.local_date(now);
        let submitted_today = log.count_where(|submitted_at| {
            today.is_some() && self.clock.local_date(submitted_at) == today
        });
        if submitted_today >= self.policy.max_submissions_per_day() {
            debug!(submitted_today, "submission blocked by daily limit");
            return SubmitCheck::DailyLimit {
                reason: self.messages.daily_limit_message.clone(),
            };
        }

        SubmitCheck::Allowed
    }

    /// Records a successful submission. Storage failures are logged and
    /// otherwise ignored.
    pub async fn record_submission(&self) {
        let mut log = match self.store.load().await {
            Ok(log) => log.unwrap_or_else(SubmissionLog::new),
            Err(error) => {
                warn!(error = %error, "submission log unreadable, skipping record");
                return;
            }
        };

        let now = self.clock.now_ms();
        log.record(now, self.policy.retention_ms());

        match self.store.save(&log).await {
            Ok(()) => debug!(
                retained = log.submissions().len(),
                "recorded feedback submission"
            ),
            Err(error) => warn!(error = %error, "failed to persist submission log"),
        }
    }
}
