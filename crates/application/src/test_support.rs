use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDate};

use feedback_relay_core::{AppError, AppResult};
use feedback_relay_domain::SubmissionLog;

use crate::{Clock, SubmissionLogStore};

pub const SECOND_MS: i64 = 1_000;
pub const HOUR_MS: i64 = 60 * 60 * SECOND_MS;
pub const DAY_MS: i64 = 24 * HOUR_MS;

/// 2026-03-10T12:00:00Z.
pub const NOON_UTC_MS: i64 = 1_773_144_000_000;

pub struct FixedClock {
    now_ms: AtomicI64,
    offset: FixedOffset,
}

impl FixedClock {
    pub fn utc(now_ms: i64) -> Self {
        Self::with_offset_hours(now_ms, 0)
    }

    pub fn with_offset_hours(now_ms: i64, hours: i32) -> Self {
        Self {
            now_ms: AtomicI64::new(now_ms),
            offset: FixedOffset::east_opt(hours * 3600).unwrap_or_else(|| unreachable!()),
        }
    }

    pub fn advance(&self, delta_ms: i64) {
        self.now_ms.fetch_add(delta_ms, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_ms(&self) -> i64 {
        self.now_ms.load(Ordering::SeqCst)
    }

    fn local_date(&self, timestamp_ms: i64) -> Option<NaiveDate> {
        DateTime::from_timestamp_millis(timestamp_ms)
            .map(|instant| instant.with_timezone(&self.offset).date_naive())
    }
}

#[derive(Default)]
pub struct TestLogStore {
    pub log: Mutex<Option<SubmissionLog>>,
    pub fail_load: bool,
    pub fail_save: bool,
    pub saves: AtomicUsize,
}

impl TestLogStore {
    pub fn with_log(log: SubmissionLog) -> Self {
        Self {
            log: Mutex::new(Some(log)),
            ..Self::default()
        }
    }

    pub fn corrupted() -> Self {
        Self {
            fail_load: true,
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Option<SubmissionLog> {
        self.log.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl SubmissionLogStore for TestLogStore {
    async fn load(&self) -> AppResult<Option<SubmissionLog>> {
        if self.fail_load {
            return Err(AppError::Storage(
                "stored submission log is not valid JSON".to_owned(),
            ));
        }

        self.log
            .lock()
            .map(|guard| guard.clone())
            .map_err(|error| AppError::Internal(format!("failed to lock log store: {error}")))
    }

    async fn save(&self, log: &SubmissionLog) -> AppResult<()> {
        if self.fail_save {
            return Err(AppError::Storage("quota exceeded".to_owned()));
        }

        *self
            .log
            .lock()
            .map_err(|error| AppError::Internal(format!("failed to lock log store: {error}")))? =
            Some(log.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
