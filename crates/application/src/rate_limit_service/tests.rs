use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use feedback_relay_domain::{FeedbackMessages, RateLimitPolicy, SubmissionLog};

use super::{RateLimitService, SubmitCheck};
use crate::test_support::{DAY_MS, FixedClock, HOUR_MS, NOON_UTC_MS, SECOND_MS, TestLogStore};

fn messages() -> Arc<FeedbackMessages> {
    Arc::new(FeedbackMessages {
        cooldown_message: "Try again in {hours} hours.".to_owned(),
        daily_limit_message: "Daily limit reached.".to_owned(),
        ..FeedbackMessages::default()
    })
}

fn service(store: Arc<TestLogStore>, clock: Arc<FixedClock>) -> RateLimitService {
    RateLimitService::new(store, clock, RateLimitPolicy::default(), messages())
}

fn without_cooldown() -> RateLimitPolicy {
    RateLimitPolicy::new(Duration::ZERO, 3, Duration::from_secs(30 * 24 * 60 * 60))
        .unwrap_or_else(|_| unreachable!())
}

#[tokio::test]
async fn empty_store_allows_submission() {
    let store = Arc::new(TestLogStore::default());
    let clock = Arc::new(FixedClock::utc(NOON_UTC_MS));

    let check = service(store, clock).can_submit().await;

    assert_eq!(check, SubmitCheck::Allowed);
    assert!(check.is_allowed());
    assert_eq!(check.reason(), None);
}

#[tokio::test]
async fn submission_one_second_ago_reports_twenty_four_hours() {
    let now = NOON_UTC_MS;
    let store = Arc::new(TestLogStore::with_log(SubmissionLog::from_parts(
        vec![now - SECOND_MS],
        now - SECOND_MS,
    )));
    let clock = Arc::new(FixedClock::utc(now));

    let check = service(store, clock).can_submit().await;

    assert_eq!(
        check,
        SubmitCheck::Cooldown {
            hours_remaining: 24,
            reason: "Try again in 24 hours.".to_owned(),
        }
    );
}

#[tokio::test]
async fn cooldown_hours_round_up() {
    let now = NOON_UTC_MS;
    let last_submit = now - (5 * HOUR_MS + 30 * 60 * SECOND_MS);
    let store = Arc::new(TestLogStore::with_log(SubmissionLog::from_parts(
        vec![last_submit],
        last_submit,
    )));
    let clock = Arc::new(FixedClock::utc(now));

    let check = service(store, clock).can_submit().await;

    assert_eq!(check.reason(), Some("Try again in 19 hours."));
}

#[tokio::test]
async fn three_submissions_today_hit_daily_limit_after_cooldown() {
    let now = NOON_UTC_MS;
    let store = Arc::new(TestLogStore::with_log(SubmissionLog::from_parts(
        vec![now - 3 * HOUR_MS, now - 2 * HOUR_MS, now - HOUR_MS],
        now - 25 * HOUR_MS,
    )));
    let clock = Arc::new(FixedClock::utc(now));

    let check = service(store, clock).can_submit().await;

    assert_eq!(
        check,
        SubmitCheck::DailyLimit {
            reason: "Daily limit reached.".to_owned(),
        }
    );
}

#[tokio::test]
async fn two_submissions_today_are_allowed_after_cooldown() {
    let now = NOON_UTC_MS;
    let store = Arc::new(TestLogStore::with_log(SubmissionLog::from_parts(
        vec![now - DAY_MS - HOUR_MS, now - 2 * HOUR_MS, now - HOUR_MS],
        now - 25 * HOUR_MS,
    )));
    let clock = Arc::new(FixedClock::utc(now));

    assert!(service(store, clock).can_submit().await.is_allowed());
}

#[tokio::test]
async fn cooldown_reason_wins_when_both_gates_fail() {
    let now = NOON_UTC_MS;
    let store = Arc::new(TestLogStore::with_log(SubmissionLog::from_parts(
        vec![now - 3 * HOUR_MS, now - 2 * HOUR_MS, now - HOUR_MS],
        now - HOUR_MS,
    )));
    let clock = Arc::new(FixedClock::utc(now));

    let check = service(store, clock).can_submit().await;

    assert!(matches!(check, SubmitCheck::Cooldown { hours_remaining: 23, .. }));
}

#[tokio::test]
async fn daily_count_uses_local_calendar_date() {
    // 22:00 local at UTC+10; the entries are 07:00-09:00 local on the same
    // date but fall on the previous UTC date.
    let now = NOON_UTC_MS;
    let log = SubmissionLog::from_parts(
        vec![now - 15 * HOUR_MS, now - 14 * HOUR_MS, now - 13 * HOUR_MS],
        now - 25 * HOUR_MS,
    );

    let utc_store = Arc::new(TestLogStore::with_log(log.clone()));
    let utc_check = service(utc_store, Arc::new(FixedClock::utc(now)))
        .can_submit()
        .await;
    assert!(utc_check.is_allowed());

    let local_store = Arc::new(TestLogStore::with_log(log));
    let local_check = service(
        local_store,
        Arc::new(FixedClock::with_offset_hours(now, 10)),
    )
    .can_submit()
    .await;
    assert!(matches!(local_check, SubmitCheck::DailyLimit { .. }));
}

#[tokio::test]
async fn corrupted_log_fails_open() {
    let store = Arc::new(TestLogStore::corrupted());
    let clock = Arc::new(FixedClock::utc(NOON_UTC_MS));

    assert!(service(store, clock).can_submit().await.is_allowed());
}

#[tokio::test]
async fn fourth_submission_in_one_day_is_blocked() {
    let store = Arc::new(TestLogStore::default());
    let clock = Arc::new(FixedClock::utc(NOON_UTC_MS));
    let limiter = RateLimitService::new(store.clone(), clock.clone(), without_cooldown(), messages());

    assert_eq!(limiter.can_submit().await, SubmitCheck::Allowed);
    for _ in 0..3 {
        limiter.record_submission().await;
        clock.advance(SECOND_MS);
    }

    let check = limiter.can_submit().await;
    assert_eq!(check.reason(), Some("Daily limit reached."));
    assert_eq!(store.saves.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn record_appends_and_prunes_expired_entries() {
    let now = NOON_UTC_MS;
    let store = Arc::new(TestLogStore::with_log(SubmissionLog::from_parts(
        vec![now - 31 * DAY_MS, now - 2 * DAY_MS],
        now - 2 * DAY_MS,
    )));
    let clock = Arc::new(FixedClock::utc(now));
    let limiter = service(store.clone(), clock.clone());

    for _ in 0..3 {
        limiter.record_submission().await;
        clock.advance(SECOND_MS);
    }

    let stored = store.stored().unwrap_or_default();
    assert_eq!(
        stored.submissions(),
        &[now - 2 * DAY_MS, now, now + SECOND_MS, now + 2 * SECOND_MS]
    );
    assert_eq!(stored.last_submit(), Some(now + 2 * SECOND_MS));
}

#[tokio::test]
async fn record_swallows_save_failures() {
    let store = Arc::new(TestLogStore {
        fail_save: true,
        ..TestLogStore::default()
    });
    let clock = Arc::new(FixedClock::utc(NOON_UTC_MS));
    let limiter = service(store.clone(), clock);

    limiter.record_submission().await;

    assert!(store.stored().is_none());
    assert!(limiter.can_submit().await.is_allowed());
}

#[tokio::test]
async fn record_skips_write_when_log_unreadable() {
    let store = Arc::new(TestLogStore::corrupted());
    let clock = Arc::new(FixedClock::utc(NOON_UTC_MS));

    service(store.clone(), clock).record_submission().await;

    assert_eq!(store.saves.load(Ordering::SeqCst), 0);
}
