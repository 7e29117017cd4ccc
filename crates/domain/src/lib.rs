//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod form;
mod messages;
mod policy;
mod submission;
mod submission_log;

pub use form::{
    DEFAULT_APP_NAME, DEFAULT_DESIGNATED_FIELD, FormField, FormFields, StatusKind,
    prefixed_subject,
};
pub use messages::{FeedbackMessages, HOURS_PLACEHOLDER};
pub use policy::{
    DEFAULT_COOLDOWN, DEFAULT_MAX_SUBMISSIONS_PER_DAY, DEFAULT_RETENTION, RateLimitPolicy,
};
pub use submission::{Settlement, SubmissionOutcome, SubmissionPhase};
pub use submission_log::SubmissionLog;
