//! Application services and ports.

#![forbid(unsafe_code)]

mod rate_limit_service;
mod submission_service;

#[cfg(test)]
mod test_support;

pub use rate_limit_service::{Clock, RateLimitService, SubmissionLogStore, SubmitCheck};
pub use submission_service::{FeedbackTransport, FormSurface, SubmissionController};
