//! Client-side rate limiting ports and application service.
//!
//! Enforces a cooldown between submissions and a cap per local calendar day,
//! backed by a single persisted submission log. The limiter is an anti-abuse
//! heuristic and fails open on any storage problem.

mod ports;
mod service;

#[cfg(test)]
mod tests;

pub use ports::{Clock, SubmissionLogStore};
pub use service::{RateLimitService, SubmitCheck};
