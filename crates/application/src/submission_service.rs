//! Feedback submission ports and controller.
//!
//! One submit action consults the rate limiter, sends the form once and
//! leaves the host UI idle again whatever the outcome.

mod controller;
mod ports;


pub use controller::SubmissionController;
pub use ports::{FeedbackTransport, FormSurface};
