//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod http_feedback_transport;
mod in_memory_submission_log_store;
mod json_file_submission_log_store;
mod submission_log_codec;
mod system_clock;
mod terminal_form_surface;

pub use http_feedback_transport::HttpFeedbackTransport;
pub use in_memory_submission_log_store::InMemorySubmissionLogStore;
pub use json_file_submission_log_store::JsonFileSubmissionLogStore;
pub use submission_log_codec::DEFAULT_STORAGE_KEY;
pub use system_clock::SystemClock;
pub use terminal_form_surface::TerminalFormSurface;
