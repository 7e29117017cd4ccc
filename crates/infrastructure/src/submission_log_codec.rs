//! Encoding of the submission log as stored under its key.

use feedback_relay_core::{AppError, AppResult};
use feedback_relay_domain::SubmissionLog;

/// Key under which the browser handler keeps the log.
pub const DEFAULT_STORAGE_KEY: &str = "feedback_form_submissions";

pub(crate) fn decode(raw: &str) -> AppResult<SubmissionLog> {
    serde_json::from_str(raw).map_err(|error| {
        AppError::Storage(format!("stored submission log is not valid: {error}"))
    })
}

pub(crate) fn encode(log: &SubmissionLog) -> AppResult<String> {
    serde_json::to_string(log)
        .map_err(|error| AppError::Storage(format!("failed to encode submission log: {error}")))
}
