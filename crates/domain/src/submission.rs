use serde::{Deserialize, Serialize};

/// How a submission attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Settlement {
    /// Endpoint accepted the form.
    Success,
    /// Request failed or the endpoint rejected it.
    Error,
    /// Rate limiter refused the attempt before any request was made.
    Blocked,
}

/// UI phase of the submission controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "phase", content = "settlement")]
pub enum SubmissionPhase {
    /// Waiting for the user to submit.
    Idle,
    /// Request in flight; the submit control is disabled.
    Submitting,
    /// Attempt finished; the control is re-enabled on the way back to idle.
    Settled(Settlement),
}

impl SubmissionPhase {
    /// Returns whether a transition to `next` is permitted.
    #[must_use]
    pub fn can_transition_to(&self, next: SubmissionPhase) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Submitting)
                | (Self::Idle, Self::Settled(Settlement::Blocked))
                | (
                    Self::Submitting,
                    Self::Settled(Settlement::Success | Settlement::Error)
                )
                | (Self::Settled(_), Self::Idle)
        )
    }
}

/// Result returned to the caller of one submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Endpoint accepted the submission and it was recorded.
    Sent,
    /// Request failed; nothing was recorded.
    Failed,
    /// Rate limiter refused the attempt.
    Blocked {
        /// Message shown to the user.
        reason: String,
    },
}

impl SubmissionOutcome {
    /// Returns the settlement matching this outcome.
    #[must_use]
    pub fn settlement(&self) -> Settlement {
        match self {
            Self::Sent => Settlement::Success,
            Self::Failed => Settlement::Error,
            Self::Blocked { .. } => Settlement::Blocked,
        }
    }
}
