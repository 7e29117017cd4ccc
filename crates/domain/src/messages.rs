use serde::{Deserialize, Serialize};

/// Placeholder replaced with the remaining cooldown hours.
pub const HOURS_PLACEHOLDER: &str = "{hours}";

/// User-facing strings shown by the feedback form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedbackMessages {
    /// Shown while the cooldown is active; may contain `{hours}`.
    pub cooldown_message: String,
    /// Shown once the daily cap is reached.
    pub daily_limit_message: String,
    /// Idle label of the submit control.
    pub submit_button_text: String,
    /// Label of the submit control while a request is pending.
    pub submitting_button_text: String,
    /// Shown after the endpoint accepted the submission.
    pub success_message: String,
    /// Shown when the request failed or was rejected.
    pub error_message: String,
}

impl FeedbackMessages {
    /// Renders the cooldown message for the given number of hours.
    ///
    /// Only the first `{hours}` is filled; later occurrences stay literal.
    #[must_use]
    pub fn cooldown_reason(&self, hours: i64) -> String {
        self.cooldown_message
            .replacen(HOURS_PLACEHOLDER, hours.to_string().as_str(), 1)
    }
}

impl Default for FeedbackMessages {
    fn default() -> Self {
        Self {
            cooldown_message:
                "You've already sent feedback recently. Please try again in {hours} hours."
                    .to_owned(),
            daily_limit_message:
                "You've reached the daily feedback limit. Please try again tomorrow.".to_owned(),
            submit_button_text: "Send Feedback".to_owned(),
            submitting_button_text: "Sending...".to_owned(),
            success_message: "Thank you! Your feedback has been sent.".to_owned(),
            error_message: "Sorry, something went wrong. Please try again later.".to_owned(),
        }
    }
}
