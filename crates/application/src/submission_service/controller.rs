use std::sync::Arc;

use tracing::{debug, info, warn};

use feedback_relay_domain::{
    DEFAULT_APP_NAME, DEFAULT_DESIGNATED_FIELD, FeedbackMessages, Settlement, StatusKind,
    SubmissionOutcome, SubmissionPhase, prefixed_subject,
};

use super::ports::{FeedbackTransport, FormSurface};
use crate::RateLimitService;

/// Drives one feedback form through a submit action.
#[derive(Clone)]
pub struct SubmissionController {
    rate_limiter: RateLimitService,
    transport: Arc<dyn FeedbackTransport>,
    messages: Arc<FeedbackMessages>,
    designated_field: String,
}

impl SubmissionController {
    /// Creates a controller that prefixes the `subject` field.
    #[must_use]
    pub fn new(
        rate_limiter: RateLimitService,
        transport: Arc<dyn FeedbackTransport>,
        messages: Arc<FeedbackMessages>,
    ) -> Self {
        Self {
            rate_limiter,
            transport,
            messages,
            designated_field: DEFAULT_DESIGNATED_FIELD.to_owned(),
        }
    }

    /// Uses another field for the application prefix.
    #[must_use]
    pub fn with_designated_field(mut self, field_name: impl Into<String>) -> Self {
        self.designated_field = field_name.into();
        self
    }

    /// Handles one submit action.
    ///
    /// Never fails: every path ends with a status message and the submit
    /// control re-enabled.
    pub async fn submit(&self, surface: &mut dyn FormSurface) -> SubmissionOutcome {
        let check = self.rate_limiter.can_submit().await;
        if let Some(reason) = check.reason() {
            info!(reason = %reason, "feedback submission blocked");
            surface.show_status(StatusKind::Warning, reason);
            let outcome = SubmissionOutcome::Blocked {
                reason: reason.to_owned(),
            };
            self.settle(surface, outcome.settlement());
            return outcome;
        }

        let idle_label = surface
            .submit_label()
            .unwrap_or_else(|| self.messages.submit_button_text.clone());

        surface.set_submit_control(self.messages.submitting_button_text.as_str(), false);
        surface.hide_status();
        enter(surface, SubmissionPhase::Idle, SubmissionPhase::Submitting);

        let original_value = self.apply_prefix(surface);

        let outcome = match self.transport.deliver(surface.fields()).await {
            Ok(()) => {
                self.rate_limiter.record_submission().await;
                surface.show_status(StatusKind::Success, self.messages.success_message.as_str());
                surface.fields_mut().reset();
                info!("feedback submission sent");
                SubmissionOutcome::Sent
            }
            Err(error) => {
                warn!(error = %error, "feedback submission failed");
                surface.show_status(StatusKind::Error, self.messages.error_message.as_str());
                if let Some(original_value) = original_value {
                    surface
                        .fields_mut()
                        .set(self.designated_field.as_str(), original_value);
                }
                SubmissionOutcome::Failed
            }
        };

        enter(
            surface,
            SubmissionPhase::Submitting,
            SubmissionPhase::Settled(outcome.settlement()),
        );
        surface.set_submit_control(idle_label.as_str(), true);
        enter(
            surface,
            SubmissionPhase::Settled(outcome.settlement()),
            SubmissionPhase::Idle,
        );

        outcome
    }

    /// Rewrites the designated field and returns its original value when the
    /// field exists.
    fn apply_prefix(&self, surface: &mut dyn FormSurface) -> Option<String> {
        let original = surface
            .fields()
            .get(self.designated_field.as_str())
            .map(str::to_owned)?;

        if !original.is_empty() {
            let app_name = surface
                .app_name()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_APP_NAME.to_owned());
            surface.fields_mut().set(
                self.designated_field.as_str(),
                prefixed_subject(app_name.as_str(), original.as_str()),
            );
        }

        Some(original)
    }

    fn settle(&self, surface: &mut dyn FormSurface, settlement: Settlement) {
        enter(
            surface,
            SubmissionPhase::Idle,
            SubmissionPhase::Settled(settlement),
        );
        enter(
            surface,
            SubmissionPhase::Settled(settlement),
            SubmissionPhase::Idle,
        );
    }
}

fn enter(surface: &mut dyn FormSurface, from: SubmissionPhase, to: SubmissionPhase) {
    debug_assert!(from.can_transition_to(to), "invalid transition {from:?} -> {to:?}");
    debug!(phase = ?to, "submission phase changed");
    surface.phase_changed(to);
}
