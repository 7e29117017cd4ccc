use async_trait::async_trait;

use feedback_relay_core::AppResult;
use feedback_relay_domain::{FormFields, StatusKind, SubmissionPhase};

/// Port for delivering a form to the remote form-processing endpoint.
#[async_trait]
pub trait FeedbackTransport: Send + Sync {
    /// Sends the fields in one request. Any non-success response is an error.
    async fn deliver(&self, fields: &FormFields) -> AppResult<()>;
}

/// Host UI that owns the feedback form.
///
/// The controller only drives it; rendering is left to the implementation.
pub trait FormSurface: Send {
    /// Shows the status region with a message of the given kind.
    fn show_status(&mut self, kind: StatusKind, message: &str);

    /// Hides the status region.
    fn hide_status(&mut self);

    /// Returns the current submit control label, or `None` when the form has
    /// no submit control.
    fn submit_label(&self) -> Option<String>;

    /// Updates the submit control label and enabled state.
    fn set_submit_control(&mut self, label: &str, enabled: bool);

    /// Returns the application name configured on the form.
    fn app_name(&self) -> Option<String>;

    /// Returns the form inputs.
    fn fields(&self) -> &FormFields;

    /// Returns the form inputs for modification.
    fn fields_mut(&mut self) -> &mut FormFields;

    /// Called after every controller phase change.
    fn phase_changed(&mut self, _phase: SubmissionPhase) {}
}
