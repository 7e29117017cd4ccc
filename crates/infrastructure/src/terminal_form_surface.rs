//! Terminal rendering of the feedback form for command-line use.

use std::io::Write;

use feedback_relay_application::FormSurface;
use feedback_relay_domain::{FormFields, StatusKind, SubmissionPhase};
use tracing::{debug, warn};

/// Form surface that prints status messages as lines to a writer.
pub struct TerminalFormSurface<W: Write + Send> {
    fields: FormFields,
    app_name: Option<String>,
    submit_label: String,
    submit_enabled: bool,
    status: Option<(StatusKind, String)>,
    output: W,
}

impl<W: Write + Send> TerminalFormSurface<W> {
    /// Creates a surface for the given fields.
    #[must_use]
    pub fn new(
        fields: FormFields,
        app_name: Option<String>,
        submit_label: impl Into<String>,
        output: W,
    ) -> Self {
        Self {
            fields,
            app_name,
            submit_label: submit_label.into(),
            submit_enabled: true,
            status: None,
            output,
        }
    }

    /// Returns the visible status, if any.
    #[must_use]
    pub fn status(&self) -> Option<(StatusKind, &str)> {
        self.status
            .as_ref()
            .map(|(kind, message)| (*kind, message.as_str()))
    }

    /// Returns whether the submit control is enabled.
    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }

    /// Consumes the surface and returns its writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<W: Write + Send> FormSurface for TerminalFormSurface<W> {
    fn show_status(&mut self, kind: StatusKind, message: &str) {
        if let Err(error) = writeln!(self.output, "[{}] {message}", kind.as_str()) {
            warn!(error = %error, "failed to print feedback status");
        }
        self.status = Some((kind, message.to_owned()));
    }

    fn hide_status(&mut self) {
        self.status = None;
    }

    fn submit_label(&self) -> Option<String> {
        Some(self.submit_label.clone())
    }

    fn set_submit_control(&mut self, label: &str, enabled: bool) {
        self.submit_label = label.to_owned();
        self.submit_enabled = enabled;
        debug!(label, enabled, "submit control updated");
    }

    fn app_name(&self) -> Option<String> {
        self.app_name.clone()
    }

    fn fields(&self) -> &FormFields {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    fn phase_changed(&mut self, phase: SubmissionPhase) {
        if phase == SubmissionPhase::Submitting {
            if let Err(error) = writeln!(self.output, "{}", self.submit_label) {
                warn!(error = %error, "failed to print submit label");
            }
        }
    }
}
