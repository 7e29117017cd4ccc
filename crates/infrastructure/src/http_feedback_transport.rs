use async_trait::async_trait;
use feedback_relay_application::FeedbackTransport;
use feedback_relay_core::{AppError, AppResult};
use feedback_relay_domain::FormFields;
use reqwest::header;
use reqwest::multipart::Form;
use tracing::debug;

/// HTTP implementation posting the form to a Formspree-style endpoint.
pub struct HttpFeedbackTransport {
    http_client: reqwest::Client,
    endpoint: String,
}

impl HttpFeedbackTransport {
    /// Creates a transport for the given endpoint URL.
    #[must_use]
    pub fn new(http_client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http_client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl FeedbackTransport for HttpFeedbackTransport {
    async fn deliver(&self, fields: &FormFields) -> AppResult<()> {
        let form = fields.iter().fold(Form::new(), |form, field| {
            form.text(field.name().to_owned(), field.value().to_owned())
        });

        let response = self
            .http_client
            .post(self.endpoint.as_str())
            .header(header::ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(|error| {
                AppError::Transport(format!("failed to call feedback endpoint: {error}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<body unavailable>".to_owned());
            return Err(AppError::Transport(format!(
                "feedback endpoint returned status {}: {body}",
                status.as_u16()
            )));
        }

        debug!(
            endpoint = %self.endpoint,
            status = status.as_u16(),
            "feedback endpoint accepted submission"
        );
        Ok(())
    }
}
