//! Feedback Relay command-line submitter.

#![forbid(unsafe_code)]

mod cli_config;

use std::env;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use feedback_relay_application::{RateLimitService, SubmissionController};
use feedback_relay_core::AppError;
use feedback_relay_domain::SubmissionOutcome;
use feedback_relay_infrastructure::{
    HttpFeedbackTransport, JsonFileSubmissionLogStore, SystemClock, TerminalFormSurface,
};
use tracing::info;

use crate::cli_config::{CliConfig, init_tracing, parse_fields};

#[tokio::main]
async fn main() -> Result<ExitCode, AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = CliConfig::load()?;
    let fields = parse_fields(env::args().skip(1))?;

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_seconds))
        .build()
        .map_err(|error| AppError::Internal(format!("failed to build HTTP client: {error}")))?;

    let messages = Arc::new(config.messages.clone());
    let rate_limiter = RateLimitService::new(
        Arc::new(JsonFileSubmissionLogStore::new(config.store_path.clone())),
        Arc::new(SystemClock::new()),
        config.policy,
        messages.clone(),
    );
    let controller = SubmissionController::new(
        rate_limiter,
        Arc::new(HttpFeedbackTransport::new(
            http_client,
            config.endpoint.clone(),
        )),
        messages.clone(),
    )
    .with_designated_field(config.designated_field.clone());

    info!(
        endpoint = %config.endpoint,
        store_path = %config.store_path.display(),
        field_count = fields.len(),
        "submitting feedback"
    );

    let mut surface = TerminalFormSurface::new(
        fields,
        config.app_name.clone(),
        messages.submit_button_text.clone(),
        std::io::stdout(),
    );

    let exit_code = match controller.submit(&mut surface).await {
        SubmissionOutcome::Sent => ExitCode::SUCCESS,
        SubmissionOutcome::Failed => ExitCode::from(1),
        SubmissionOutcome::Blocked { .. } => ExitCode::from(2),
    };

    Ok(exit_code)
}
