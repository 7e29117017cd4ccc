use std::env;
use std::path::PathBuf;
use std::time::Duration;

use feedback_relay_core::AppError;
use feedback_relay_domain::{
    DEFAULT_COOLDOWN, DEFAULT_DESIGNATED_FIELD, DEFAULT_MAX_SUBMISSIONS_PER_DAY,
    DEFAULT_RETENTION, FeedbackMessages, FormFields, RateLimitPolicy,
};
use tracing_subscriber::EnvFilter;
use url::Url;

const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/xjggvnzz";
const DEFAULT_STORE_PATH: &str = ".feedback-relay/storage.json";

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub endpoint: String,
    pub store_path: PathBuf,
    pub app_name: Option<String>,
    pub designated_field: String,
    pub http_timeout_seconds: u64,
    pub policy: RateLimitPolicy,
    pub messages: FeedbackMessages,
}

impl CliConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let endpoint = lookup("FEEDBACK_ENDPOINT")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned());
        validate_endpoint(endpoint.as_str())?;

        let store_path = lookup("FEEDBACK_STORE_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));
        let app_name = lookup("FEEDBACK_APP_NAME")
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty());
        let designated_field = lookup("FEEDBACK_DESIGNATED_FIELD")
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_DESIGNATED_FIELD.to_owned());

        let http_timeout_seconds = parse_u64(&lookup, "FEEDBACK_HTTP_TIMEOUT_SECONDS", 15)?;
        if http_timeout_seconds == 0 {
            return Err(AppError::Validation(
                "FEEDBACK_HTTP_TIMEOUT_SECONDS must be greater than zero".to_owned(),
            ));
        }

        let cooldown_hours =
            parse_u64(&lookup, "FEEDBACK_COOLDOWN_HOURS", DEFAULT_COOLDOWN.as_secs() / 3600)?;
        let max_per_day = parse_u64(
            &lookup,
            "FEEDBACK_MAX_PER_DAY",
            DEFAULT_MAX_SUBMISSIONS_PER_DAY as u64,
        )?;
        let retention_days = parse_u64(
            &lookup,
            "FEEDBACK_RETENTION_DAYS",
            DEFAULT_RETENTION.as_secs() / 86_400,
        )?;
        let policy = RateLimitPolicy::new(
            Duration::from_secs(cooldown_hours.saturating_mul(3600)),
            usize::try_from(max_per_day).map_err(|error| {
                AppError::Validation(format!("invalid FEEDBACK_MAX_PER_DAY: {error}"))
            })?,
            Duration::from_secs(retention_days.saturating_mul(86_400)),
        )?;

        let messages = match lookup("FEEDBACK_MESSAGES_PATH").filter(|value| !value.is_empty()) {
            Some(path) => load_messages(path.as_str())?,
            None => FeedbackMessages::default(),
        };

        Ok(Self {
            endpoint,
            store_path,
            app_name,
            designated_field,
            http_timeout_seconds,
            policy,
            messages,
        })
    }
}

/// Builds the form from `name=value` arguments, keeping argument order.
pub fn parse_fields(arguments: impl IntoIterator<Item = String>) -> Result<FormFields, AppError> {
    let mut fields = FormFields::new();
    for argument in arguments {
        let (name, value) = argument.split_once('=').ok_or_else(|| {
            AppError::Validation(format!(
                "expected field argument as name=value, got '{argument}'"
            ))
        })?;
        fields.push(name.trim(), value)?;
    }

    if fields.is_empty() {
        return Err(AppError::Validation(
            "usage: feedback-relay email=<address> subject=<text> message=<text>".to_owned(),
        ));
    }

    Ok(fields)
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn validate_endpoint(endpoint: &str) -> Result<(), AppError> {
    let url = Url::parse(endpoint).map_err(|error| {
        AppError::Validation(format!("invalid FEEDBACK_ENDPOINT '{endpoint}': {error}"))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::Validation(format!(
            "FEEDBACK_ENDPOINT must use http or https, got '{}'",
            url.scheme()
        )));
    }

    Ok(())
}

fn load_messages(path: &str) -> Result<FeedbackMessages, AppError> {
    let contents = std::fs::read_to_string(path).map_err(|error| {
        AppError::Validation(format!("failed to read FEEDBACK_MESSAGES_PATH '{path}': {error}"))
    })?;

    serde_json::from_str(contents.as_str()).map_err(|error| {
        AppError::Validation(format!("invalid messages file '{path}': {error}"))
    })
}

fn parse_u64(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u64,
) -> Result<u64, AppError> {
    match lookup(name) {
        Some(value) => value.trim().parse::<u64>().map_err(|error| {
            AppError::Validation(format!("invalid {name} value '{value}': {error}"))
        }),
        None => Ok(default),
    }
}
