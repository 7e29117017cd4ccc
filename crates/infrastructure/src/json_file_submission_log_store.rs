//! File-backed key-value store for the submission log.
//!
//! The file holds one JSON object mapping keys to string values, the same
//! shape browser local storage exposes. Only the configured key is touched;
//! other entries survive every write.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use feedback_relay_application::SubmissionLogStore;
use feedback_relay_core::{AppError, AppResult};
use feedback_relay_domain::SubmissionLog;
use serde_json::{Map, Value};
use tracing::warn;
use uuid::Uuid;

use crate::submission_log_codec::{DEFAULT_STORAGE_KEY, decode, encode};

/// JSON file implementation of the submission log store port.
#[derive(Debug, Clone)]
pub struct JsonFileSubmissionLogStore {
    path: PathBuf,
    key: String,
}

impl JsonFileSubmissionLogStore {
    /// Creates a store using the default storage key.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_key(path, DEFAULT_STORAGE_KEY)
    }

    /// Creates a store that keeps the log under a custom key.
    #[must_use]
    pub fn with_key(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    async fn read_entries(&self) -> AppResult<Option<Map<String, Value>>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(AppError::Storage(format!(
                    "failed to read '{}': {error}",
                    self.path.display()
                )));
            }
        };

        serde_json::from_str::<Map<String, Value>>(contents.as_str())
            .map(Some)
            .map_err(|error| {
                AppError::Storage(format!(
                    "'{}' is not a JSON object: {error}",
                    self.path.display()
                ))
            })
    }

    async fn write_entries(&self, entries: &Map<String, Value>) -> AppResult<()> {
        let contents = serde_json::to_string_pretty(entries)
            .map_err(|error| AppError::Storage(format!("failed to encode store: {error}")))?;

        if let Some(parent) = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            tokio::fs::create_dir_all(parent).await.map_err(|error| {
                AppError::Storage(format!(
                    "failed to create '{}': {error}",
                    parent.display()
                ))
            })?;
        }

        let staging = self
            .path
            .with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
        tokio::fs::write(&staging, contents).await.map_err(|error| {
            AppError::Storage(format!("failed to write '{}': {error}", staging.display()))
        })?;
        if let Err(error) = tokio::fs::rename(&staging, &self.path).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(AppError::Storage(format!(
                "failed to replace '{}': {error}",
                self.path.display()
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl SubmissionLogStore for JsonFileSubmissionLogStore {
    async fn load(&self) -> AppResult<Option<SubmissionLog>> {
        let Some(entries) = self.read_entries().await? else {
            return Ok(None);
        };

        match entries.get(self.key.as_str()) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(raw)) => decode(raw.as_str()).map(Some),
            Some(other) => Err(AppError::Storage(format!(
                "value under '{}' must be a string, got {other}",
                self.key
            ))),
        }
    }

    async fn save(&self, log: &SubmissionLog) -> AppResult<()> {
        let mut entries = match self.read_entries().await {
            Ok(entries) => entries.unwrap_or_default(),
            Err(error) => {
                warn!(
                    path = %self.path.display(),
                    error = %error,
                    "replacing unreadable key-value store"
                );
                Map::new()
            }
        };

        entries.insert(self.key.clone(), Value::String(encode(log)?));
        self.write_entries(&entries).await
    }
}
