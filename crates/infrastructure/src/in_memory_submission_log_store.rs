use async_trait::async_trait;
use feedback_relay_application::SubmissionLogStore;
use feedback_relay_core::AppResult;
use feedback_relay_domain::SubmissionLog;
use tokio::sync::RwLock;

use crate::submission_log_codec::{decode, encode};

/// In-memory store adapter holding the encoded log like a storage slot.
#[derive(Default)]
pub struct InMemorySubmissionLogStore {
    raw: RwLock<Option<String>>,
}

impl InMemorySubmissionLogStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with raw stored text.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: RwLock::new(Some(raw.into())),
        }
    }

    /// Returns the raw stored text.
    pub async fn raw(&self) -> Option<String> {
        self.raw.read().await.clone()
    }
}

#[async_trait]
impl SubmissionLogStore for InMemorySubmissionLogStore {
    async fn load(&self) -> AppResult<Option<SubmissionLog>> {
        self.raw.read().await.as_deref().map(decode).transpose()
    }

    async fn save(&self, log: &SubmissionLog) -> AppResult<()> {
        let encoded = encode(log)?;
        *self.raw.write().await = Some(encoded);
        Ok(())
    }
}
