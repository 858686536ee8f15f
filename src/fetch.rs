// Copyright 2025 Cowboy AI, LLC.

//! Fetch boundary for the character pipeline
//!
//! Fetching raw text is an external, asynchronous concern. The source is
//! awaited first and the text is handed to the synchronous pipelines
//! afterwards. The containers themselves never suspend.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::either::Either;
use crate::errors::DomainError;
use crate::fp_monad::Monad;
use crate::pipelines::character_height;

/// Source of raw response text keyed by record id
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResponseSource: Send + Sync {
    /// Fetch the raw response body for `id`
    async fn fetch_by_id(&self, id: u64) -> anyhow::Result<String>;

    /// Name used when reporting failures from this source
    fn service_name(&self) -> String {
        "response source".to_string()
    }
}

/// In-memory response source for testing and demos
#[derive(Clone, Default)]
pub struct InMemoryResponseSource {
    responses: Arc<RwLock<HashMap<u64, String>>>,
}

impl InMemoryResponseSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the body returned for `id`
    pub async fn insert(&self, id: u64, body: impl Into<String>) {
        let mut responses = self.responses.write().await;
        responses.insert(id, body.into());
    }
}

#[async_trait]
impl ResponseSource for InMemoryResponseSource {
    async fn fetch_by_id(&self, id: u64) -> anyhow::Result<String> {
        let responses = self.responses.read().await;
        match responses.get(&id) {
            Some(body) => Ok(body.clone()),
            None => {
                warn!(id, "No response recorded");
                anyhow::bail!("no response recorded for id {id}")
            }
        }
    }

    fn service_name(&self) -> String {
        "in-memory".to_string()
    }
}

/// Fetch a character and read its height
///
/// A fetch failure becomes [`DomainError::ExternalServiceError`]. Every
/// other outcome is decided by [`character_height`].
pub async fn fetch_character_height<S>(source: &S, id: u64) -> Either<DomainError, u32>
where
    S: ResponseSource + ?Sized,
{
    let fetched = source.fetch_by_id(id).await;
    debug!(id, ok = fetched.is_ok(), "Fetched character response");

    Either::from(fetched)
        .map_failure(|err| DomainError::ExternalServiceError {
            service: source.service_name(),
            message: err.to_string(),
        })
        .bind(|body| character_height(&body))
}
