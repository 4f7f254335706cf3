use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use super::domain::{AnalyticsEvent, EventBatch, StoredEvent};
use super::repository::{AnalyticsRepository, AnalyticsRepositoryError};
use super::summary::AnalyticsSummary;

pub const DEFAULT_MAX_BATCH: usize = 50;

/// Validates and stores event batches posted by the browser.
pub struct AnalyticsIngestService<R> {
    repository: Arc<R>,
    max_batch: usize,
}

impl<R> AnalyticsIngestService<R>
where
    R: AnalyticsRepository + 'static,
{
    pub fn new(repository: Arc<R>, max_batch: usize) -> Self {
        Self {
            repository,
            max_batch,
        }
    }

    pub fn ingest(&self, batch: EventBatch) -> Result<usize, IngestError> {
        self.ingest_at(batch, Utc::now())
    }

    /// Ingest with an explicit receive time; the whole batch is rejected if any event is invalid.
    pub fn ingest_at(
        &self,
        batch: EventBatch,
        received_at: DateTime<Utc>,
    ) -> Result<usize, IngestError> {
        let size = batch.events.len();
        if size == 0 {
            return Err(IngestError::EmptyBatch);
        }
        if size > self.max_batch {
            return Err(IngestError::BatchTooLarge {
                size,
                max: self.max_batch,
            });
        }

        for (index, event) in batch.events.iter().enumerate() {
            validate_event(event).map_err(|reason| IngestError::InvalidEvent { index, reason })?;
        }

        let stored = batch
            .events
            .into_iter()
            .map(|mut event| {
                event.timestamp.get_or_insert(received_at);
                StoredEvent { event, received_at }
            })
            .collect();

        let accepted = self.repository.append(stored)?;
        info!(accepted, "analytics batch ingested");
        Ok(accepted)
    }

    pub fn summary(&self) -> Result<AnalyticsSummary, IngestError> {
        let events = self.repository.all()?;
        Ok(AnalyticsSummary::from_events(&events))
    }
}

fn validate_event(event: &AnalyticsEvent) -> Result<(), &'static str> {
    if event.session_id.0.trim().is_empty() {
        return Err("sessionId must not be blank");
    }
    if !event.path.starts_with('/') {
        return Err("path must start with '/'");
    }
    if let Some(referrer) = &event.referrer_path {
        if !referrer.starts_with('/') {
            return Err("referrerPath must start with '/'");
        }
    }
    if let Some(duration) = event.duration_seconds {
        if !duration.is_finite() || duration < 0.0 {
            return Err("durationSeconds must be a non-negative number");
        }
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("event batch is empty")]
    EmptyBatch,
    #[error("event batch of {size} exceeds the limit of {max}")]
    BatchTooLarge { size: usize, max: usize },
    #[error("event {index} rejected: {reason}")]
    InvalidEvent { index: usize, reason: &'static str },
    #[error(transparent)]
    Repository(#[from] AnalyticsRepositoryError),
}
