use super::domain::StoredEvent;

/// Storage abstraction for ingested events.
pub trait AnalyticsRepository: Send + Sync {
    fn append(&self, events: Vec<StoredEvent>) -> Result<usize, AnalyticsRepositoryError>;
    fn all(&self) -> Result<Vec<StoredEvent>, AnalyticsRepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AnalyticsRepositoryError {
    #[error("analytics store unavailable: {0}")]
    Unavailable(String),
}
