//! Analytics collection: server-side ingestion of browser event batches and the
//! client-side batcher that queues events and ships them in batches.

pub mod batcher;
pub mod domain;
pub mod http_sink;
pub mod repository;
pub mod router;
mod service;
pub mod summary;

#[cfg(test)]
mod tests;

pub use batcher::{
    BatcherClosed, BatcherConfig, DeliveryError, EventBatcher, EventSink,
    DEFAULT_FLUSH_THRESHOLD, DEFAULT_IDLE_FLUSH,
};
pub use domain::{AnalyticsEvent, EventBatch, EventType, SessionId, StoredEvent};
pub use http_sink::HttpEventSink;
pub use repository::{AnalyticsRepository, AnalyticsRepositoryError};
pub use router::analytics_router;
pub use service::{AnalyticsIngestService, IngestError, DEFAULT_MAX_BATCH};
pub use summary::{AnalyticsSummary, PathViews};
