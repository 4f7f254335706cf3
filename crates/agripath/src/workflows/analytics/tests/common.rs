use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::workflows::analytics::{
    AnalyticsEvent, AnalyticsIngestService, AnalyticsRepository, AnalyticsRepositoryError,
    DeliveryError, EventBatch, EventSink, EventType, StoredEvent,
};

pub(super) fn received_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn page_view(session: &str, path: &str) -> AnalyticsEvent {
    AnalyticsEvent::new(session, EventType::PageView, path)
}

pub(super) fn event(session: &str, event_type: EventType) -> AnalyticsEvent {
    AnalyticsEvent::new(session, event_type, "/career-quiz")
}

pub(super) fn batch(events: Vec<AnalyticsEvent>) -> EventBatch {
    EventBatch { events }
}

pub(super) fn service(
    repository: Arc<MemoryRepository>,
    max_batch: usize,
) -> AnalyticsIngestService<MemoryRepository> {
    AnalyticsIngestService::new(repository, max_batch)
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    events: Mutex<Vec<StoredEvent>>,
}

impl MemoryRepository {
    pub(super) fn stored(&self) -> Vec<StoredEvent> {
        self.events.lock().expect("events mutex poisoned").clone()
    }
}

impl AnalyticsRepository for MemoryRepository {
    fn append(&self, events: Vec<StoredEvent>) -> Result<usize, AnalyticsRepositoryError> {
        let count = events.len();
        self.events
            .lock()
            .expect("events mutex poisoned")
            .extend(events);
        Ok(count)
    }

    fn all(&self) -> Result<Vec<StoredEvent>, AnalyticsRepositoryError> {
        Ok(self.stored())
    }
}

pub(super) struct UnavailableRepository;

impl AnalyticsRepository for UnavailableRepository {
    fn append(&self, _events: Vec<StoredEvent>) -> Result<usize, AnalyticsRepositoryError> {
        Err(AnalyticsRepositoryError::Unavailable("disk full".to_string()))
    }

    fn all(&self) -> Result<Vec<StoredEvent>, AnalyticsRepositoryError> {
        Err(AnalyticsRepositoryError::Unavailable("disk full".to_string()))
    }
}

/// Sink that records every delivery and beacon; can be told to fail the next delivery.
#[derive(Default)]
pub(super) struct RecordingSink {
    delivered: Mutex<Vec<EventBatch>>,
    beacons: Mutex<Vec<EventBatch>>,
    attempts: AtomicUsize,
    fail_next: AtomicBool,
}

impl RecordingSink {
    pub(super) fn delivered(&self) -> Vec<EventBatch> {
        self.delivered.lock().expect("sink mutex poisoned").clone()
    }

    pub(super) fn beacons(&self) -> Vec<EventBatch> {
        self.beacons.lock().expect("sink mutex poisoned").clone()
    }

    pub(super) fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub(super) fn fail_next_delivery(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl EventSink for RecordingSink {
    async fn deliver(&self, batch: &EventBatch) -> Result<(), DeliveryError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(DeliveryError::Unavailable("endpoint offline".to_string()));
        }
        self.delivered
            .lock()
            .expect("sink mutex poisoned")
            .push(batch.clone());
        Ok(())
    }

    fn beacon(&self, batch: EventBatch) {
        self.beacons
            .lock()
            .expect("sink mutex poisoned")
            .push(batch);
    }
}
