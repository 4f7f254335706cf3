use agripath::workflows::analytics::{AnalyticsRepository, AnalyticsRepositoryError, StoredEvent};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAnalyticsRepository {
    events: Arc<Mutex<Vec<StoredEvent>>>,
}

impl AnalyticsRepository for InMemoryAnalyticsRepository {
    fn append(&self, events: Vec<StoredEvent>) -> Result<usize, AnalyticsRepositoryError> {
        let mut guard = self.events.lock().expect("analytics mutex poisoned");
        let count = events.len();
        guard.extend(events);
        Ok(count)
    }

    fn all(&self) -> Result<Vec<StoredEvent>, AnalyticsRepositoryError> {
        let guard = self.events.lock().expect("analytics mutex poisoned");
        Ok(guard.clone())
    }
}
