use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::EventBatch;
use super::repository::AnalyticsRepository;
use super::service::{AnalyticsIngestService, IngestError};

/// Router builder exposing event ingestion and the funnel summary.
pub fn analytics_router<R>(service: Arc<AnalyticsIngestService<R>>) -> Router
where
    R: AnalyticsRepository + 'static,
{
    Router::new()
        .route("/api/v1/analytics/events", post(ingest_handler::<R>))
        .route("/api/v1/analytics/summary", get(summary_handler::<R>))
        .with_state(service)
}

pub(crate) async fn ingest_handler<R>(
    State(service): State<Arc<AnalyticsIngestService<R>>>,
    axum::Json(batch): axum::Json<EventBatch>,
) -> Response
where
    R: AnalyticsRepository + 'static,
{
    match service.ingest(batch) {
        Ok(accepted) => {
            (StatusCode::ACCEPTED, axum::Json(json!({ "accepted": accepted }))).into_response()
        }
        Err(IngestError::Repository(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn summary_handler<R>(
    State(service): State<Arc<AnalyticsIngestService<R>>>,
) -> Response
where
    R: AnalyticsRepository + 'static,
{
    match service.summary() {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
