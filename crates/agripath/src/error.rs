use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::analytics::{DeliveryError, IngestError};
use crate::workflows::quiz::{QuizImportError, QuizValidationError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Payload(serde_json::Error),
    Quiz(QuizValidationError),
    Import(QuizImportError),
    Ingest(IngestError),
    Delivery(DeliveryError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Payload(err) => write!(f, "malformed payload: {}", err),
            AppError::Quiz(err) => write!(f, "invalid questionnaire: {}", err),
            AppError::Import(err) => write!(f, "import error: {}", err),
            AppError::Ingest(err) => write!(f, "analytics error: {}", err),
            AppError::Delivery(err) => write!(f, "analytics delivery error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Payload(err) => Some(err),
            AppError::Quiz(err) => Some(err),
            AppError::Import(err) => Some(err),
            AppError::Ingest(err) => Some(err),
            AppError::Delivery(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Quiz(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Payload(_) | AppError::Import(_) => StatusCode::BAD_REQUEST,
            AppError::Ingest(IngestError::Repository(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Ingest(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Delivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Payload(value)
    }
}

impl From<QuizValidationError> for AppError {
    fn from(value: QuizValidationError) -> Self {
        Self::Quiz(value)
    }
}

impl From<QuizImportError> for AppError {
    fn from(value: QuizImportError) -> Self {
        Self::Import(value)
    }
}

impl From<IngestError> for AppError {
    fn from(value: IngestError) -> Self {
        Self::Ingest(value)
    }
}

impl From<DeliveryError> for AppError {
    fn from(value: DeliveryError) -> Self {
        Self::Delivery(value)
    }
}
