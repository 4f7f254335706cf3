//! Agricultural career guidance backend: questionnaire scoring plus analytics collection.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
