pub mod analytics;
pub mod quiz;
