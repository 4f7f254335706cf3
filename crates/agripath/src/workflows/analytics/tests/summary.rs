use std::sync::Arc;

use super::common::*;
use crate::workflows::analytics::{AnalyticsSummary, EventType, DEFAULT_MAX_BATCH};

#[test]
fn summary_reports_funnel_and_top_paths() {
    let repository = Arc::new(MemoryRepository::default());
    let service = service(repository, DEFAULT_MAX_BATCH);

    service
        .ingest_at(
            batch(vec![
                page_view("s-1", "/"),
                page_view("s-1", "/career-quiz"),
                event("s-1", EventType::QuizStarted),
                event("s-1", EventType::QuizCompleted),
                page_view("s-2", "/"),
                page_view("s-2", "/enroll"),
                event("s-2", EventType::QuizStarted),
                page_view("s-3", "/career-quiz"),
                page_view("s-3", "/"),
                event("s-3", EventType::QuizStarted),
                event("s-3", EventType::QuizStarted),
                event("s-3", EventType::QuizCompleted),
            ]),
            received_at(),
        )
        .expect("batch accepted");

    let summary = service.summary().expect("summary");
    assert_eq!(summary.total_events, 12);
    assert_eq!(summary.unique_sessions, 3);
    assert_eq!(summary.events_by_type.get(&EventType::PageView), Some(&6));
    assert_eq!(summary.quiz_started, 4);
    assert_eq!(summary.quiz_completed, 2);
    assert!((summary.quiz_completion_rate - 0.5).abs() < f64::EPSILON);

    let top: Vec<(&str, usize)> = summary
        .top_paths
        .iter()
        .map(|entry| (entry.path.as_str(), entry.views))
        .collect();
    assert_eq!(top, vec![("/", 3), ("/career-quiz", 2), ("/enroll", 1)]);
}

#[test]
fn empty_store_has_zero_completion_rate() {
    let summary = AnalyticsSummary::from_events(&[]);
    assert_eq!(summary.total_events, 0);
    assert_eq!(summary.quiz_completion_rate, 0.0);
    assert!(summary.top_paths.is_empty());
}

#[test]
fn top_paths_keep_five_and_break_ties_alphabetically() {
    let repository = Arc::new(MemoryRepository::default());
    let service = service(repository, DEFAULT_MAX_BATCH);
    let paths = ["/f", "/e", "/d", "/c", "/b", "/a"];
    let events = paths.iter().map(|path| page_view("s-1", path)).collect();
    service.ingest(batch(events)).expect("batch accepted");

    let summary = service.summary().expect("summary");
    let top: Vec<&str> = summary
        .top_paths
        .iter()
        .map(|entry| entry.path.as_str())
        .collect();
    assert_eq!(top, vec!["/a", "/b", "/c", "/d", "/e"]);
}

#[test]
fn summary_serializes_event_types_as_keys() {
    let summary = AnalyticsSummary::from_events(&[]);
    let value = serde_json::to_value(&summary).expect("serializable");
    assert!(value.get("eventsByType").is_some());
    assert!(value.get("quizCompletionRate").is_some());
}
