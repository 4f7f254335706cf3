use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use super::domain::{EventType, StoredEvent};

const TOP_PATH_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathViews {
    pub path: String,
    pub views: usize,
}

/// Funnel snapshot over every stored event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_events: usize,
    pub unique_sessions: usize,
    pub events_by_type: BTreeMap<EventType, usize>,
    pub top_paths: Vec<PathViews>,
    pub quiz_started: usize,
    pub quiz_completed: usize,
    pub quiz_completion_rate: f64,
}

impl AnalyticsSummary {
    pub fn from_events(events: &[StoredEvent]) -> Self {
        let mut sessions = BTreeSet::new();
        let mut events_by_type: BTreeMap<EventType, usize> = BTreeMap::new();
        let mut page_views: BTreeMap<&str, usize> = BTreeMap::new();

        for stored in events {
            let event = &stored.event;
            sessions.insert(&event.session_id);
            *events_by_type.entry(event.event_type).or_default() += 1;
            if event.event_type == EventType::PageView {
                *page_views.entry(event.path.as_str()).or_default() += 1;
            }
        }

        let mut top_paths: Vec<PathViews> = page_views
            .into_iter()
            .map(|(path, views)| PathViews {
                path: path.to_string(),
                views,
            })
            .collect();
        // BTreeMap order already breaks ties alphabetically; the sort is stable.
        top_paths.sort_by(|a, b| b.views.cmp(&a.views));
        top_paths.truncate(TOP_PATH_LIMIT);

        let quiz_started = events_by_type
            .get(&EventType::QuizStarted)
            .copied()
            .unwrap_or(0);
        let quiz_completed = events_by_type
            .get(&EventType::QuizCompleted)
            .copied()
            .unwrap_or(0);
        let quiz_completion_rate = if quiz_started == 0 {
            0.0
        } else {
            quiz_completed as f64 / quiz_started as f64
        };

        Self {
            total_events: events.len(),
            unique_sessions: sessions.len(),
            events_by_type,
            top_paths,
            quiz_started,
            quiz_completed,
            quiz_completion_rate,
        }
    }
}
