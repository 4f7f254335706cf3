use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier wrapper for a browser session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    PageView,
    PageExit,
    QuizStarted,
    QuizStepCompleted,
    QuizCompleted,
    QuizRetake,
    EnrollClick,
    AuthPromptShown,
    ToolOpened,
    CtaClick,
}

impl EventType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PageView => "page_view",
            Self::PageExit => "page_exit",
            Self::QuizStarted => "quiz_started",
            Self::QuizStepCompleted => "quiz_step_completed",
            Self::QuizCompleted => "quiz_completed",
            Self::QuizRetake => "quiz_retake",
            Self::EnrollClick => "enroll_click",
            Self::AuthPromptShown => "auth_prompt_shown",
            Self::ToolOpened => "tool_opened",
            Self::CtaClick => "cta_click",
        }
    }
}

/// Client-side event as posted by the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    pub session_id: SessionId,
    pub event_type: EventType,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl AnalyticsEvent {
    pub fn new(session_id: impl Into<String>, event_type: EventType, path: impl Into<String>) -> Self {
        Self {
            session_id: SessionId(session_id.into()),
            event_type,
            path: path.into(),
            referrer_path: None,
            duration_seconds: None,
            metadata: None,
            timestamp: None,
        }
    }
}

/// Wire envelope shared by the batcher and the ingestion endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventBatch {
    pub events: Vec<AnalyticsEvent>,
}

/// Event as persisted after ingestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredEvent {
    #[serde(flatten)]
    pub event: AnalyticsEvent,
    pub received_at: DateTime<Utc>,
}
