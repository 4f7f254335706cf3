use crate::infra::InMemoryAnalyticsRepository;
use agripath::config::{AnalyticsConfig, AppConfig};
use agripath::error::AppError;
use agripath::workflows::analytics::{
    AnalyticsEvent, AnalyticsIngestService, AnalyticsSummary, BatcherConfig, DeliveryError,
    EventBatch, EventBatcher, EventSink, EventType, HttpEventSink,
};
use agripath::workflows::quiz::domain::Priority::{self, *};
use agripath::workflows::quiz::{
    recommend, Course, QuizAnswer, QuizAnswers, QuizDraft, QuizResponseImporter, QuizResult,
    QuizSubmission, ReasonForCourse, RiskTolerance, Subject,
};
use async_trait::async_trait;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding a questionnaire submission
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Print the raw JSON result instead of the summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with one respondent per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the analytics batching walkthrough.
    #[arg(long)]
    pub(crate) skip_analytics: bool,
    /// Send the walkthrough events to ANALYTICS_ENDPOINT instead of an in-process store.
    #[arg(long)]
    pub(crate) http: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.answers)?;
    let submission: QuizSubmission = serde_json::from_str(&raw)?;
    let answers = submission.validate()?;
    let result = recommend(&answers);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_result(&result);
    }
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let responses = QuizResponseImporter::from_path(&args.csv)?;
    let mut scored = 0;

    for response in &responses {
        match &response.outcome {
            Ok(result) => {
                scored += 1;
                println!(
                    "{}: {} ({} confidence, gap {})",
                    response.respondent,
                    result.recommended_path,
                    result.confidence_level.label(),
                    result.score_gap
                );
            }
            Err(err) => println!("{}: rejected ({})", response.respondent, err),
        }
    }

    println!("{scored} of {} respondents scored", responses.len());
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    println!("Career path recommendation demo");
    for (title, answers) in reference_profiles()? {
        println!("\n{title}");
        render_result(&recommend(&answers));
    }

    if args.skip_analytics {
        return Ok(());
    }

    println!("\nAnalytics batching walkthrough");
    if args.http {
        let sent = http_walkthrough(&config.analytics).await?;
        println!("- {sent} events handed to {}", config.analytics.endpoint);
        return Ok(());
    }

    let summary = in_process_walkthrough(&config.analytics).await?;
    println!(
        "- {} events from {} session(s)",
        summary.total_events, summary.unique_sessions
    );
    println!(
        "- quiz funnel: {} started | {} completed | {:.0}% completion",
        summary.quiz_started,
        summary.quiz_completed,
        summary.quiz_completion_rate * 100.0
    );
    for entry in &summary.top_paths {
        println!("  - {}: {} view(s)", entry.path, entry.views);
    }

    Ok(())
}

async fn in_process_walkthrough(config: &AnalyticsConfig) -> Result<AnalyticsSummary, AppError> {
    let repository = Arc::new(InMemoryAnalyticsRepository::default());
    let service = Arc::new(AnalyticsIngestService::new(repository, config.max_batch));
    let sink = Arc::new(IngestSink {
        service: service.clone(),
    });
    replay_session(sink, config.batcher()).await;
    Ok(service.summary()?)
}

async fn http_walkthrough(config: &AnalyticsConfig) -> Result<usize, AppError> {
    let sink = Arc::new(HttpEventSink::new(config.endpoint.as_str())?);
    Ok(replay_session(sink, config.batcher()).await)
}

/// Tracks one scripted visitor session and returns how many events were queued.
async fn replay_session<S: EventSink>(sink: Arc<S>, config: BatcherConfig) -> usize {
    let (batcher, task) = EventBatcher::spawn(sink, config);

    let mut tracked = 0;
    for event in demo_session_events() {
        if batcher.track(event).is_err() {
            warn!("batcher stopped before the demo finished");
            break;
        }
        tracked += 1;
    }
    if let Err(err) = batcher.flush().await {
        warn!(%err, "final flush skipped");
    }
    batcher.unload();
    if let Err(err) = task.await {
        warn!(%err, "batcher task ended abnormally");
    }
    tracked
}

fn demo_session_events() -> Vec<AnalyticsEvent> {
    let session = "demo-session";
    let mut events = vec![
        AnalyticsEvent::new(session, EventType::PageView, "/"),
        AnalyticsEvent::new(session, EventType::PageView, "/career-quiz"),
        AnalyticsEvent::new(session, EventType::QuizStarted, "/career-quiz"),
    ];
    events.extend(
        (1..=6).map(|_| AnalyticsEvent::new(session, EventType::QuizStepCompleted, "/career-quiz")),
    );
    events.push(AnalyticsEvent::new(
        session,
        EventType::QuizCompleted,
        "/career-quiz",
    ));
    events.push(AnalyticsEvent::new(session, EventType::EnrollClick, "/enroll"));
    events
}

/// Hands batches straight to the in-process ingestion service.
struct IngestSink {
    service: Arc<AnalyticsIngestService<InMemoryAnalyticsRepository>>,
}

#[async_trait]
impl EventSink for IngestSink {
    async fn deliver(&self, batch: &EventBatch) -> Result<(), DeliveryError> {
        self.service
            .ingest(batch.clone())
            .map(|_| ())
            .map_err(|err| DeliveryError::Unavailable(err.to_string()))
    }

    fn beacon(&self, batch: EventBatch) {
        if let Err(err) = self.service.ingest(batch) {
            warn!(%err, "beacon batch rejected");
        }
    }
}

fn render_result(result: &QuizResult) {
    println!(
        "- Recommended path: {} ({} confidence, gap {})",
        result.recommended_path,
        result.confidence_level.label(),
        result.score_gap
    );
    println!("  {}", result.justification);
    let scores: Vec<String> = result
        .path_scores
        .iter()
        .map(|(path, score)| format!("{path} {score}"))
        .collect();
    println!("  Scores: {}", scores.join(" | "));
    if !result.subject_clusters.is_empty() {
        println!("  Subject clusters: {}", result.subject_clusters.join(", "));
    }
    println!("  Time horizon: {}", result.time_horizon);
    for step in &result.next_steps {
        println!("  - {step}");
    }
    for warning in &result.warnings {
        println!("  ! {warning}");
    }
}

fn reference_profiles() -> Result<Vec<(&'static str, QuizAnswers)>, AppError> {
    let public_service = draft(
        Course::BscAgriculture,
        3,
        RiskTolerance::Steady,
        [
            PrestigeOfGovtJob,
            JobSecurity,
            InnovativeWork,
            Salary,
            WorkLifeBalance,
            CareerGrowth,
            TeachingAndMentoring,
            IntellectualFreedom,
            LocationFlexibility,
            ForeignPlacement,
        ],
        Some(5),
    );
    let steady_entrepreneur = draft(
        Course::BscHorticulture,
        1,
        RiskTolerance::Steady,
        [
            CareerGrowth,
            LocationFlexibility,
            ForeignPlacement,
            Salary,
            InnovativeWork,
            IntellectualFreedom,
            TeachingAndMentoring,
            JobSecurity,
            WorkLifeBalance,
            PrestigeOfGovtJob,
        ],
        None,
    );
    let keen_scientist = draft(
        Course::BscAgriculture,
        2,
        RiskTolerance::ImpactOverIncome,
        [
            CareerGrowth,
            Salary,
            LocationFlexibility,
            IntellectualFreedom,
            ForeignPlacement,
            PrestigeOfGovtJob,
            TeachingAndMentoring,
            WorkLifeBalance,
            InnovativeWork,
            JobSecurity,
        ],
        Some(9),
    );

    Ok(vec![
        (
            "Third-year student who values prestige and security",
            public_service.finalize()?,
        ),
        (
            "First-year student chasing growth but wanting steady income",
            steady_entrepreneur.finalize()?,
        ),
        (
            "Second-year student who loves every technical subject",
            keen_scientist.finalize()?,
        ),
    ])
}

fn draft(
    course: Course,
    year: u8,
    risk: RiskTolerance,
    order: [Priority; 10],
    uniform_rating: Option<u8>,
) -> QuizDraft {
    let mut draft = QuizDraft::new()
        .apply(QuizAnswer::Course(course))
        .apply(QuizAnswer::YearOfStudy(year))
        .apply(QuizAnswer::ReasonForCourse(ReasonForCourse::GenuineInterest))
        .apply(QuizAnswer::PreferredWorkType(5))
        .apply(QuizAnswer::PrioritiesRanked(order.to_vec()))
        .apply(QuizAnswer::RiskTolerance(risk));

    if let Some(rating) = uniform_rating {
        for subject in Subject::technical() {
            draft = draft.apply(QuizAnswer::SubjectRating { subject, rating });
        }
    }
    draft
}

#[cfg(test)]
mod tests {
    use super::*;
    use agripath::workflows::analytics::{analytics_router, AnalyticsRepository};
    use agripath::workflows::quiz::CareerPath;

    #[test]
    fn reference_profiles_cover_three_paths() {
        let profiles = reference_profiles().expect("profiles validate");
        let paths: Vec<CareerPath> = profiles
            .iter()
            .map(|(_, answers)| recommend(answers).recommended_path)
            .collect();
        assert_eq!(
            paths,
            vec![
                CareerPath::OtherGovtJobs,
                CareerPath::AgribusinessManagement,
                CareerPath::Research,
            ]
        );
    }

    fn analytics_config(max_batch: usize, flush_threshold: usize) -> AnalyticsConfig {
        AnalyticsConfig {
            max_batch,
            endpoint: "http://127.0.0.1:9/api/v1/analytics/events".to_string(),
            flush_threshold,
            idle_flush_secs: 10,
        }
    }

    #[tokio::test]
    async fn walkthrough_uses_configured_batch_settings() {
        let summary = in_process_walkthrough(&analytics_config(2, 2))
            .await
            .expect("walkthrough runs");
        assert_eq!(summary.total_events, 11);

        // Batches of five exceed the ingest limit of two and are dropped; only the final flush lands.
        let summary = in_process_walkthrough(&analytics_config(2, 5))
            .await
            .expect("walkthrough runs");
        assert_eq!(summary.total_events, 1);
    }

    #[tokio::test]
    async fn http_walkthrough_posts_to_configured_endpoint() {
        let repository = Arc::new(InMemoryAnalyticsRepository::default());
        let service = Arc::new(AnalyticsIngestService::new(repository.clone(), 50));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, analytics_router(service))
                .await
                .expect("ingestion server runs");
        });

        let mut config = analytics_config(50, 3);
        config.endpoint = format!("http://{addr}/api/v1/analytics/events");

        let sent = http_walkthrough(&config).await.expect("walkthrough runs");

        assert_eq!(sent, 11);
        assert_eq!(repository.all().expect("stored events").len(), 11);
    }

    #[tokio::test]
    async fn demo_runs_end_to_end() {
        run_demo(DemoArgs::default()).await.expect("demo completes");
    }
}
