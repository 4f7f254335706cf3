use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAnalyticsRepository};
use crate::routes::with_api_routes;
use agripath::config::AppConfig;
use agripath::error::AppError;
use agripath::telemetry;
use agripath::workflows::analytics::AnalyticsIngestService;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryAnalyticsRepository::default());
    let analytics = Arc::new(AnalyticsIngestService::new(
        repository,
        config.analytics.max_batch,
    ));

    let app = with_api_routes(analytics)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        max_batch = config.analytics.max_batch,
        "career guidance service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
