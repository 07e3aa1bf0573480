use crate::cli::ServeArgs;
use crate::infra::{load_knowledge, AppState};
use crate::routes::with_operational_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use clinical_reasoning::config::AppConfig;
use clinical_reasoning::engine::ClinicalReasoningEngine;
use clinical_reasoning::error::AppError;
use clinical_reasoning::telemetry;
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

    // A broken table set must stop startup, not surface per request.
    let knowledge = load_knowledge(config.knowledge.tables.as_deref())?;
    let engine = Arc::new(ClinicalReasoningEngine::new(knowledge));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_operational_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "clinical triage service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
