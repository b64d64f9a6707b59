use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_loan_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use credit_decision::config::AppConfig;
use credit_decision::error::AppError;
use credit_decision::telemetry;
use credit_decision::underwriting::{CreditDecisionService, UnderwritingPolicy};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(delay_ms) = args.delay_ms.take() {
        config.transport.decision_delay = Duration::from_millis(delay_ms);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let decision_service = Arc::new(CreditDecisionService::new(
        UnderwritingPolicy::default(),
        config.transport.decision_delay,
    ));

    let app = with_loan_routes(decision_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        decision_delay = ?config.transport.decision_delay,
        "credit decision service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
