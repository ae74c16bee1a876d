use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_engine_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use supplier_ai::config::AppConfig;
use supplier_ai::error::AppError;
use supplier_ai::telemetry;
use supplier_ai::{
    CsvRecordSource, EngineOptions, NameMatching, SupplierDataset, SupplierIntelligence,
};
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(dataset) = args.dataset.take() {
        config.dataset.csv_path = dataset;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let options = EngineOptions {
        name_matching: if config.dataset.strict_name_matching {
            NameMatching::Strict
        } else {
            NameMatching::FirstMatch
        },
        ..EngineOptions::default()
    };
    let dataset = Arc::new(SupplierDataset::new(Arc::new(CsvRecordSource::new(
        config.dataset.csv_path.clone(),
    ))));
    let engine = Arc::new(SupplierIntelligence::new(dataset, options));

    let app = with_engine_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        dataset = %config.dataset.csv_path.display(),
        "supplier intelligence service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
