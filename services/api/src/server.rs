use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{AppDirectory, AppState, SyntheticContactDirectory};
use crate::routes::{build_services, with_api_routes};
use autopilot::config::AppConfig;
use autopilot::error::AppError;
use autopilot::telemetry;
use autopilot::workflows::directory::CsvContactDirectory;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let directory = match args.connections_csv.take() {
        Some(path) => {
            let directory = CsvContactDirectory::from_path(&path)?;
            info!(path = %path.display(), contacts = directory.len(), "loaded connections export");
            AppDirectory::Csv(directory)
        }
        None => AppDirectory::Synthetic(SyntheticContactDirectory),
    };

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let services = build_services(directory);
    let app = with_api_routes(services)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "career autopilot api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
